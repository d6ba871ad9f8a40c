use leptos::{html, prelude::*};

use crate::contact::{format_contact_handoff, ContactRequest};
use crate::content::{CONTACT_EMAIL, GITHUB_URL, LINKEDIN_URL, SITE_OWNER};

#[component]
pub fn Contact() -> impl IntoView {
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (Some(name_el), Some(email_el), Some(message_el)) = (
            name_ref.get_untracked(),
            email_ref.get_untracked(),
            message_ref.get_untracked(),
        ) else {
            return;
        };
        // The `required` attributes keep empty fields from reaching here
        let request =
            match ContactRequest::new(name_el.value(), email_el.value(), message_el.value()) {
                Ok(request) => request,
                Err(err) => {
                    log::warn!("contact form submitted with {err}");
                    return;
                }
            };
        let href = format_contact_handoff(&request, CONTACT_EMAIL);
        if window().location().set_href(&href).is_err() {
            log::warn!("failed to hand off contact request to mail client");
        }
    };

    view! {
        <section id="contact" class="mt-20 pb-16">
            <h2 class="text-2xl font-bold section-content">"Contact"</h2>
            <p class="text-slate-400 mt-2">
                "Need a collaborator or want to say hi? Send me a message."
            </p>

            <div class="mt-6 grid md:grid-cols-2 gap-6">
                <form
                    class="bg-black/30 border border-white/5 rounded-xl p-6"
                    on:submit=handle_submit
                >
                    <div class="grid gap-3">
                        <label class="text-sm text-slate-300">"Your name"</label>
                        <input
                            node_ref=name_ref
                            name="name"
                            required=true
                            class="rounded-md px-3 py-2 bg-transparent border border-white/10 placeholder:text-slate-500"
                            placeholder="Your full name"
                        />

                        <label class="text-sm text-slate-300">"Email"</label>
                        <input
                            node_ref=email_ref
                            name="email"
                            type="email"
                            required=true
                            class="rounded-md px-3 py-2 bg-transparent border border-white/10 placeholder:text-slate-500"
                            placeholder="you@example.com"
                        />

                        <label class="text-sm text-slate-300">"Message"</label>
                        <textarea
                            node_ref=message_ref
                            name="message"
                            required=true
                            rows=5
                            class="rounded-md px-3 py-2 bg-transparent border border-white/10 placeholder:text-slate-500"
                            placeholder="Tell me about your project or question"
                        ></textarea>

                        <div class="flex items-center justify-between mt-3">
                            <SocialLinks />
                            <button
                                type="submit"
                                class="rounded-full px-5 py-2 bg-gradient-to-r from-purple-500 to-pink-500 shadow hover:scale-105 transition"
                            >
                                "Send"
                            </button>
                        </div>
                    </div>
                </form>

                <div class="flex flex-col justify-between bg-gradient-to-tr from-purple-700/20 to-pink-600/10 border border-white/5 rounded-xl p-6">
                    <div>
                        <h4 class="font-semibold">"Get in touch"</h4>
                        <p class="mt-2 text-slate-300">
                            "Prefer a direct email? Use "
                            <span class="font-medium">{CONTACT_EMAIL}</span>
                            " or find me on LinkedIn and GitHub."
                        </p>

                        <div class="mt-4 flex gap-3 items-center">
                            <SocialLinks />
                        </div>
                    </div>

                    <div class="mt-6 text-sm text-slate-400">
                        <div>"Open to freelance, internships, and collaboration."</div>
                        <div class="mt-3">
                            {format!("© {} {}", chrono::Utc::now().format("%Y"), SITE_OWNER)}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SocialLinks() -> impl IntoView {
    view! {
        <div class="flex items-center gap-3">
            <a
                href=LINKEDIN_URL
                target="_blank"
                rel="noreferrer"
                class="inline-flex items-center gap-2 px-3 py-2 rounded-md bg-white/5 border"
                aria-label="LinkedIn Profile"
            >
                <i class="devicon-linkedin-plain"></i>
                " LinkedIn"
            </a>
            <a
                href=GITHUB_URL
                target="_blank"
                rel="noreferrer"
                class="inline-flex items-center gap-2 px-3 py-2 rounded-md bg-white/5 border"
                aria-label="GitHub Profile"
            >
                <i class="devicon-github-plain"></i>
                " GitHub"
            </a>
        </div>
    }
}
