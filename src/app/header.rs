use leptos::prelude::*;

use crate::content::{CONTACT_EMAIL, NAV_LINKS, SITE_OWNER};

#[component]
pub fn Header() -> impl IntoView {
    // Menu state is owned here; nothing outside the header reads it.
    let (mobile_open, set_mobile_open) = signal(false);

    view! {
        <header class="sticky top-0 z-30 backdrop-blur-md bg-black/20 border-b border-white/5">
            <div class="max-w-6xl mx-auto px-6 py-3 flex items-center justify-between">
                <a href="#hero" class="flex items-center gap-3 font-semibold text-lg">
                    <div class="w-9 h-9 rounded-full bg-gradient-to-tr from-purple-400 to-pink-400 flex items-center justify-center text-black font-bold">
                        "I"
                    </div>
                    <span>{SITE_OWNER}</span>
                </a>

                <nav class="hidden md:flex items-center gap-6 text-sm">
                    {NAV_LINKS
                        .iter()
                        .map(|(label, href)| {
                            view! {
                                <a href=*href class="hover:text-pink-300 transition">
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>

                <div class="hidden md:flex items-center gap-3">
                    <a
                        href=format!("mailto:{CONTACT_EMAIL}")
                        class="flex items-center gap-2 px-3 py-1.5 rounded-md bg-white/5 border border-white/5 hover:bg-white/10 transition"
                    >
                        <span aria-hidden="true">"✉"</span>
                        <span class="text-sm">"Email"</span>
                    </a>
                </div>

                <button
                    class="md:hidden p-2 rounded-md bg-white/5"
                    aria-label="menu"
                    on:click=move |_| set_mobile_open.update(|open| *open = !*open)
                >
                    {move || if mobile_open() { "✕" } else { "☰" }}
                </button>
            </div>

            // Mobile nav, rendered only while the toggle is open
            {move || {
                mobile_open()
                    .then(|| {
                        view! {
                            <div class="md:hidden bg-black/30 border-t border-white/5">
                                <div class="px-6 py-4 flex flex-col gap-3">
                                    {NAV_LINKS
                                        .iter()
                                        .map(|(label, href)| {
                                            view! {
                                                <a
                                                    href=*href
                                                    class="py-2"
                                                    on:click=move |_| set_mobile_open(false)
                                                >
                                                    {*label}
                                                </a>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
            }}
        </header>
    }
}
