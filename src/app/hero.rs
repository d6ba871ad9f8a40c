use leptos::prelude::*;

use crate::content::{GITHUB_URL, LINKEDIN_URL, SITE_OWNER};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="hero" class="min-h-[72vh] flex items-center">
            <div class="w-full grid md:grid-cols-2 gap-8 items-center">
                <div class="section-content">
                    <h1 class="text-4xl md:text-6xl font-extrabold leading-tight">
                        "Hi, I'm "
                        <span class="bg-clip-text text-transparent bg-gradient-to-r from-purple-300 via-pink-300 to-blue-300">
                            {SITE_OWNER}
                        </span>
                    </h1>

                    <p class="mt-4 text-lg md:text-xl text-slate-300 max-w-xl">
                        "Aspiring CSE Student & Future Innovator — building intuitive web experiences, exploring AI/ML, and crafting elegant code."
                    </p>

                    <div class="mt-6 flex gap-4">
                        <a
                            href="#projects"
                            class="inline-flex items-center rounded-full px-5 py-3 bg-gradient-to-r from-purple-500 to-pink-500 shadow-lg hover:scale-105 transform transition"
                        >
                            "View My Work"
                        </a>
                        <a
                            href="#contact"
                            class="inline-flex items-center rounded-full px-5 py-3 border border-white/10 hover:bg-white/5 transition"
                        >
                            "Let's Talk"
                        </a>
                    </div>

                    <div class="mt-8 flex items-center gap-4 text-sm text-slate-400">
                        <span>"Connect:"</span>
                        <a
                            href=LINKEDIN_URL
                            target="_blank"
                            rel="noreferrer"
                            class="hover:text-pink-300"
                        >
                            "LinkedIn"
                        </a>
                        <span class="opacity-50">"•"</span>
                        <a
                            href=GITHUB_URL
                            target="_blank"
                            rel="noreferrer"
                            class="hover:text-pink-300"
                        >
                            "GitHub"
                        </a>
                    </div>
                </div>

                <div class="mx-auto section-content">
                    <ProfileCard />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProfileCard() -> impl IntoView {
    view! {
        <div class="w-full max-w-sm bg-gradient-to-br from-white/5 to-white/0 border border-white/5 rounded-2xl p-6 backdrop-blur-md">
            <div class="flex items-center gap-4">
                <img
                    src="https://source.unsplash.com/collection/895539/200x200"
                    alt="profile"
                    class="w-20 h-20 rounded-full object-cover border-2 border-white/10"
                />
                <div>
                    <div class="font-semibold">{SITE_OWNER}</div>
                    <div class="text-sm text-slate-300">
                        "Aspiring CSE Student • Web & AI Enthusiast"
                    </div>
                </div>
            </div>

            <p class="mt-4 text-sm text-slate-300">
                "I'm a Computer Science student passionate about building web applications, exploring machine learning, and learning new technologies. I love turning ideas into polished, usable products."
            </p>

            <div class="mt-4 flex flex-wrap gap-2">
                <span class="text-xs px-3 py-1 rounded-full bg-white/5 border">"React"</span>
                <span class="text-xs px-3 py-1 rounded-full bg-white/5 border">"Tailwind"</span>
                <span class="text-xs px-3 py-1 rounded-full bg-white/5 border">"Python"</span>
            </div>
        </div>
    }
}
