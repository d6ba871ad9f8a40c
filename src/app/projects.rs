use leptos::prelude::*;

use crate::content::PROJECTS;

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="mt-20">
            <h2 class="text-2xl font-bold section-content">"Projects"</h2>
            <p class="text-slate-400 mt-2">"Selected projects with hover interactions"</p>

            <div class="mt-6 grid sm:grid-cols-2 lg:grid-cols-3 gap-6">
                {PROJECTS
                    .iter()
                    .map(|project| {
                        view! {
                            <article class="rounded-xl overflow-hidden border border-white/5 bg-black/25 hover:-translate-y-1.5 transition-transform duration-200">
                                <div class="relative">
                                    <img
                                        src=project.img
                                        alt=project.title
                                        class="w-full h-44 object-cover"
                                    />
                                    <div class="absolute inset-0 bg-gradient-to-t from-black/60 to-transparent opacity-80"></div>
                                    <div class="absolute bottom-3 left-3 text-white">
                                        <h3 class="font-semibold">{project.title}</h3>
                                        <p class="text-xs text-white/90 max-w-xs">{project.desc}</p>
                                    </div>
                                </div>
                                <div class="p-4 flex items-center justify-between">
                                    <div class="flex gap-2 text-xs text-slate-300">
                                        {project
                                            .tags
                                            .iter()
                                            .map(|tag| {
                                                view! {
                                                    <span class="px-2 py-1 rounded-md bg-white/5">
                                                        {*tag}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                    <a href="#" class="text-sm text-pink-300 hover:underline">
                                        "Details →"
                                    </a>
                                </div>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
