use leptos::prelude::*;

use crate::content::{SKILLS, TOOLS};

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="mt-20">
            <h2 class="text-2xl font-bold section-content">"Skills"</h2>
            <p class="text-slate-400 mt-2">"Technical skills & proficiency"</p>

            <div class="mt-6 grid sm:grid-cols-2 gap-6">
                <div class="space-y-4">
                    {SKILLS
                        .iter()
                        .map(|skill| {
                            view! {
                                <div>
                                    <div class="flex items-center justify-between text-sm text-slate-300">
                                        <span>{skill.name}</span>
                                        <span class="text-xs text-slate-400">
                                            {format!("{}%", skill.level)}
                                        </span>
                                    </div>
                                    <div class="mt-2 h-2 rounded-full bg-white/5 overflow-hidden">
                                        <div
                                            class="skill-bar-fill h-2 rounded-full bg-gradient-to-r from-purple-500 to-pink-500 shadow-sm"
                                            style:width=format!("{}%", skill.level)
                                        ></div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="bg-black/30 border border-white/5 rounded-xl p-6">
                    <h4 class="font-semibold">"Tools & Tech"</h4>
                    <div class="mt-3 flex flex-wrap gap-2 text-sm text-slate-200">
                        {TOOLS
                            .iter()
                            .map(|tool| {
                                view! {
                                    <span class="px-3 py-1 rounded-full bg-white/5 border">
                                        {*tool}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>

                    <p class="mt-4 text-sm text-slate-400">
                        "I enjoy learning new frameworks and improving both front-end and back-end skills. My focus is on building clean, maintainable codebases and elegant user experiences."
                    </p>
                </div>
            </div>
        </section>
    }
}
