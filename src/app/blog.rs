use leptos::prelude::*;

use crate::content::BLOG_TEASERS;

/// Placeholder cards until real posts exist.
#[component]
pub fn BlogTeasers() -> impl IntoView {
    view! {
        <section id="blog" class="mt-20">
            <h2 class="text-2xl font-bold section-content">"Blog"</h2>
            <p class="text-slate-400 mt-2">
                "Short posts, thoughts, and tutorials — coming soon."
            </p>

            <div class="mt-6 grid sm:grid-cols-2 gap-6">
                {BLOG_TEASERS
                    .iter()
                    .map(|teaser| {
                        view! {
                            <div class="rounded-xl border border-white/5 bg-black/25 p-6">
                                <h4 class="font-semibold">{teaser.title}</h4>
                                <p class="mt-2 text-sm text-slate-300">{teaser.blurb}</p>
                                <div class="mt-4 text-xs text-slate-400">{teaser.meta}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
