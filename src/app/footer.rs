use chrono::{DateTime, Datelike, Utc};
use leptos::prelude::*;

use crate::content::{CONTACT_EMAIL, GITHUB_URL, LINKEDIN_URL, SITE_OWNER};

// Captured by build.rs
const BUILD_TIME: &str = env!("BUILD_TIME");

#[component]
pub fn Footer() -> impl IntoView {
    let built = DateTime::parse_from_rfc3339(BUILD_TIME)
        .map(|dt| dt.format("%b %e, %Y").to_string())
        .unwrap_or_else(|_| BUILD_TIME.to_string());

    view! {
        <footer class="mt-12 py-6 border-t border-white/5">
            <div class="max-w-6xl mx-auto px-6 flex items-center justify-between text-sm text-slate-400">
                <div>
                    {format!("© {} {} • built {}", Utc::now().year(), SITE_OWNER, built)}
                </div>
                <div class="flex items-center gap-4">
                    <a
                        href=LINKEDIN_URL
                        target="_blank"
                        rel="noreferrer"
                        class="hover:text-pink-300"
                        aria-label="LinkedIn Profile"
                    >
                        <i class="devicon-linkedin-plain"></i>
                    </a>
                    <a
                        href=GITHUB_URL
                        target="_blank"
                        rel="noreferrer"
                        class="hover:text-pink-300"
                        aria-label="GitHub Profile"
                    >
                        <i class="devicon-github-plain"></i>
                    </a>
                    <a href=format!("mailto:{CONTACT_EMAIL}") class="hover:text-pink-300">
                        <span aria-hidden="true">"✉"</span>
                    </a>
                </div>
            </div>
        </footer>
    }
}
