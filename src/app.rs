mod about;
mod blog;
mod contact;
mod footer;
mod header;
mod hero;
mod homepage;
mod projects;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use footer::Footer;
use header::Header;
use homepage::HomePage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body class="min-h-screen bg-gradient-to-b from-[#0f172a] via-[#0b1222] to-[#0b0736] text-slate-100">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // sets the document title
        <Title formatter=|title| format!("Iftekhar U. Bhuiyan - {title}") />

        // decorative background glow
        <div class="fixed inset-0 -z-10 pointer-events-none">
            <div class="absolute -right-48 -top-48 w-[600px] h-[600px] rounded-full blur-3xl opacity-30 bg-gradient-to-tr from-purple-600 to-pink-500 mix-blend-screen"></div>
            <div class="absolute -left-48 -bottom-48 w-[500px] h-[500px] rounded-full blur-2xl opacity-20 bg-gradient-to-br from-blue-500 to-purple-700 mix-blend-multiply"></div>
        </div>

        <Router>
            <Header />
            <main class="mx-auto px-6 py-12 w-full max-w-6xl">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}
