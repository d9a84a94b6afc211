mod about;
mod avatar;
mod contact;
mod expertise;
mod footer;
mod header;
mod hero;
mod homepage;
mod leadership;
mod projects;
mod reveal;
mod section;
mod tech_stack;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::PROFILE;
use footer::Footer;
use header::Navbar;
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
                <MetaTags />
            </head>
            <body class="min-h-screen bg-background text-foreground font-sans antialiased">
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
        <Title formatter=|title| format!("{} - {title}", PROFILE.full_name()) />
        <Meta name="description" content=PROFILE.tagline />

        <Router>
            <Navbar />
            <main>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
            resp.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Not Found" />
        <section class="section-container min-h-[60vh] flex flex-col items-center justify-center text-center gap-4">
            <h1 class="font-display text-4xl font-bold">"404"</h1>
            <p class="text-muted-foreground">"This page doesn't exist."</p>
            <A href="/" attr:class="text-primary hover:underline">
                "Back to the portfolio"
            </A>
        </section>
    }
}
