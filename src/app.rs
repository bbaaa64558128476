mod icons;
mod navigation;
mod sections;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use navigation::Navigation;
use sections::{About, Contact, Experience, Hero, Projects};

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
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-gray-900">
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
        <Title formatter=|title| format!("Portfolio - {title}") />
        <Meta name="description" content="Personal portfolio: projects, experience and contact details." />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=Portfolio />
            </Routes>
        </Router>
    }
}

/// The whole site: floating navigation above the five sections, in registry order.
#[component]
fn Portfolio() -> impl IntoView {
    view! {
        <Title text="Home" />
        <div class="bg-gray-900 text-gray-100 min-h-screen font-sans relative">
            <Navigation />
            <main>
                <Hero />
                <About />
                <Projects />
                <Experience />
                <Contact />
            </main>
        </div>
    }
}
