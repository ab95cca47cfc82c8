mod about;
mod achievements;
mod certifications;
mod contact;
mod education;
mod footer;
mod gallery;
mod hero;
mod navbar;
mod projects;
mod skills;
mod starfield;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use about::About;
use achievements::Achievements;
use certifications::Certifications;
use contact::Contact;
use education::Education;
use footer::Footer;
use gallery::Gallery;
use hero::Hero;
use navbar::Navbar;
use projects::Projects;
use skills::Skills;
use starfield::Starfield;

use crate::config::SiteConfig;
use crate::content::SITE_TITLE;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="dark">
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
            <body class="font-sans bg-black text-white min-h-screen">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(SiteConfig::default());

    // Persist the display-mode flag once at startup; the current build always
    // forces dark mode and offers no runtime toggle.
    #[cfg(feature = "hydrate")]
    {
        use codee::string::JsonSerdeWasmCodec;
        use leptos_use::storage::use_local_storage;

        let config = expect_context::<SiteConfig>();
        let (_, set_dark_mode, _) = use_local_storage::<bool, JsonSerdeWasmCodec>("darkMode");
        Effect::new(move |_| {
            set_dark_mode(config.dark_mode);
            if let Some(root) = document().document_element() {
                let _ = root.class_list().add_1("dark");
            }
        });
    }

    view! {
        <Title text=SITE_TITLE />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// Composes the page sections in their fixed order.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Starfield />
        <Navbar />
        <main>
            <Hero />
            <About />
            <Education />
            <Skills />
            <Projects />
            <Achievements />
            <Certifications />
            <Gallery />
            <Contact />
        </main>
        <Footer />
    }
}
