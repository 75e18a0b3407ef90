//! Root application component with routing and the SSR document shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::portfolio::PortfolioPage;
use crate::util::motion::REVEAL_SELECTOR;

/// Shows reveal targets when scripts are disabled and no observer will run.
fn noscript_reveal_css() -> String {
    format!("{REVEAL_SELECTOR}{{opacity:1;transform:none;}}")
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
                <noscript>
                    <style>{noscript_reveal_css()}</style>
                </noscript>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// The site is a single page; anything else falls through to a plain
/// not-found message.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    #[cfg(feature = "hydrate")]
    Effect::new(move || crate::util::reveal::install());

    view! {
        <Stylesheet id="leptos" href="/pkg/folio.css"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=PortfolioPage/>
            </Routes>
        </Router>
    }
}
