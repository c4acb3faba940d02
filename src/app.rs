//! Root application component with routing and the staff navigation header.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{activity::ActivityPage, home_board::HomeBoardPage};

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
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Sets up metadata and client-side routing. Screen state is deliberately
/// not provided here: each page owns its signals, so leaving a screen
/// resets it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/rollboard.css"/>
        <Title text="Rollboard"/>

        <Router>
            <Header/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomeBoardPage/>
                <Route path=StaticSegment("activity") view=ActivityPage/>
            </Routes>
        </Router>
    }
}

/// Top navigation shared by both staff screens.
#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="app-header">
            <a class="app-header__brand" href="/">"Rollboard"</a>
            <nav class="app-header__nav">
                <a class="app-header__link" href="/">"Daily Care"</a>
                <a class="app-header__link" href="/activity">"Activity"</a>
            </nav>
        </header>
    }
}
