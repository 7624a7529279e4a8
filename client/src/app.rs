//! Root application component and HTML shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::trips::{PAGE_TITLE, TripsPage};
use crate::state::trips::TripsState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="de">
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
/// Provides the trips state context and mounts the trips page at `/`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let trips = RwSignal::new(TripsState::default());
    provide_context(trips);

    view! {
        <Stylesheet id="leptos" href="/pkg/tripdesk.css"/>
        <Title text=PAGE_TITLE/>
        <Router>
            <Routes fallback=|| "Seite nicht gefunden.".into_view()>
                <Route path=StaticSegment("") view=TripsPage/>
            </Routes>
        </Router>
    }
}
