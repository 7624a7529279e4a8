//! Trips page: trip form, trip list, and the meetings panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only screen of the app. It triggers the initial trip fetch once the
//! page is live in the browser; everything after that is driven by user
//! actions dispatched from the components.

use leptos::prelude::*;

use crate::components::meetings_panel::MeetingsPanel;
use crate::components::trip_form::TripForm;
use crate::components::trip_list::TripList;
use crate::state::controller::dispatch;
use crate::state::trips::{Msg, TripsState};

pub const PAGE_TITLE: &str = "Geschäftsreisen Verwaltung";

#[component]
pub fn TripsPage() -> impl IntoView {
    let state = expect_context::<RwSignal<TripsState>>();

    // Effects only run on the client, so SSR never issues the fetch.
    Effect::new(move || dispatch(state, Msg::Load));

    view! {
        <div class="container">
            <h1>{PAGE_TITLE}</h1>
            <section class="trips-form">
                <h2>"Neue Geschäftsreise"</h2>
                <TripForm/>
            </section>
            <section class="trips-overview">
                <h2>"Geschäftsreisen"</h2>
                <TripList/>
            </section>
            <MeetingsPanel/>
        </div>
    }
}
