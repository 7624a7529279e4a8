//! Meetings panel, shown only while a trip is selected.

use leptos::prelude::*;

use crate::components::meeting_form::MeetingForm;
use crate::components::meeting_list::MeetingList;
use crate::state::trips::TripsState;
use crate::util::dom;

#[component]
pub fn MeetingsPanel() -> impl IntoView {
    let state = expect_context::<RwSignal<TripsState>>();
    let visible = Memo::new(move |_| state.with(TripsState::meetings_visible));
    let header = Memo::new(move |_| state.with(TripsState::meetings_header).unwrap_or_default());

    view! {
        <section id=dom::MEETINGS_SECTION style:display=move || if visible.get() { "block" } else { "none" }>
            <h2 id=dom::MEETINGS_HEADER>{move || header.get()}</h2>
            <MeetingList/>
            <MeetingForm/>
        </section>
    }
}
