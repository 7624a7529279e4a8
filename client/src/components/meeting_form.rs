//! Add-meeting form for the selected trip.

use leptos::prelude::*;

use crate::state::controller::dispatch;
use crate::state::forms::MeetingField;
use crate::state::trips::{Msg, TripsState};
use crate::util::dom;

#[component]
pub fn MeetingForm() -> impl IntoView {
    let state = expect_context::<RwSignal<TripsState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        dispatch(state, Msg::SubmitMeeting);
    };
    let value = move |field: MeetingField| state.with(|s| s.meeting_form.get(field).to_owned());

    view! {
        <form id=dom::ADD_MEETING_FORM on:submit=on_submit>
            <input
                id=dom::MEETING_TITLE
                type="text"
                placeholder="Titel"
                required=true
                prop:value=move || value(MeetingField::Title)
                on:input=move |ev| {
                    dispatch(state, Msg::MeetingFormChanged(MeetingField::Title, event_target_value(&ev)));
                }
            />
            <textarea
                id=dom::MEETING_DESCRIPTION
                placeholder="Beschreibung"
                prop:value=move || value(MeetingField::Description)
                on:input=move |ev| {
                    dispatch(state, Msg::MeetingFormChanged(MeetingField::Description, event_target_value(&ev)));
                }
            ></textarea>
            <button type="submit">"Meeting hinzufügen"</button>
        </form>
    }
}
