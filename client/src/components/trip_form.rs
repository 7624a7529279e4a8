//! Add-trip form.
//!
//! Inputs are bound to `TripsState::trip_form`; the reducer clears the draft
//! after a successful create and leaves it untouched on failure.

use leptos::prelude::*;

use crate::state::controller::dispatch;
use crate::state::forms::TripField;
use crate::state::trips::{Msg, TripsState};
use crate::util::dom;

#[component]
pub fn TripForm() -> impl IntoView {
    let state = expect_context::<RwSignal<TripsState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        dispatch(state, Msg::SubmitTrip);
    };

    view! {
        <form id=dom::ADD_TRIP_FORM on:submit=on_submit>
            <TripInput id=dom::TRIP_DESTINATION field=TripField::Destination input_type="text" placeholder="Reiseziel"/>
            <TripInput id=dom::TRIP_START_DATE field=TripField::StartDate input_type="date"/>
            <TripInput id=dom::TRIP_END_DATE field=TripField::EndDate input_type="date"/>
            <button type="submit">"Reise hinzufügen"</button>
        </form>
    }
}

#[component]
fn TripInput(
    id: &'static str,
    field: TripField,
    input_type: &'static str,
    #[prop(optional)] placeholder: Option<&'static str>,
) -> impl IntoView {
    let state = expect_context::<RwSignal<TripsState>>();

    view! {
        <input
            id=id
            type=input_type
            placeholder=placeholder
            required=true
            prop:value=move || state.with(|s| s.trip_form.get(field).to_owned())
            on:input=move |ev| {
                dispatch(state, Msg::TripFormChanged(field, event_target_value(&ev)));
            }
        />
    }
}
