//! Runs reducer effects against the API and feeds completions back.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components call [`dispatch`] with a [`Msg`]. The reducer runs inside a
//! single signal update; each resulting request is spawned on the browser
//! event loop and its completion is dispatched as a new message. Nothing
//! here tracks in-flight requests; stale completions are filtered by the
//! reducer's sequence numbers.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use leptos::prelude::*;

use crate::net::api::TripsApi;
use crate::state::trips::{Effect, Msg, Request, TripsState};
use crate::util::delegation::ListAction;

/// Issue one request and wrap its outcome as the matching completion message.
pub async fn perform<A: TripsApi>(api: &A, request: Request) -> Msg {
    match request {
        Request::ListTrips { seq } => Msg::TripsLoaded { seq, result: api.list_trips().await },
        Request::CreateTrip(trip) => Msg::TripCreated(api.create_trip(&trip).await),
        Request::DeleteTrip { trip_id } => Msg::TripDeleted { trip_id, result: api.delete_trip(trip_id).await },
        Request::ListMeetings { trip_id, seq } => {
            Msg::MeetingsLoaded { trip_id, seq, result: api.list_meetings(trip_id).await }
        }
        Request::CreateMeeting { trip_id, meeting } => {
            Msg::MeetingCreated { trip_id, result: api.create_meeting(trip_id, &meeting).await }
        }
        Request::DeleteMeeting { trip_id, meeting_id } => {
            Msg::MeetingDeleted { trip_id, meeting_id, result: api.delete_meeting(trip_id, meeting_id).await }
        }
    }
}

/// Reduce `msg` into the shared state and start the resulting effects.
pub fn dispatch(state: RwSignal<TripsState>, msg: Msg) {
    let mut effects = Vec::new();
    state.update(|s| effects = s.reduce(msg));
    for effect in effects {
        match effect {
            Effect::Request(request) => spawn_request(state, request),
            Effect::Alert(text) => crate::util::browser::alert(text),
        }
    }
}

#[cfg(feature = "hydrate")]
fn spawn_request(state: RwSignal<TripsState>, request: Request) {
    leptos::task::spawn_local(async move {
        let msg = perform(&crate::net::api::HttpApi::default(), request).await;
        dispatch(state, msg);
    });
}

#[cfg(not(feature = "hydrate"))]
fn spawn_request(_state: RwSignal<TripsState>, request: Request) {
    log::debug!("not issuing {request:?} outside the browser");
}

/// Run a decoded row action, asking for confirmation first where required.
pub fn activate(state: RwSignal<TripsState>, action: ListAction) {
    let confirmed = action.confirmation().map_or(true, crate::util::browser::confirm);
    dispatch(state, action.into_msg(confirmed));
}
