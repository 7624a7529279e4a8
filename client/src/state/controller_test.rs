use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};

use futures::executor::block_on;
use pretty_assertions::assert_eq;

use super::*;
use crate::components::meeting_list::{MeetingRow, meeting_rows};
use crate::components::trip_list::{TripRow, trip_rows};
use crate::net::api::{RequestError, mutation_outcome};
use crate::net::types::{Meeting, MeetingId, NewMeeting, NewTrip, Trip, TripId};
use crate::state::forms::{MeetingField, TripField};
use crate::state::trips::ALERT_DELETE_MEETING_FAILED;

// =============================================================
// In-memory backend
// =============================================================

#[derive(Clone, Debug, PartialEq, Eq)]
enum Call {
    ListTrips,
    CreateTrip(serde_json::Value),
    DeleteTrip(TripId),
    ListMeetings(TripId),
    CreateMeeting(TripId, serde_json::Value),
    DeleteMeeting(TripId, MeetingId),
}

#[derive(Default)]
struct Backend {
    trips: Vec<Trip>,
    meetings: BTreeMap<TripId, Vec<Meeting>>,
    next_id: i64,
    calls: Vec<Call>,
    /// Canned `(status, body)` reply for trip creation; `None` echoes the created trip.
    create_trip_reply: Option<(u16, String)>,
    fail_delete_meeting: Option<u16>,
}

#[derive(Default)]
struct FakeApi {
    inner: RefCell<Backend>,
}

impl FakeApi {
    fn with_trips(titles: &[&str]) -> Self {
        let api = Self::default();
        {
            let mut b = api.inner.borrow_mut();
            for title in titles {
                b.next_id += 1;
                let id = b.next_id;
                b.trips.push(Trip {
                    id,
                    title: (*title).to_owned(),
                    description: "New Trip".to_owned(),
                    start_trip: None,
                    end_trip: None,
                    meetings: Vec::new(),
                });
            }
        }
        api
    }

    fn calls(&self) -> Vec<Call> {
        self.inner.borrow().calls.clone()
    }

    fn clear_calls(&self) {
        self.inner.borrow_mut().calls.clear();
    }

    fn trip_id(&self, title: &str) -> TripId {
        self.inner
            .borrow()
            .trips
            .iter()
            .find(|t| t.title == title)
            .map(|t| t.id)
            .unwrap()
    }

    fn add_meeting(&self, trip_id: TripId, title: &str) {
        let mut b = self.inner.borrow_mut();
        b.next_id += 1;
        let id = b.next_id;
        b.meetings
            .entry(trip_id)
            .or_default()
            .push(Meeting { id, title: title.to_owned(), description: String::new() });
    }
}

impl TripsApi for FakeApi {
    async fn list_trips(&self) -> Result<Vec<Trip>, RequestError> {
        let mut b = self.inner.borrow_mut();
        b.calls.push(Call::ListTrips);
        Ok(b.trips.clone())
    }

    async fn create_trip(&self, trip: &NewTrip) -> Result<(), RequestError> {
        let mut b = self.inner.borrow_mut();
        b.calls.push(Call::CreateTrip(serde_json::to_value(trip).unwrap()));
        b.next_id += 1;
        let created = Trip {
            id: b.next_id,
            title: trip.title.clone(),
            description: trip.description.clone(),
            start_trip: Some(trip.start_trip),
            end_trip: Some(trip.end_trip),
            meetings: Vec::new(),
        };
        let (status, body) = match b.create_trip_reply.clone() {
            Some(reply) => reply,
            None => (201, serde_json::to_string(&created).unwrap()),
        };
        if (200..300).contains(&status) {
            b.trips.push(created);
        }
        mutation_outcome::<Trip>(status, &body)
    }

    async fn delete_trip(&self, trip_id: TripId) -> Result<(), RequestError> {
        let mut b = self.inner.borrow_mut();
        b.calls.push(Call::DeleteTrip(trip_id));
        let before = b.trips.len();
        b.trips.retain(|t| t.id != trip_id);
        if b.trips.len() == before {
            return Err(RequestError::Status(404));
        }
        b.meetings.remove(&trip_id);
        Ok(())
    }

    async fn list_meetings(&self, trip_id: TripId) -> Result<Vec<Meeting>, RequestError> {
        let mut b = self.inner.borrow_mut();
        b.calls.push(Call::ListMeetings(trip_id));
        Ok(b.meetings.get(&trip_id).cloned().unwrap_or_default())
    }

    async fn create_meeting(&self, trip_id: TripId, meeting: &NewMeeting) -> Result<(), RequestError> {
        let mut b = self.inner.borrow_mut();
        b.calls
            .push(Call::CreateMeeting(trip_id, serde_json::to_value(meeting).unwrap()));
        b.next_id += 1;
        let created = Meeting { id: b.next_id, title: meeting.title.clone(), description: meeting.description.clone() };
        b.meetings.entry(trip_id).or_default().push(created);
        mutation_outcome::<Meeting>(201, "")
    }

    async fn delete_meeting(&self, trip_id: TripId, meeting_id: MeetingId) -> Result<(), RequestError> {
        let mut b = self.inner.borrow_mut();
        b.calls.push(Call::DeleteMeeting(trip_id, meeting_id));
        if let Some(status) = b.fail_delete_meeting {
            return Err(RequestError::Status(status));
        }
        if let Some(list) = b.meetings.get_mut(&trip_id) {
            list.retain(|m| m.id != meeting_id);
        }
        Ok(())
    }
}

/// Run `msg` and every follow-up request to completion, one at a time.
/// Returns the alerts raised along the way.
fn settle(state: &mut TripsState, api: &FakeApi, msg: Msg) -> Vec<&'static str> {
    let mut queue = VecDeque::from([msg]);
    let mut alerts = Vec::new();
    while let Some(next) = queue.pop_front() {
        for effect in state.reduce(next) {
            match effect {
                Effect::Request(request) => queue.push_back(block_on(perform(api, request))),
                Effect::Alert(text) => alerts.push(text),
            }
        }
    }
    alerts
}

fn fill_trip_form(state: &mut TripsState, api: &FakeApi, destination: &str, start: &str, end: &str) {
    settle(state, api, Msg::TripFormChanged(TripField::Destination, destination.to_owned()));
    settle(state, api, Msg::TripFormChanged(TripField::StartDate, start.to_owned()));
    settle(state, api, Msg::TripFormChanged(TripField::EndDate, end.to_owned()));
}

fn rendered_titles(state: &TripsState) -> Vec<String> {
    trip_rows(&state.trips)
        .into_iter()
        .filter_map(|row| match row {
            TripRow::Trip { title, .. } => Some(title),
            TripRow::Placeholder(_) => None,
        })
        .collect()
}

// =============================================================
// perform
// =============================================================

#[test]
fn perform_wraps_results_in_completion_messages() {
    let api = FakeApi::with_trips(&["Bern"]);
    let msg = block_on(perform(&api, Request::ListTrips { seq: 3 }));
    let Msg::TripsLoaded { seq, result } = msg else {
        panic!("expected TripsLoaded");
    };
    assert_eq!(seq, 3);
    assert_eq!(result.unwrap().len(), 1);

    let msg = block_on(perform(&api, Request::DeleteTrip { trip_id: 99 }));
    assert_eq!(msg, Msg::TripDeleted { trip_id: 99, result: Err(RequestError::Status(404)) });
}

// =============================================================
// End-to-end flows
// =============================================================

#[test]
fn initial_load_renders_placeholder_for_empty_backend() {
    let api = FakeApi::default();
    let mut state = TripsState::default();
    settle(&mut state, &api, Msg::Load);
    assert_eq!(api.calls(), vec![Call::ListTrips]);
    assert_eq!(trip_rows(&state.trips).len(), 1);
    assert!(rendered_titles(&state).is_empty());
}

#[test]
fn add_trip_posts_expanded_dates_then_refetches() {
    let api = FakeApi::default();
    let mut state = TripsState::default();
    settle(&mut state, &api, Msg::Load);
    api.clear_calls();

    fill_trip_form(&mut state, &api, "Berlin", "2025-08-01", "2025-08-05");
    settle(&mut state, &api, Msg::SubmitTrip);

    assert_eq!(
        api.calls(),
        vec![
            Call::CreateTrip(serde_json::json!({
                "title": "Berlin",
                "description": "New Trip",
                "startTrip": "2025-08-01T09:00:00",
                "endTrip": "2025-08-05T18:00:00",
                "meetings": []
            })),
            Call::ListTrips,
        ]
    );
    assert_eq!(rendered_titles(&state), vec!["Berlin".to_owned()]);
    assert!(state.trip_form.destination.is_empty());
    assert!(state.trip_form.start_date.is_empty());
    assert!(state.trip_form.end_date.is_empty());
}

#[test]
fn server_error_on_create_leaves_list_and_form() {
    let api = FakeApi::with_trips(&["Bern"]);
    api.inner.borrow_mut().create_trip_reply = Some((500, String::new()));
    let mut state = TripsState::default();
    settle(&mut state, &api, Msg::Load);
    api.clear_calls();

    fill_trip_form(&mut state, &api, "Test Destination", "2025-08-01", "2025-08-05");
    let alerts = settle(&mut state, &api, Msg::SubmitTrip);

    assert!(alerts.is_empty());
    assert_eq!(api.calls().len(), 1);
    assert_eq!(rendered_titles(&state), vec!["Bern".to_owned()]);
    assert_eq!(state.trip_form.destination, "Test Destination");
}

#[test]
fn created_reply_that_is_not_a_trip_still_clears_form_and_refetches() {
    let api = FakeApi::default();
    api.inner.borrow_mut().create_trip_reply = Some((
        201,
        r#"{"id":1,"destination":"Hamburg","startDate":"2025-08-01","endDate":"2025-08-05"}"#.to_owned(),
    ));
    let mut state = TripsState::default();
    settle(&mut state, &api, Msg::Load);
    api.clear_calls();

    fill_trip_form(&mut state, &api, "Hamburg", "2025-08-01", "2025-08-05");
    settle(&mut state, &api, Msg::SubmitTrip);

    let calls = api.calls();
    assert_eq!(calls.len(), 2);
    assert!(matches!(calls[0], Call::CreateTrip(_)));
    assert_eq!(calls[1], Call::ListTrips);
    assert_eq!(state.trip_form, crate::state::forms::TripDraft::default());
    assert_eq!(rendered_titles(&state), vec!["Hamburg".to_owned()]);
}

#[test]
fn empty_no_content_reply_counts_as_created() {
    let api = FakeApi::default();
    api.inner.borrow_mut().create_trip_reply = Some((204, String::new()));
    let mut state = TripsState::default();
    fill_trip_form(&mut state, &api, "Zurich", "2025-09-01", "2025-09-02");

    settle(&mut state, &api, Msg::SubmitTrip);
    assert_eq!(api.calls().last(), Some(&Call::ListTrips));
    assert!(state.trip_form.destination.is_empty());
}

#[test]
fn selecting_a_then_b_shows_only_b_meetings() {
    let api = FakeApi::with_trips(&["A", "B"]);
    let (a, b) = (api.trip_id("A"), api.trip_id("B"));
    api.add_meeting(a, "A-meeting");
    api.add_meeting(b, "B-meeting");
    let mut state = TripsState::default();
    settle(&mut state, &api, Msg::Load);

    settle(&mut state, &api, Msg::ShowMeetings { trip_id: a, title: "A".to_owned() });
    settle(&mut state, &api, Msg::ShowMeetings { trip_id: b, title: "B".to_owned() });

    assert_eq!(state.meetings_header().as_deref(), Some("Meetings für B"));
    let titles: Vec<String> = meeting_rows(&state.meetings)
        .into_iter()
        .filter_map(|row| match row {
            MeetingRow::Meeting { title, .. } => Some(title),
            MeetingRow::Placeholder(_) => None,
        })
        .collect();
    assert_eq!(titles, vec!["B-meeting".to_owned()]);
}

#[test]
fn deleting_selected_trip_hides_panel_and_blocks_meeting_adds() {
    let api = FakeApi::with_trips(&["A", "B"]);
    let a = api.trip_id("A");
    let mut state = TripsState::default();
    settle(&mut state, &api, Msg::Load);
    settle(&mut state, &api, Msg::ShowMeetings { trip_id: a, title: "A".to_owned() });

    settle(&mut state, &api, Msg::DeleteTrip { trip_id: a, confirmed: true });
    assert!(!state.meetings_visible());
    assert_eq!(rendered_titles(&state), vec!["B".to_owned()]);

    api.clear_calls();
    settle(&mut state, &api, Msg::MeetingFormChanged(MeetingField::Title, "Orphan".to_owned()));
    settle(&mut state, &api, Msg::SubmitMeeting);
    assert!(api.calls().is_empty());
}

#[test]
fn declined_delete_sends_nothing() {
    let api = FakeApi::with_trips(&["A"]);
    let a = api.trip_id("A");
    let mut state = TripsState::default();
    settle(&mut state, &api, Msg::Load);
    api.clear_calls();

    settle(&mut state, &api, Msg::DeleteTrip { trip_id: a, confirmed: false });
    assert!(api.calls().is_empty());
    assert_eq!(rendered_titles(&state), vec!["A".to_owned()]);
}

#[test]
fn created_meeting_round_trips_verbatim() {
    let api = FakeApi::with_trips(&["Vienna"]);
    let t = api.trip_id("Vienna");
    let mut state = TripsState::default();
    settle(&mut state, &api, Msg::Load);
    settle(&mut state, &api, Msg::ShowMeetings { trip_id: t, title: "Vienna".to_owned() });

    settle(&mut state, &api, Msg::MeetingFormChanged(MeetingField::Title, "Important Meeting".to_owned()));
    settle(
        &mut state,
        &api,
        Msg::MeetingFormChanged(MeetingField::Description, "Discuss quarterly results".to_owned()),
    );
    api.clear_calls();
    settle(&mut state, &api, Msg::SubmitMeeting);

    assert_eq!(
        api.calls(),
        vec![
            Call::CreateMeeting(
                t,
                serde_json::json!({ "title": "Important Meeting", "description": "Discuss quarterly results" })
            ),
            Call::ListMeetings(t),
        ]
    );
    let meetings = state.meetings.items();
    assert_eq!(meetings.len(), 1);
    assert_eq!(meetings[0].title, "Important Meeting");
    assert_eq!(meetings[0].description, "Discuss quarterly results");
    assert!(state.meeting_form.title.is_empty());
}

#[test]
fn failed_meeting_delete_alerts_and_keeps_list() {
    let api = FakeApi::with_trips(&["Vienna"]);
    let t = api.trip_id("Vienna");
    api.add_meeting(t, "Kickoff");
    api.inner.borrow_mut().fail_delete_meeting = Some(500);
    let mut state = TripsState::default();
    settle(&mut state, &api, Msg::Load);
    settle(&mut state, &api, Msg::ShowMeetings { trip_id: t, title: "Vienna".to_owned() });
    let meeting_id = state.meetings.items()[0].id;

    let alerts = settle(&mut state, &api, Msg::DeleteMeeting { meeting_id, confirmed: true });
    assert_eq!(alerts, vec![ALERT_DELETE_MEETING_FAILED]);
    assert_eq!(state.meetings.items().len(), 1);
}

#[test]
fn deleted_meeting_disappears_after_refetch() {
    let api = FakeApi::with_trips(&["Vienna"]);
    let t = api.trip_id("Vienna");
    api.add_meeting(t, "Kickoff");
    let mut state = TripsState::default();
    settle(&mut state, &api, Msg::Load);
    settle(&mut state, &api, Msg::ShowMeetings { trip_id: t, title: "Vienna".to_owned() });
    let meeting_id = state.meetings.items()[0].id;

    settle(&mut state, &api, Msg::DeleteMeeting { meeting_id, confirmed: true });
    assert_eq!(meeting_rows(&state.meetings).len(), 1);
    assert!(state.meetings.items().is_empty());
}
