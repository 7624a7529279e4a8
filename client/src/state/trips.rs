//! Trip/meeting application state and its reducer.
//!
//! DESIGN
//! ======
//! `TripsState` is the single source of truth for the page: the fetched trip
//! list, the selected trip, that trip's meetings, and both form drafts. All
//! changes go through [`TripsState::reduce`], which mutates state and returns
//! the [`Effect`]s to perform. Network completions come back as [`Msg`]s, so
//! the reducer never awaits and stays testable without a browser.
//!
//! STALE RESPONSES
//! ===============
//! Every list fetch is stamped with a per-list sequence number. A completion
//! carrying anything but the latest number is dropped, so overlapping
//! re-fetches resolve to the most recently issued one rather than the one
//! that happened to finish last.

#[cfg(test)]
#[path = "trips_test.rs"]
mod trips_test;

use crate::net::api::RequestError;
use crate::net::types::{Meeting, MeetingId, NewMeeting, NewTrip, Trip, TripId};
use crate::state::forms::{MeetingDraft, MeetingField, TripDraft, TripField};

pub const TRIPS_EMPTY: &str = "Keine Geschäftsreisen gefunden.";
pub const TRIPS_FAILED: &str = "Fehler beim Laden der Reisen. Läuft der Backend-Server auf Port 8082?";
pub const MEETINGS_EMPTY: &str = "Keine Meetings für diese Reise.";
pub const MEETINGS_FAILED: &str = "Fehler beim Laden der Meetings.";
pub const CONFIRM_DELETE_TRIP: &str = "Soll diese Geschäftsreise wirklich gelöscht werden?";
pub const CONFIRM_DELETE_MEETING: &str = "Soll dieses Meeting wirklich gelöscht werden?";
pub const ALERT_DELETE_MEETING_FAILED: &str = "Löschen des Meetings fehlgeschlagen.";

/// Display state of a fetched list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ListView<T> {
    /// No fetch has completed yet; nothing is rendered.
    #[default]
    Pending,
    Ready(Vec<T>),
    /// The last fetch failed; a single explanatory row is rendered.
    Failed,
}

impl<T> ListView<T> {
    pub fn items(&self) -> &[T] {
        match self {
            Self::Ready(items) => items,
            Self::Pending | Self::Failed => &[],
        }
    }
}

/// The trip whose meetings are shown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub trip_id: TripId,
    pub title: String,
}

/// Reducer input: user intents and request completions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    /// Initial page load.
    Load,
    TripsLoaded { seq: u64, result: Result<Vec<Trip>, RequestError> },
    TripFormChanged(TripField, String),
    SubmitTrip,
    TripCreated(Result<(), RequestError>),
    /// `confirmed` is the answer to the blocking confirmation prompt.
    DeleteTrip { trip_id: TripId, confirmed: bool },
    TripDeleted { trip_id: TripId, result: Result<(), RequestError> },
    ShowMeetings { trip_id: TripId, title: String },
    MeetingsLoaded { trip_id: TripId, seq: u64, result: Result<Vec<Meeting>, RequestError> },
    MeetingFormChanged(MeetingField, String),
    SubmitMeeting,
    MeetingCreated { trip_id: TripId, result: Result<(), RequestError> },
    DeleteMeeting { meeting_id: MeetingId, confirmed: bool },
    MeetingDeleted { trip_id: TripId, meeting_id: MeetingId, result: Result<(), RequestError> },
}

/// A single API call the reducer wants issued.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Request {
    ListTrips { seq: u64 },
    CreateTrip(NewTrip),
    DeleteTrip { trip_id: TripId },
    ListMeetings { trip_id: TripId, seq: u64 },
    CreateMeeting { trip_id: TripId, meeting: NewMeeting },
    DeleteMeeting { trip_id: TripId, meeting_id: MeetingId },
}

/// Reducer output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Request(Request),
    /// Blocking user-visible alert.
    Alert(&'static str),
}

/// Page state for the trips screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TripsState {
    pub trips: ListView<Trip>,
    pub selection: Option<Selection>,
    pub meetings: ListView<Meeting>,
    pub trip_form: TripDraft,
    pub meeting_form: MeetingDraft,
    trips_seq: u64,
    meetings_seq: u64,
}

impl TripsState {
    /// The meetings panel is shown exactly when a trip is selected.
    pub fn meetings_visible(&self) -> bool {
        self.selection.is_some()
    }

    pub fn meetings_header(&self) -> Option<String> {
        self.selection
            .as_ref()
            .map(|s| format!("Meetings für {}", s.title))
    }

    pub fn selected_trip_id(&self) -> Option<TripId> {
        self.selection.as_ref().map(|s| s.trip_id)
    }

    /// Apply one message and return the effects to perform, in order.
    pub fn reduce(&mut self, msg: Msg) -> Vec<Effect> {
        match msg {
            Msg::Load => vec![self.fetch_trips()],
            Msg::TripsLoaded { seq, result } => {
                self.on_trips_loaded(seq, result);
                Vec::new()
            }
            Msg::TripFormChanged(field, value) => {
                self.trip_form.set(field, value);
                Vec::new()
            }
            Msg::SubmitTrip => self.submit_trip(),
            Msg::TripCreated(result) => self.on_trip_created(result),
            Msg::DeleteTrip { trip_id, confirmed } => {
                if !confirmed {
                    return Vec::new();
                }
                vec![Effect::Request(Request::DeleteTrip { trip_id })]
            }
            Msg::TripDeleted { trip_id, result } => self.on_trip_deleted(trip_id, result),
            Msg::ShowMeetings { trip_id, title } => {
                self.selection = Some(Selection { trip_id, title });
                self.meetings = ListView::Pending;
                vec![self.fetch_meetings(trip_id)]
            }
            Msg::MeetingsLoaded { trip_id, seq, result } => {
                self.on_meetings_loaded(trip_id, seq, result);
                Vec::new()
            }
            Msg::MeetingFormChanged(field, value) => {
                self.meeting_form.set(field, value);
                Vec::new()
            }
            Msg::SubmitMeeting => {
                let Some(trip_id) = self.selected_trip_id() else {
                    return Vec::new();
                };
                let meeting = self.meeting_form.to_new_meeting();
                vec![Effect::Request(Request::CreateMeeting { trip_id, meeting })]
            }
            Msg::MeetingCreated { trip_id, result } => self.on_meeting_created(trip_id, result),
            Msg::DeleteMeeting { meeting_id, confirmed } => {
                let Some(trip_id) = self.selected_trip_id() else {
                    log::debug!("dropping delete of meeting {meeting_id}: no trip selected");
                    return Vec::new();
                };
                if !confirmed {
                    return Vec::new();
                }
                vec![Effect::Request(Request::DeleteMeeting { trip_id, meeting_id })]
            }
            Msg::MeetingDeleted { trip_id, meeting_id, result } => self.on_meeting_deleted(trip_id, meeting_id, result),
        }
    }

    fn fetch_trips(&mut self) -> Effect {
        self.trips_seq += 1;
        Effect::Request(Request::ListTrips { seq: self.trips_seq })
    }

    fn fetch_meetings(&mut self, trip_id: TripId) -> Effect {
        self.meetings_seq += 1;
        Effect::Request(Request::ListMeetings { trip_id, seq: self.meetings_seq })
    }

    /// Re-fetch meetings for whatever trip is selected now.
    fn refetch_selected_meetings(&mut self) -> Vec<Effect> {
        match self.selected_trip_id() {
            Some(trip_id) => vec![self.fetch_meetings(trip_id)],
            None => Vec::new(),
        }
    }

    fn on_trips_loaded(&mut self, seq: u64, result: Result<Vec<Trip>, RequestError>) {
        if seq != self.trips_seq {
            log::debug!("dropping stale trip list (seq {seq}, latest {})", self.trips_seq);
            return;
        }
        self.trips = match result {
            Ok(trips) => ListView::Ready(trips),
            Err(e) => {
                log::error!("Fehler beim Laden der Geschäftsreisen: {e}");
                ListView::Failed
            }
        };
    }

    fn submit_trip(&mut self) -> Vec<Effect> {
        match self.trip_form.to_new_trip() {
            Ok(trip) => vec![Effect::Request(Request::CreateTrip(trip))],
            Err(e) => {
                log::warn!("Reise nicht gesendet: {e}");
                Vec::new()
            }
        }
    }

    fn on_trip_created(&mut self, result: Result<(), RequestError>) -> Vec<Effect> {
        match result {
            Ok(()) => {
                self.trip_form = TripDraft::default();
                vec![self.fetch_trips()]
            }
            Err(e) => {
                log::error!("Fehler beim Hinzufügen der Reise: {e}");
                Vec::new()
            }
        }
    }

    fn on_trip_deleted(&mut self, trip_id: TripId, result: Result<(), RequestError>) -> Vec<Effect> {
        if let Err(e) = result {
            log::error!("Fehler beim Löschen der Reise: {e}");
            return Vec::new();
        }
        if self.selected_trip_id() == Some(trip_id) {
            self.selection = None;
            self.meetings = ListView::Pending;
        }
        vec![self.fetch_trips()]
    }

    fn on_meetings_loaded(&mut self, trip_id: TripId, seq: u64, result: Result<Vec<Meeting>, RequestError>) {
        if seq != self.meetings_seq || self.selected_trip_id() != Some(trip_id) {
            log::debug!("dropping stale meeting list for trip {trip_id} (seq {seq}, latest {})", self.meetings_seq);
            return;
        }
        self.meetings = match result {
            Ok(meetings) => ListView::Ready(meetings),
            Err(e) => {
                log::error!("Fehler beim Laden der Meetings: {e}");
                ListView::Failed
            }
        };
    }

    fn on_meeting_created(&mut self, trip_id: TripId, result: Result<(), RequestError>) -> Vec<Effect> {
        match result {
            Ok(()) => {
                self.meeting_form = MeetingDraft::default();
                self.refetch_selected_meetings()
            }
            Err(e) => {
                log::error!("Fehler beim Hinzufügen des Meetings zu Reise {trip_id}: {e}");
                Vec::new()
            }
        }
    }

    fn on_meeting_deleted(
        &mut self,
        trip_id: TripId,
        meeting_id: MeetingId,
        result: Result<(), RequestError>,
    ) -> Vec<Effect> {
        match result {
            Ok(()) => self.refetch_selected_meetings(),
            Err(e) => {
                log::error!("Fehler beim Löschen des Meetings {meeting_id} (Reise {trip_id}): {e}");
                vec![Effect::Alert(ALERT_DELETE_MEETING_FAILED)]
            }
        }
    }
}
