//! Event-delegation decoding for the trip and meeting lists.
//!
//! DESIGN
//! ======
//! Each list has one click listener on its container. The clicked element is
//! reduced to an [`ActionTarget`] (class names plus `data-*` attributes) and
//! decoded into a typed [`ListAction`]. The decoder is pure so the DOM
//! contract (`details-btn` / `delete-btn` and their data attributes) can be
//! tested without a browser.

#[cfg(test)]
#[path = "delegation_test.rs"]
mod delegation_test;

use crate::net::types::{MeetingId, TripId};
use crate::state::trips::{CONFIRM_DELETE_MEETING, CONFIRM_DELETE_TRIP, Msg};

pub const DETAILS_BTN: &str = "details-btn";
pub const DELETE_BTN: &str = "delete-btn";

/// What the decoder needs to know about a clicked element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionTarget {
    pub classes: Vec<String>,
    /// `data-trip-id`
    pub trip_id: Option<String>,
    /// `data-trip-title`
    pub trip_title: Option<String>,
    /// `data-meeting-id`
    pub meeting_id: Option<String>,
}

impl ActionTarget {
    pub fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c == name)
    }
}

/// A row action activated by the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListAction {
    ShowMeetings { trip_id: TripId, title: String },
    DeleteTrip { trip_id: TripId },
    DeleteMeeting { meeting_id: MeetingId },
}

impl ListAction {
    /// Prompt the user must accept before the action runs, if any.
    pub fn confirmation(&self) -> Option<&'static str> {
        match self {
            Self::ShowMeetings { .. } => None,
            Self::DeleteTrip { .. } => Some(CONFIRM_DELETE_TRIP),
            Self::DeleteMeeting { .. } => Some(CONFIRM_DELETE_MEETING),
        }
    }

    pub fn into_msg(self, confirmed: bool) -> Msg {
        match self {
            Self::ShowMeetings { trip_id, title } => Msg::ShowMeetings { trip_id, title },
            Self::DeleteTrip { trip_id } => Msg::DeleteTrip { trip_id, confirmed },
            Self::DeleteMeeting { meeting_id } => Msg::DeleteMeeting { meeting_id, confirmed },
        }
    }
}

/// Decode a clicked element into a row action.
///
/// Clicks on anything other than a tagged action button yield `None`.
pub fn decode(target: &ActionTarget) -> Option<ListAction> {
    if target.has_class(DELETE_BTN) {
        if let Some(meeting_id) = parse_id(target.meeting_id.as_deref()) {
            return Some(ListAction::DeleteMeeting { meeting_id });
        }
        return parse_id(target.trip_id.as_deref()).map(|trip_id| ListAction::DeleteTrip { trip_id });
    }
    if target.has_class(DETAILS_BTN) {
        let trip_id = parse_id(target.trip_id.as_deref())?;
        let title = target.trip_title.clone().unwrap_or_default();
        return Some(ListAction::ShowMeetings { trip_id, title });
    }
    None
}

fn parse_id(raw: Option<&str>) -> Option<i64> {
    raw?.trim().parse().ok()
}

/// Read the clicked element of a delegated click event.
#[cfg(feature = "hydrate")]
pub fn action_target(ev: &leptos::ev::MouseEvent) -> Option<ActionTarget> {
    use wasm_bindgen::JsCast as _;

    let el = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    Some(ActionTarget {
        classes: el.class_name().split_whitespace().map(str::to_owned).collect(),
        trip_id: el.get_attribute("data-trip-id"),
        trip_title: el.get_attribute("data-trip-title"),
        meeting_id: el.get_attribute("data-meeting-id"),
    })
}

#[cfg(not(feature = "hydrate"))]
pub fn action_target(ev: &leptos::ev::MouseEvent) -> Option<ActionTarget> {
    let _ = ev;
    None
}
