//! Element ids of the trips page.
//!
//! The E2E suite selects on these, so they are part of the UI contract.

pub const TRIPS_LIST: &str = "trips-list";
pub const ADD_TRIP_FORM: &str = "add-trip-form";
pub const TRIP_DESTINATION: &str = "trip-destination";
pub const TRIP_START_DATE: &str = "trip-start-date";
pub const TRIP_END_DATE: &str = "trip-end-date";
pub const MEETINGS_SECTION: &str = "meetings-section";
pub const MEETINGS_HEADER: &str = "meetings-header";
pub const MEETINGS_LIST: &str = "meetings-list";
pub const ADD_MEETING_FORM: &str = "add-meeting-form";
pub const MEETING_TITLE: &str = "meeting-title";
pub const MEETING_DESCRIPTION: &str = "meeting-description";
