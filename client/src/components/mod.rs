//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the trip and meeting lists and forms while reading and
//! dispatching to the shared `TripsState` context.

pub mod meeting_form;
pub mod meeting_list;
pub mod meetings_panel;
pub mod trip_form;
pub mod trip_list;
