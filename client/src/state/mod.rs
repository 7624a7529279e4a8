//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `trips` owns the page state and its reducer, `forms` the input drafts, and
//! `controller` connects reducer effects to the API.

pub mod controller;
pub mod forms;
pub mod trips;
