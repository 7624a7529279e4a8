//! Networking modules for the trips REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues HTTP calls and classifies failures, `types` defines the wire
//! schema shared with the backend.

pub mod api;
pub mod types;
