//! Wire DTOs for the `/v1` trips API.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Decoding is lenient about
//! nullable columns (`description`, trip dates) so one sparse record cannot
//! fail a whole list fetch.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned trip identifier.
pub type TripId = i64;

/// Server-assigned meeting identifier.
pub type MeetingId = i64;

/// A business trip as returned by `GET /v1/trips`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: TripId,
    /// Destination, shown as the row heading.
    #[serde(deserialize_with = "string_or_null")]
    pub title: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub description: String,
    #[serde(default)]
    pub start_trip: Option<NaiveDateTime>,
    #[serde(default)]
    pub end_trip: Option<NaiveDateTime>,
    /// Server-managed; the client never edits this list directly.
    #[serde(default)]
    pub meetings: Vec<Meeting>,
}

/// A meeting nested under exactly one trip.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    pub id: MeetingId,
    #[serde(deserialize_with = "string_or_null")]
    pub title: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub description: String,
}

/// Request body for `POST /v1/trips`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTrip {
    pub title: String,
    pub description: String,
    pub start_trip: NaiveDateTime,
    pub end_trip: NaiveDateTime,
    pub meetings: Vec<NewMeeting>,
}

/// Request body for `POST /v1/trips/{id}/meetings`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewMeeting {
    pub title: String,
    pub description: String,
}

fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
