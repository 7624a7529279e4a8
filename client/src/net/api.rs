//! REST client for the `/v1` trips API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: `HttpApi` answers every call with
//! `RequestError::Unavailable` since these endpoints are only meaningful in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every operation issues exactly one request and returns `RequestError` on a
//! transport failure or non-2xx status. There are no retries; callers decide
//! how a failure degrades the UI. Mutations succeed on any 2xx status; their
//! response bodies are never required to match the wire types.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Meeting, MeetingId, NewMeeting, NewTrip, Trip, TripId};

/// Base path of the trips API, relative to the page origin.
pub const API_BASE: &str = "/v1";

/// Failure of a single API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// The request never produced a response (offline, CORS, DNS, ...).
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// A 2xx response whose body was not the expected JSON.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// HTTP is not available in this build (SSR or native).
    #[error("not available on server")]
    Unavailable,
}

impl RequestError {
    /// HTTP status carried by the error, when the server responded at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status(status) => Some(*status),
            _ => None,
        }
    }
}

/// Operations the trips UI performs against the backend.
///
/// The browser uses [`HttpApi`]; tests plug in an in-memory recorder.
#[allow(async_fn_in_trait)]
pub trait TripsApi {
    /// `GET /trips`
    async fn list_trips(&self) -> Result<Vec<Trip>, RequestError>;
    /// `POST /trips`
    async fn create_trip(&self, trip: &NewTrip) -> Result<(), RequestError>;
    /// `DELETE /trips/{id}`
    async fn delete_trip(&self, trip_id: TripId) -> Result<(), RequestError>;
    /// `GET /trips/{id}/meetings`
    async fn list_meetings(&self, trip_id: TripId) -> Result<Vec<Meeting>, RequestError>;
    /// `POST /trips/{id}/meetings`
    async fn create_meeting(&self, trip_id: TripId, meeting: &NewMeeting) -> Result<(), RequestError>;
    /// `DELETE /trips/{id}/meetings/{meetingId}`
    async fn delete_meeting(&self, trip_id: TripId, meeting_id: MeetingId) -> Result<(), RequestError>;
}

/// Classify a mutation response by status alone.
///
/// A 2xx body that is empty or not shaped like `T` is still a success; it is
/// only noted at debug level.
pub fn mutation_outcome<T: serde::de::DeserializeOwned>(status: u16, body: &str) -> Result<(), RequestError> {
    if !(200..300).contains(&status) {
        return Err(RequestError::Status(status));
    }
    if !body.trim().is_empty() {
        if let Err(e) = serde_json::from_str::<T>(body) {
            log::debug!("status {status} accepted with unexpected body: {e}");
        }
    }
    Ok(())
}

pub(crate) fn trips_endpoint(base: &str) -> String {
    format!("{base}/trips")
}

pub(crate) fn trip_endpoint(base: &str, trip_id: TripId) -> String {
    format!("{base}/trips/{trip_id}")
}

pub(crate) fn meetings_endpoint(base: &str, trip_id: TripId) -> String {
    format!("{base}/trips/{trip_id}/meetings")
}

pub(crate) fn meeting_endpoint(base: &str, trip_id: TripId, meeting_id: MeetingId) -> String {
    format!("{base}/trips/{trip_id}/meetings/{meeting_id}")
}

/// `gloo-net` backed client rooted at a base path (default [`API_BASE`]).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpApi {
    base: String,
}

impl HttpApi {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self { base: base.trim_end_matches('/').to_owned() }
    }

    pub fn base(&self) -> &str {
        &self.base
    }
}

impl Default for HttpApi {
    fn default() -> Self {
        Self::new(API_BASE)
    }
}

#[cfg(feature = "hydrate")]
fn network_error(err: gloo_net::Error) -> RequestError {
    RequestError::Network(err.to_string())
}

#[cfg(feature = "hydrate")]
fn ensure_ok(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, RequestError> {
    if resp.ok() { Ok(resp) } else { Err(RequestError::Status(resp.status())) }
}

#[cfg(feature = "hydrate")]
async fn settle_mutation<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<(), RequestError> {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    mutation_outcome::<T>(status, &body)
}

#[cfg(feature = "hydrate")]
async fn decode<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, RequestError> {
    resp.json::<T>()
        .await
        .map_err(|e| RequestError::Decode(e.to_string()))
}

impl TripsApi for HttpApi {
    async fn list_trips(&self) -> Result<Vec<Trip>, RequestError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&trips_endpoint(&self.base))
                .send()
                .await
                .map_err(network_error)?;
            decode(ensure_ok(resp)?).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(RequestError::Unavailable)
        }
    }

    async fn create_trip(&self, trip: &NewTrip) -> Result<(), RequestError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&trips_endpoint(&self.base))
                .json(trip)
                .map_err(network_error)?
                .send()
                .await
                .map_err(network_error)?;
            settle_mutation::<Trip>(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = trip;
            Err(RequestError::Unavailable)
        }
    }

    async fn delete_trip(&self, trip_id: TripId) -> Result<(), RequestError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::delete(&trip_endpoint(&self.base, trip_id))
                .send()
                .await
                .map_err(network_error)?;
            ensure_ok(resp).map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = trip_id;
            Err(RequestError::Unavailable)
        }
    }

    async fn list_meetings(&self, trip_id: TripId) -> Result<Vec<Meeting>, RequestError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&meetings_endpoint(&self.base, trip_id))
                .send()
                .await
                .map_err(network_error)?;
            decode(ensure_ok(resp)?).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = trip_id;
            Err(RequestError::Unavailable)
        }
    }

    async fn create_meeting(&self, trip_id: TripId, meeting: &NewMeeting) -> Result<(), RequestError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&meetings_endpoint(&self.base, trip_id))
                .json(meeting)
                .map_err(network_error)?
                .send()
                .await
                .map_err(network_error)?;
            settle_mutation::<Meeting>(resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (trip_id, meeting);
            Err(RequestError::Unavailable)
        }
    }

    async fn delete_meeting(&self, trip_id: TripId, meeting_id: MeetingId) -> Result<(), RequestError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::delete(&meeting_endpoint(&self.base, trip_id, meeting_id))
                .send()
                .await
                .map_err(network_error)?;
            ensure_ok(resp).map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (trip_id, meeting_id);
            Err(RequestError::Unavailable)
        }
    }
}
