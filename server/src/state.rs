//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds one pooled HTTP client for the trips backend and the backend's
//! base URL. Both are cheap to clone.

use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    /// Trips backend base URL, without a trailing slash.
    pub upstream: Arc<str>,
}

impl AppState {
    /// Build state from parsed config.
    ///
    /// # Errors
    ///
    /// Returns the reqwest builder error if the TLS backend fails to initialize.
    pub fn new(config: &Config) -> reqwest::Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()?;
        Ok(Self::with_client(http, &config.trips_api_url))
    }

    #[must_use]
    pub fn with_client(http: reqwest::Client, upstream: &str) -> Self {
        Self { http, upstream: Arc::from(upstream.trim_end_matches('/')) }
    }
}
