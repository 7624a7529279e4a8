//! Reverse proxy for the trips REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser client talks to `/v1/...` on its own origin. Requests under
//! that prefix are forwarded verbatim to the configured trips backend so the
//! page never needs cross-origin access. Status, `Content-Type`, and body of
//! the upstream response pass through unchanged.

use axum::body::Bytes;
use axum::extract::{Path, RawQuery, State};
use axum::http::header::{ACCEPT, CONTENT_TYPE};
use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("trips backend unreachable: {0}")]
    Upstream(String),
    #[error("trips backend response body unreadable: {0}")]
    Body(String),
    #[error("trips backend timed out")]
    Timeout,
}

impl ProxyError {
    fn from_request(err: &reqwest::Error) -> Self {
        if err.is_timeout() { Self::Timeout } else { Self::Upstream(err.to_string()) }
    }
}

pub(crate) fn proxy_error_to_status(err: &ProxyError) -> StatusCode {
    match err {
        ProxyError::Upstream(_) | ProxyError::Body(_) => StatusCode::BAD_GATEWAY,
        ProxyError::Timeout => StatusCode::GATEWAY_TIMEOUT,
    }
}

/// Join the backend base URL with the captured `/v1` tail and query string.
pub(crate) fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    let path = path.trim_start_matches('/');
    match query.filter(|q| !q.is_empty()) {
        Some(q) => format!("{base}/v1/{path}?{q}"),
        None => format!("{base}/v1/{path}"),
    }
}

/// Forward one request to the trips backend.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let url = upstream_url(&state.upstream, &path, query.as_deref());
    match send(&state, method, &url, &headers, body).await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!(error = %e, %url, "trips upstream request failed");
            proxy_error_to_status(&e).into_response()
        }
    }
}

async fn send(
    state: &AppState,
    method: Method,
    url: &str,
    headers: &HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let mut request = state.http.request(method, url);
    for name in [CONTENT_TYPE, ACCEPT] {
        if let Some(value) = headers.get(&name) {
            request = request.header(name, value.clone());
        }
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = request.send().await.map_err(|e| ProxyError::from_request(&e))?;
    let status = StatusCode::from_u16(upstream.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = upstream.headers().get(CONTENT_TYPE).cloned();
    let bytes = upstream
        .bytes()
        .await
        .map_err(|e| if e.is_timeout() { ProxyError::Timeout } else { ProxyError::Body(e.to_string()) })?;

    let mut response = (status, bytes).into_response();
    match content_type {
        Some(value) => {
            response.headers_mut().insert(CONTENT_TYPE, value);
        }
        None => {
            response.headers_mut().remove(CONTENT_TYPE);
        }
    }
    Ok(response)
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
