//! Server configuration parsed from environment variables.

pub const DEFAULT_PORT: u16 = 8083;
pub const DEFAULT_TRIPS_API_URL: &str = "http://localhost:8082";
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid TRIPS_API_URL '{0}' (expected an http:// or https:// URL)")]
    InvalidUpstream(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Base URL of the trips backend, without a trailing slash.
    pub trips_api_url: String,
    pub connect_timeout_secs: u64,
}

impl Config {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 8083
    /// - `TRIPS_API_URL`: default `http://localhost:8082`
    /// - `TRIPS_API_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `PORT` is not a valid port number or
    /// `TRIPS_API_URL` is not an http(s) URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let trips_api_url = parse_upstream(std::env::var("TRIPS_API_URL").ok().as_deref())?;
        let connect_timeout_secs = env_parse_u64("TRIPS_API_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS);

        Ok(Self { port, trips_api_url, connect_timeout_secs })
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .ok()
            .filter(|port| *port != 0)
            .ok_or_else(|| ConfigError::InvalidPort(value.to_owned())),
    }
}

fn parse_upstream(raw: Option<&str>) -> Result<String, ConfigError> {
    let value = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_TRIPS_API_URL);
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        return Err(ConfigError::InvalidUpstream(value.to_owned()));
    }
    Ok(value.trim_end_matches('/').to_owned())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
