//! Process configuration parsed from environment variables.
//!
//! LLM settings live in [`crate::llm::config`]; this module covers the
//! HTTP listener and the fleet endpoint.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_FLEET_DATA_URL: &str = "http://localhost:5001/api/data";
pub const DEFAULT_FLEET_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_FLEET_CONNECT_TIMEOUT_SECS: u64 = 3;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT '{0}'")]
    InvalidPort(String),
    #[error("invalid FLEET_DATA_URL '{url}': {reason}")]
    InvalidFleetUrl { url: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FleetTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FleetConfig {
    pub url: String,
    pub timeouts: FleetTimeouts,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub fleet: FleetConfig,
}

impl AppConfig {
    /// Build config from environment variables.
    ///
    /// - `PORT`: default 3000
    /// - `FLEET_DATA_URL`: default `http://localhost:5001/api/data`
    /// - `FLEET_REQUEST_TIMEOUT_SECS`: default 10
    /// - `FLEET_CONNECT_TIMEOUT_SECS`: default 3
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is not a port number or the fleet URL does
    /// not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let url = lookup("FLEET_DATA_URL").unwrap_or_else(|| DEFAULT_FLEET_DATA_URL.to_string());
        if let Err(e) = reqwest::Url::parse(&url) {
            return Err(ConfigError::InvalidFleetUrl { url, reason: e.to_string() });
        }

        let timeouts = FleetTimeouts {
            request_secs: parse_secs_or(lookup("FLEET_REQUEST_TIMEOUT_SECS"), DEFAULT_FLEET_REQUEST_TIMEOUT_SECS),
            connect_secs: parse_secs_or(lookup("FLEET_CONNECT_TIMEOUT_SECS"), DEFAULT_FLEET_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { port, fleet: FleetConfig { url, timeouts } })
    }
}

// Zero would make every call time out immediately.
fn parse_secs_or(raw: Option<String>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok()).filter(|secs| *secs > 0).unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
