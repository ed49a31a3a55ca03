//! Fleet sources — where a `FleetState` is read from.
//!
//! `FleetSource` is the seam the loader depends on; `HttpFleetSource` is the
//! production implementation that issues one `GET` per fetch.

use std::time::Duration;

use super::FleetState;
use crate::config::FleetConfig;

// =============================================================================
// ERROR
// =============================================================================

/// Reasons the fleet endpoint could not produce a `FleetState`.
#[derive(Debug, thiserror::Error)]
pub enum FleetError {
    /// Connection refused, DNS failure, timeout or a broken response stream.
    #[error("fleet request failed: {0}")]
    Request(String),

    /// The endpoint answered with a non-2xx status.
    #[error("fleet endpoint returned status {status}")]
    Status { status: u16 },

    /// The body is not `{ equipment: [...], requests: [...] }`.
    #[error("fleet body decode failed: {0}")]
    Decode(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// SOURCE TRAIT
// =============================================================================

/// Async source of fleet snapshots. Enables mocking in tests.
#[async_trait::async_trait]
pub trait FleetSource: Send + Sync {
    /// Read the current fleet once.
    ///
    /// # Errors
    ///
    /// Returns a [`FleetError`] for any transport, status or decode failure.
    async fn fetch(&self) -> Result<FleetState, FleetError>;
}

// =============================================================================
// HTTP SOURCE
// =============================================================================

pub struct HttpFleetSource {
    http: reqwest::Client,
    url: String,
}

impl HttpFleetSource {
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: &FleetConfig) -> Result<Self, FleetError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| FleetError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, url: config.url.clone() })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait]
impl FleetSource for HttpFleetSource {
    async fn fetch(&self) -> Result<FleetState, FleetError> {
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FleetError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FleetError::Status { status: status.as_u16() });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FleetError::Request(e.to_string()))?;

        decode_fleet(&body)
    }
}

/// Decode an endpoint body. Values are not validated.
pub(crate) fn decode_fleet(body: &[u8]) -> Result<FleetState, FleetError> {
    serde_json::from_slice(body).map_err(|e| FleetError::Decode(e.to_string()))
}

#[cfg(test)]
#[path = "source_test.rs"]
mod tests;
