//! LLM types — provider-neutral request/response types and errors.
//!
//! Shared by the Gemini, Anthropic and `OpenAI` clients. The co-pilot only
//! ever sends one self-contained prompt, so the boundary is a single string
//! in and a single text body out.

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by LLM client operations.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The required API key environment variable is not set.
    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: String },

    /// The HTTP request to the LLM provider failed.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The LLM provider returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The LLM provider response body could not be deserialized.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// The provider answered but produced no text (blocked or empty candidate).
    #[error("API response contained no text")]
    EmptyResponse,

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl LlmError {
    /// Short machine-readable tag used in diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ConfigParse(_) => "config_parse",
            Self::MissingApiKey { .. } => "missing_api_key",
            Self::ApiRequest(_) => "api_request",
            Self::ApiResponse { status: 401 | 403, .. } => "api_auth",
            Self::ApiResponse { status: 429, .. } => "api_quota",
            Self::ApiResponse { .. } => "api_response",
            Self::ApiParse(_) => "api_parse",
            Self::EmptyResponse => "empty_response",
            Self::HttpClientBuild(_) => "http_client_build",
        }
    }
}

// =============================================================================
// GENERATION
// =============================================================================

/// Text produced by a single-shot generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Generation {
    pub text: String,
    pub model: String,
    pub input_tokens: u64,
    pub output_tokens: u64,
}

// =============================================================================
// LLM CHAT TRAIT
// =============================================================================

/// Provider-neutral async trait for one-shot generation. Enables mocking in tests.
#[async_trait::async_trait]
pub trait LlmChat: Send + Sync {
    /// Send a single prompt to the provider and return its text.
    ///
    /// # Errors
    ///
    /// Returns an [`LlmError`] if the request fails, the response is malformed
    /// or empty, or the provider rejects the credential.
    async fn generate(&self, prompt: &str) -> Result<Generation, LlmError>;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
