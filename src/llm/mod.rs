//! LLM — multi-provider adapter for the co-pilot.
//!
//! DESIGN
//! ======
//! Configured from environment variables. The `LlmClient` dispatches to
//! Gemini, Anthropic or an OpenAI-compatible API based on `LLM_PROVIDER`.
//! Every call is a single stateless prompt; no provider-side sessions.

pub mod anthropic;
pub mod config;
pub mod gemini;
pub mod openai;
pub mod types;

use config::{LlmConfig, LlmProviderKind};
pub use types::LlmChat;
use types::{Generation, LlmError};

// =============================================================================
// CLIENT DISPATCH
// =============================================================================

/// Concrete LLM client that dispatches to the configured provider.
///
/// Configured from environment variables by [`LlmClient::from_env`].
pub struct LlmClient {
    inner: LlmProvider,
    model: String,
    max_tokens: u32,
}

enum LlmProvider {
    Gemini(gemini::GeminiClient),
    Anthropic(anthropic::AnthropicClient),
    OpenAi(openai::OpenAiClient),
}

impl LlmClient {
    /// Build an LLM client from environment variables. See [`LlmConfig::from_env`].
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client fails.
    pub fn from_env() -> Result<Self, LlmError> {
        let config = LlmConfig::from_env()?;
        Self::from_config(config)
    }

    /// Build an LLM client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider HTTP client fails to build.
    pub fn from_config(config: LlmConfig) -> Result<Self, LlmError> {
        let LlmConfig { provider, api_key, model, base_url, max_tokens, timeouts } = config;
        let inner = match provider {
            LlmProviderKind::Gemini => LlmProvider::Gemini(gemini::GeminiClient::new(api_key, base_url, timeouts)?),
            LlmProviderKind::Anthropic => {
                LlmProvider::Anthropic(anthropic::AnthropicClient::new(api_key, base_url, timeouts)?)
            }
            LlmProviderKind::OpenAi => LlmProvider::OpenAi(openai::OpenAiClient::new(api_key, base_url, timeouts)?),
        };
        Ok(Self { inner, model, max_tokens })
    }

    /// Return the configured model name (e.g. `"gemini-1.5-flash"`).
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait::async_trait]
impl LlmChat for LlmClient {
    async fn generate(&self, prompt: &str) -> Result<Generation, LlmError> {
        match &self.inner {
            LlmProvider::Gemini(c) => c.generate(&self.model, self.max_tokens, prompt).await,
            LlmProvider::Anthropic(c) => c.generate(&self.model, self.max_tokens, prompt).await,
            LlmProvider::OpenAi(c) => c.generate(&self.model, self.max_tokens, prompt).await,
        }
    }
}
