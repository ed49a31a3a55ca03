//! LLM configuration parsed from environment variables.

use super::types::LlmError;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com/v1";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_LLM_MAX_TOKENS: u32 = 1024;
pub const DEFAULT_LLM_REQUEST_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_LLM_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmProviderKind {
    Gemini,
    Anthropic,
    OpenAi,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LlmTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmConfig {
    pub provider: LlmProviderKind,
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub max_tokens: u32,
    pub timeouts: LlmTimeouts,
}

impl LlmConfig {
    /// Build typed LLM config from environment variables.
    ///
    /// Required:
    /// - `LLM_API_KEY_ENV` (names the env var containing the key)
    ///
    /// Optional:
    /// - `LLM_PROVIDER`: `gemini` (default), `anthropic` or `openai`
    /// - `LLM_MODEL`: provider default when absent
    /// - `LLM_BASE_URL`: provider API base URL
    /// - `LLM_MAX_TOKENS`: default 1024
    /// - `LLM_REQUEST_TIMEOUT_SECS`: default 60
    /// - `LLM_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns an error if the key is missing or the provider is unknown.
    pub fn from_env() -> Result<Self, LlmError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed LLM config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`LlmConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, LlmError> {
        let provider = parse_provider(lookup("LLM_PROVIDER").as_deref())?;

        let key_var = lookup("LLM_API_KEY_ENV").ok_or_else(|| LlmError::MissingApiKey { var: "LLM_API_KEY_ENV".into() })?;
        let api_key = lookup(&key_var)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| LlmError::MissingApiKey { var: key_var.clone() })?;

        let model = lookup("LLM_MODEL").unwrap_or_else(|| default_model(provider).to_string());
        let base_url = lookup("LLM_BASE_URL")
            .unwrap_or_else(|| default_base_url(provider).to_string())
            .trim_end_matches('/')
            .to_string();
        let max_tokens = parse_or(lookup("LLM_MAX_TOKENS"), DEFAULT_LLM_MAX_TOKENS);
        let timeouts = LlmTimeouts {
            request_secs: parse_secs_or(lookup("LLM_REQUEST_TIMEOUT_SECS"), DEFAULT_LLM_REQUEST_TIMEOUT_SECS),
            connect_secs: parse_secs_or(lookup("LLM_CONNECT_TIMEOUT_SECS"), DEFAULT_LLM_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { provider, api_key, model, base_url, max_tokens, timeouts })
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<String>, default: T) -> T {
    raw.and_then(|v| v.parse::<T>().ok()).unwrap_or(default)
}

// Zero would make every call time out immediately.
fn parse_secs_or(raw: Option<String>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok()).filter(|secs| *secs > 0).unwrap_or(default)
}

fn parse_provider(raw: Option<&str>) -> Result<LlmProviderKind, LlmError> {
    match raw.unwrap_or("gemini") {
        "gemini" => Ok(LlmProviderKind::Gemini),
        "anthropic" => Ok(LlmProviderKind::Anthropic),
        "openai" => Ok(LlmProviderKind::OpenAi),
        other => Err(LlmError::ConfigParse(format!("unknown LLM_PROVIDER: {other}"))),
    }
}

fn default_model(provider: LlmProviderKind) -> &'static str {
    match provider {
        LlmProviderKind::Gemini => "gemini-1.5-flash",
        LlmProviderKind::Anthropic => "claude-sonnet-4-5-20250929",
        LlmProviderKind::OpenAi => "gpt-4o",
    }
}

fn default_base_url(provider: LlmProviderKind) -> &'static str {
    match provider {
        LlmProviderKind::Gemini => DEFAULT_GEMINI_BASE_URL,
        LlmProviderKind::Anthropic => DEFAULT_ANTHROPIC_BASE_URL,
        LlmProviderKind::OpenAi => DEFAULT_OPENAI_BASE_URL,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
