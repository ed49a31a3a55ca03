//! Gemini `generateContent` client.
//!
//! Thin HTTP wrapper for `/models/{model}:generateContent`. Pure parsing in
//! `parse_response` for testability.

use super::config::LlmTimeouts;
use super::types::{Generation, LlmError};
use std::time::Duration;

// =============================================================================
// CLIENT
// =============================================================================

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String, base_url: String, timeouts: LlmTimeouts) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_key, base_url })
    }

    pub async fn generate(&self, model: &str, max_tokens: u32, prompt: &str) -> Result<Generation, LlmError> {
        let body = ApiRequest {
            contents: [RequestContent { role: "user", parts: [RequestPart { text: prompt }] }],
            generation_config: GenerationConfig { max_output_tokens: max_tokens },
        };

        let response = self
            .http
            .post(format!("{}/models/{model}:generateContent", self.base_url))
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        if !status.is_success() {
            return Err(LlmError::ApiResponse { status: status.as_u16(), body: text });
        }

        parse_response(&text, model)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiRequest<'a> {
    contents: [RequestContent<'a>; 1],
    generation_config: GenerationConfig,
}

#[derive(serde::Serialize)]
struct RequestContent<'a> {
    role: &'static str,
    parts: [RequestPart<'a>; 1],
}

#[derive(serde::Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: u32,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    usage_metadata: Option<UsageMetadata>,
    #[serde(default)]
    model_version: Option<String>,
}

#[derive(serde::Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(serde::Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(serde::Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u64,
    #[serde(default)]
    candidates_token_count: u64,
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_response(json: &str, requested_model: &str) -> Result<Generation, LlmError> {
    let api: ApiResponse = serde_json::from_str(json).map_err(|e| LlmError::ApiParse(e.to_string()))?;

    // Only the first candidate is read; parts are concatenated in order.
    let text: String = api
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.is_empty() {
        return Err(LlmError::EmptyResponse);
    }

    let usage = api.usage_metadata;
    Ok(Generation {
        text,
        model: api
            .model_version
            .unwrap_or_else(|| requested_model.to_string()),
        input_tokens: usage.as_ref().map_or(0, |u| u.prompt_token_count),
        output_tokens: usage.as_ref().map_or(0, |u| u.candidates_token_count),
    })
}

#[cfg(test)]
#[path = "gemini_test.rs"]
mod tests;
