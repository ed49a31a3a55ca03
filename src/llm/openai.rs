//! OpenAI-compatible chat completions client.
//!
//! Covers `/chat/completions` on api.openai.com and on compatible gateways
//! (set `LLM_BASE_URL`). The prompt is the single user message.

use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use super::config::LlmTimeouts;
use super::types::{Generation, LlmError};

pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl OpenAiClient {
    pub fn new(api_key: String, base_url: String, timeouts: LlmTimeouts) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| LlmError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, api_key, base_url })
    }

    pub async fn generate(&self, model: &str, max_tokens: u32, prompt: &str) -> Result<Generation, LlmError> {
        let body = CcRequest { model, max_tokens, messages: [CcMessage { role: "user", content: prompt }] };
        let text = self.send_json("/chat/completions", &body).await?;
        parse_chat_completions_response(&text)
    }

    async fn send_json(&self, path: &str, body: &impl Serialize) -> Result<String, LlmError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;
        if status != 200 {
            return Err(LlmError::ApiResponse { status, body: text });
        }
        Ok(text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Serialize)]
struct CcRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: [CcMessage<'a>; 1],
}

#[derive(Serialize)]
struct CcMessage<'a> {
    role: &'static str,
    content: &'a str,
}

// =============================================================================
// RESPONSE PARSING
// =============================================================================

pub(crate) fn parse_chat_completions_response(json_text: &str) -> Result<Generation, LlmError> {
    let root: Value = serde_json::from_str(json_text).map_err(|e| LlmError::ApiParse(e.to_string()))?;
    let model = root
        .get("model")
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_default();
    let usage = root.get("usage");
    let prompt_tokens = usage
        .and_then(|u| u.get("prompt_tokens"))
        .and_then(Value::as_u64)
        .unwrap_or(0);
    let completion_tokens = usage
        .and_then(|u| u.get("completion_tokens"))
        .and_then(Value::as_u64)
        .unwrap_or(0);

    let Some(choice) = root
        .get("choices")
        .and_then(Value::as_array)
        .and_then(|arr| arr.first())
    else {
        return Err(LlmError::ApiParse("chat_completions: missing choices[0]".to_string()));
    };

    let text = choice
        .get("message")
        .and_then(|m| m.get("content"))
        .and_then(Value::as_str)
        .unwrap_or_default();
    if text.is_empty() {
        return Err(LlmError::EmptyResponse);
    }

    Ok(Generation { text: text.to_string(), model, input_tokens: prompt_tokens, output_tokens: completion_tokens })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cc_parse_text_response() {
        let json = serde_json::json!({
            "model": "gpt-4o",
            "choices": [{
                "message": { "role": "assistant", "content": "CNC Milling X1 is healthy." },
                "finish_reason": "stop"
            }],
            "usage": { "prompt_tokens": 40, "completion_tokens": 8 }
        })
        .to_string();
        let generation = parse_chat_completions_response(&json).unwrap();
        assert_eq!(generation.text, "CNC Milling X1 is healthy.");
        assert_eq!(generation.model, "gpt-4o");
        assert_eq!(generation.input_tokens, 40);
        assert_eq!(generation.output_tokens, 8);
    }

    #[test]
    fn cc_parse_missing_choices() {
        let json = serde_json::json!({ "model": "gpt-4o", "choices": [] }).to_string();
        let err = parse_chat_completions_response(&json).unwrap_err();
        assert!(matches!(err, LlmError::ApiParse(_)));
    }

    #[test]
    fn cc_parse_null_content_is_empty_response() {
        let json = serde_json::json!({
            "model": "gpt-4o",
            "choices": [{ "message": { "role": "assistant", "content": null } }]
        })
        .to_string();
        let err = parse_chat_completions_response(&json).unwrap_err();
        assert!(matches!(err, LlmError::EmptyResponse));
    }
}
