use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_to_gemini() {
    let cfg = LlmConfig::from_lookup(lookup_from(&[("LLM_API_KEY_ENV", "TEST_KEY"), ("TEST_KEY", "secret")])).unwrap();
    assert_eq!(cfg.provider, LlmProviderKind::Gemini);
    assert_eq!(cfg.model, "gemini-1.5-flash");
    assert_eq!(cfg.base_url, DEFAULT_GEMINI_BASE_URL);
    assert_eq!(cfg.max_tokens, DEFAULT_LLM_MAX_TOKENS);
    assert_eq!(
        cfg.timeouts,
        LlmTimeouts { request_secs: DEFAULT_LLM_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_LLM_CONNECT_TIMEOUT_SECS }
    );
    assert_eq!(cfg.api_key, "secret");
}

#[test]
fn parses_anthropic_overrides() {
    let cfg = LlmConfig::from_lookup(lookup_from(&[
        ("LLM_PROVIDER", "anthropic"),
        ("LLM_API_KEY_ENV", "ANTHROPIC_API_KEY"),
        ("ANTHROPIC_API_KEY", "sk-ant"),
        ("LLM_BASE_URL", "https://proxy.test/v1/"),
        ("LLM_MAX_TOKENS", "256"),
        ("LLM_REQUEST_TIMEOUT_SECS", "42"),
        ("LLM_CONNECT_TIMEOUT_SECS", "7"),
    ]))
    .unwrap();
    assert_eq!(cfg.provider, LlmProviderKind::Anthropic);
    assert_eq!(cfg.model, "claude-sonnet-4-5-20250929");
    assert_eq!(cfg.base_url, "https://proxy.test/v1");
    assert_eq!(cfg.max_tokens, 256);
    assert_eq!(cfg.timeouts, LlmTimeouts { request_secs: 42, connect_secs: 7 });
}

#[test]
fn openai_uses_its_own_defaults() {
    let cfg = LlmConfig::from_lookup(lookup_from(&[
        ("LLM_PROVIDER", "openai"),
        ("LLM_API_KEY_ENV", "OPENAI_API_KEY"),
        ("OPENAI_API_KEY", "sk-test"),
        ("LLM_MODEL", "gpt-4o-mini"),
    ]))
    .unwrap();
    assert_eq!(cfg.provider, LlmProviderKind::OpenAi);
    assert_eq!(cfg.model, "gpt-4o-mini");
    assert_eq!(cfg.base_url, DEFAULT_OPENAI_BASE_URL);
}

#[test]
fn unparsable_numbers_fall_back_to_defaults() {
    let cfg = LlmConfig::from_lookup(lookup_from(&[
        ("LLM_API_KEY_ENV", "TEST_KEY"),
        ("TEST_KEY", "secret"),
        ("LLM_MAX_TOKENS", "lots"),
        ("LLM_REQUEST_TIMEOUT_SECS", "-1"),
    ]))
    .unwrap();
    assert_eq!(cfg.max_tokens, DEFAULT_LLM_MAX_TOKENS);
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_LLM_REQUEST_TIMEOUT_SECS);
}

#[test]
fn missing_key_env_errors() {
    let err = LlmConfig::from_lookup(lookup_from(&[])).unwrap_err();
    assert!(matches!(err, LlmError::MissingApiKey { ref var } if var == "LLM_API_KEY_ENV"));
}

#[test]
fn named_key_var_unset_errors() {
    let err = LlmConfig::from_lookup(lookup_from(&[("LLM_API_KEY_ENV", "GEMINI_API_KEY")])).unwrap_err();
    assert!(matches!(err, LlmError::MissingApiKey { ref var } if var == "GEMINI_API_KEY"));
}

#[test]
fn blank_key_counts_as_missing() {
    let err =
        LlmConfig::from_lookup(lookup_from(&[("LLM_API_KEY_ENV", "GEMINI_API_KEY"), ("GEMINI_API_KEY", "  ")]))
            .unwrap_err();
    assert!(matches!(err, LlmError::MissingApiKey { .. }));
}

#[test]
fn unknown_provider_errors() {
    let err = LlmConfig::from_lookup(lookup_from(&[
        ("LLM_PROVIDER", "bad"),
        ("LLM_API_KEY_ENV", "TEST_KEY"),
        ("TEST_KEY", "secret"),
    ]))
    .unwrap_err()
    .to_string();
    assert!(err.contains("unknown LLM_PROVIDER"));
}

#[test]
fn zero_timeouts_fall_back_to_defaults() {
    let cfg = LlmConfig::from_lookup(lookup_from(&[
        ("LLM_API_KEY_ENV", "TEST_KEY"),
        ("TEST_KEY", "secret"),
        ("LLM_REQUEST_TIMEOUT_SECS", "0"),
        ("LLM_CONNECT_TIMEOUT_SECS", "0"),
    ]))
    .unwrap();
    assert_eq!(
        cfg.timeouts,
        LlmTimeouts { request_secs: DEFAULT_LLM_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_LLM_CONNECT_TIMEOUT_SECS }
    );
}
