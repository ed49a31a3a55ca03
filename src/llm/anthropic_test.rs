use super::*;

fn make_response(content: serde_json::Value) -> String {
    serde_json::json!({
        "id": "msg_123",
        "type": "message",
        "role": "assistant",
        "content": content,
        "model": "claude-sonnet-4-5-20250929",
        "stop_reason": "end_turn",
        "usage": { "input_tokens": 100, "output_tokens": 50 }
    })
    .to_string()
}

#[test]
fn parse_text_response() {
    let json = make_response(serde_json::json!([
        { "type": "text", "text": "Hello world" }
    ]));
    let generation = parse_response(&json).unwrap();
    assert_eq!(generation.text, "Hello world");
    assert_eq!(generation.model, "claude-sonnet-4-5-20250929");
    assert_eq!(generation.input_tokens, 100);
    assert_eq!(generation.output_tokens, 50);
}

#[test]
fn parse_multiple_text_blocks_concatenated() {
    let json = make_response(serde_json::json!([
        { "type": "text", "text": "Lathe Pro is at 65%." },
        { "type": "text", "text": " No action needed yet." }
    ]));
    let generation = parse_response(&json).unwrap();
    assert_eq!(generation.text, "Lathe Pro is at 65%. No action needed yet.");
}

#[test]
fn parse_split_sentence_is_not_altered() {
    let json = make_response(serde_json::json!([
        { "type": "text", "text": "The printer " },
        { "type": "text", "text": "is at 28%." }
    ]));
    let generation = parse_response(&json).unwrap();
    assert_eq!(generation.text, "The printer is at 28%.");
}

#[test]
fn parse_thinking_blocks_are_skipped() {
    let json = make_response(serde_json::json!([
        { "type": "thinking", "thinking": "Let me think..." },
        { "type": "text", "text": "Here is my answer" }
    ]));
    let generation = parse_response(&json).unwrap();
    assert_eq!(generation.text, "Here is my answer");
}

#[test]
fn parse_thinking_only_response_is_empty() {
    let json = make_response(serde_json::json!([
        { "type": "thinking", "thinking": "Let me think..." }
    ]));
    let err = parse_response(&json).unwrap_err();
    assert!(matches!(err, LlmError::EmptyResponse));
}

#[test]
fn parse_invalid_json() {
    let err = parse_response("not json").unwrap_err();
    assert!(matches!(err, LlmError::ApiParse(_)));
}
