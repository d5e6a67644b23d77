// ABOUTME: Tests for conversation types - validation, token estimation,
// ABOUTME: and serde representation of messages and content blocks.

use super::*;

#[test]
fn test_role_serialization() {
    assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
    assert_eq!(
        serde_json::to_string(&Role::Assistant).unwrap(),
        "\"assistant\""
    );
}

#[test]
fn test_stop_reason_serialization() {
    assert_eq!(
        serde_json::to_string(&StopReason::EndTurn).unwrap(),
        "\"end_turn\""
    );
    assert_eq!(
        serde_json::to_string(&StopReason::MaxTokens).unwrap(),
        "\"max_tokens\""
    );
}

#[test]
fn test_content_block_text_serialization() {
    let block = ContentBlock::text("Hello");
    let json = serde_json::to_value(&block).unwrap();
    assert_eq!(json["type"], "text");
    assert_eq!(json["text"], "Hello");
}

#[test]
fn test_content_block_image_serialization() {
    let block = ContentBlock::image("image/png", "aGVsbG8=");
    let json = serde_json::to_value(&block).unwrap();
    assert_eq!(json["type"], "image");
    assert_eq!(json["media_type"], "image/png");
    assert_eq!(json["data"], "aGVsbG8=");
}

#[test]
fn test_message_constructors() {
    let msg = Message::user("hi");
    assert_eq!(msg.role, Role::User);
    assert_eq!(msg.content[0].as_text(), Some("hi"));

    let msg = Message::assistant("hello");
    assert_eq!(msg.role, Role::Assistant);
}

#[test]
fn test_inference_config_defaults() {
    let config = InferenceConfig::default();
    assert_eq!(config.max_tokens, Some(500));
    assert!(config.temperature.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_temperature_out_of_range() {
    let config = InferenceConfig {
        temperature: Some(1.5),
        ..Default::default()
    };
    assert!(matches!(
        config.validate().unwrap_err(),
        ConverseError::InvalidTemperature(_)
    ));
}

#[test]
fn test_top_p_out_of_range() {
    let config = InferenceConfig {
        top_p: Some(-0.1),
        ..Default::default()
    };
    assert!(matches!(
        config.validate().unwrap_err(),
        ConverseError::InvalidTopP(_)
    ));
}

#[test]
fn test_max_tokens_bounds() {
    let zero = InferenceConfig {
        max_tokens: Some(0),
        ..Default::default()
    };
    assert!(matches!(
        zero.validate().unwrap_err(),
        ConverseError::InvalidMaxTokens { got: 0, .. }
    ));

    let over = InferenceConfig {
        max_tokens: Some(8_193),
        ..Default::default()
    };
    assert!(over.validate().is_err());

    let at_limit = InferenceConfig {
        max_tokens: Some(8_192),
        ..Default::default()
    };
    assert!(at_limit.validate().is_ok());
}

#[test]
fn test_request_requires_model_id() {
    let request = ConverseRequest::new("", vec![Message::user("hi")]);
    assert!(matches!(
        request.validate().unwrap_err(),
        ConverseError::MissingModelId
    ));
}

#[test]
fn test_request_requires_messages() {
    let request = ConverseRequest::new("claude-3-haiku-20240307", vec![]);
    assert!(matches!(
        request.validate().unwrap_err(),
        ConverseError::EmptyMessages
    ));
}

#[test]
fn test_request_rejects_empty_message_content() {
    let request = ConverseRequest::new(
        "claude-3-haiku-20240307",
        vec![Message {
            role: Role::User,
            content: vec![],
        }],
    );
    assert!(matches!(
        request.validate().unwrap_err(),
        ConverseError::EmptyContent
    ));
}

#[test]
fn test_valid_request() {
    let mut request =
        ConverseRequest::new("claude-3-haiku-20240307", vec![Message::user("hi")]);
    request.system = Some("Be brief.".to_string());
    assert!(request.validate().is_ok());
}

#[test]
fn test_estimate_tokens_floor() {
    // Even a tiny message counts as at least one token.
    let request = ConverseRequest::new("m", vec![Message::user("hi")]);
    assert_eq!(request.estimate_tokens(), 1);
}

#[test]
fn test_estimate_tokens_scales_with_length() {
    let request = ConverseRequest::new("m", vec![Message::user("a".repeat(60))]);
    assert_eq!(request.estimate_tokens(), 10);
}

#[test]
fn test_estimate_tokens_includes_system_prompt() {
    let mut request = ConverseRequest::new("m", vec![Message::user("a".repeat(60))]);
    request.system = Some("b".repeat(30));
    assert_eq!(request.estimate_tokens(), 15);
}

#[test]
fn test_response_serde_round_trip() {
    let response = ConverseResponse {
        messages: vec![Message::assistant("hello")],
        stop_reason: Some(StopReason::EndTurn),
        usage: Some(Usage {
            input_tokens: 10,
            output_tokens: 5,
        }),
    };
    let json = serde_json::to_string(&response).unwrap();
    let parsed: ConverseResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, response);
}
