//! Tests for the API test service against a mock transport

use crate::common::fixtures::{genuine_anthropic_body, plain_openai_body};
use crate::common::mocks::MockTransport;
use ccverify::core::models::{ApiConfig, ApiType, DEFAULT_MODEL, DEFAULT_PROMPT};
use ccverify::core::services::{ApiTestError, run_api_test};

fn config(api_type: ApiType) -> ApiConfig {
    ApiConfig {
        api_type,
        endpoint: "https://relay.example.com/v1/messages".to_string(),
        key: "sk-test-key".to_string(),
        model: DEFAULT_MODEL.to_string(),
        prompt: String::new(),
    }
}

#[test]
fn test_incomplete_config_sends_nothing() {
    let transport = MockTransport::replying(200, "{}");
    let mut cfg = config(ApiType::Anthropic);
    cfg.key = "   ".to_string();

    assert_eq!(run_api_test(&transport, &cfg), Err(ApiTestError::Incomplete));
    assert!(transport.requests().is_empty());
}

#[test]
fn test_missing_model_sends_nothing() {
    let transport = MockTransport::replying(200, "{}");
    let mut cfg = config(ApiType::OpenAi);
    cfg.model = String::new();

    assert_eq!(run_api_test(&transport, &cfg), Err(ApiTestError::MissingModel));
    assert!(transport.requests().is_empty());
}

#[test]
fn test_anthropic_request_is_recorded() {
    let transport = MockTransport::replying(200, &genuine_anthropic_body());
    run_api_test(&transport, &config(ApiType::Anthropic)).unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.url, "https://relay.example.com/v1/messages");
    assert_eq!(request.header("x-api-key"), Some("sk-test-key"));
    assert_eq!(request.header("anthropic-version"), Some("2023-06-01"));
    assert_eq!(request.body["model"], DEFAULT_MODEL);
    assert_eq!(request.body["messages"][0]["content"], DEFAULT_PROMPT);
}

#[test]
fn test_anthropic_success_extracts_text() {
    let transport = MockTransport::replying(200, &genuine_anthropic_body());
    let success = run_api_test(&transport, &config(ApiType::Anthropic)).unwrap();
    assert!(success.answer_text.starts_with("Yes, I am Claude Code"));
    assert!(success.thinking_text.contains("CLI tool"));
    assert!(success.response_json.contains("\"service_tier\": \"standard\""));
}

#[test]
fn test_openai_success_extracts_text() {
    let transport = MockTransport::replying(200, &plain_openai_body());
    let success = run_api_test(&transport, &config(ApiType::OpenAi)).unwrap();
    assert_eq!(success.answer_text, "I am an AI assistant.");
    assert_eq!(success.thinking_text, "");
    assert_eq!(transport.requests()[0].header("authorization"), Some("Bearer sk-test-key"));
}

#[test]
fn test_error_status() {
    let transport = MockTransport::replying(502, "bad gateway");
    let err = run_api_test(&transport, &config(ApiType::Anthropic)).unwrap_err();
    assert_eq!(err, ApiTestError::Status { code: 502 });
    assert!(err.to_string().contains("502"));
}

#[test]
fn test_non_json_success_body() {
    let transport = MockTransport::replying(200, "<html>login</html>");
    let err = run_api_test(&transport, &config(ApiType::Anthropic)).unwrap_err();
    assert_eq!(err.raw_response(), Some("<html>login</html>"));
}

#[test]
fn test_transport_failure() {
    let transport = MockTransport::failing("connection refused");
    let err = run_api_test(&transport, &config(ApiType::Anthropic)).unwrap_err();
    assert!(matches!(err, ApiTestError::Transport(_)));
    assert_eq!(err.to_string(), "request failed: connection refused");
}
