use super::types::OllamaChatResponse;
use super::*;

fn provider() -> OllamaProvider {
    OllamaProvider::new(ProviderConfig::new(ProviderKind::Ollama)).unwrap()
}

fn response(json: &str) -> OllamaChatResponse {
    serde_json::from_str(json).unwrap()
}

#[test]
fn test_defaults() {
    let provider = provider();
    assert_eq!(provider.model(), "qwen2.5:7b");
    assert_eq!(provider.endpoint(), "http://localhost:11434/api/chat");
}

#[test]
fn test_request_is_not_streamed() {
    let provider = provider();
    let messages = vec![ChatMessage::system("sys"), ChatMessage::user("hi")];
    let body = serde_json::to_value(provider.build_request(&messages)).unwrap();

    assert_eq!(body["stream"], false);
    assert_eq!(body["options"]["num_predict"], 4096);
    assert_eq!(body["messages"][0]["role"], "system");
}

#[test]
fn test_usage_is_estimated_when_not_reported() {
    let provider = provider();
    // 16 ascii chars -> 4 tokens
    let messages = vec![ChatMessage::user("abcdefghijklmnop")];
    let result = provider
        .map_response(
            &messages,
            response(r#"{"model": "qwen2.5:7b", "message": {"role": "assistant", "content": "abcdefgh"}, "done": true}"#),
        )
        .unwrap();

    let usage = result.usage.unwrap();
    assert!(usage.estimated);
    assert_eq!(usage.prompt_tokens, 4);
    assert_eq!(usage.completion_tokens, 2);
    assert_eq!(usage.total_tokens, 6);
    assert_eq!(result.finish_reason.as_deref(), Some("stop"));
}

#[test]
fn test_reported_eval_counts_are_used() {
    let provider = provider();
    let result = provider
        .map_response(
            &[ChatMessage::user("hi")],
            response(
                r#"{"message": {"content": "hello"}, "done": true, "done_reason": "stop",
                    "prompt_eval_count": 26, "eval_count": 290}"#,
            ),
        )
        .unwrap();

    assert_eq!(result.usage, Some(TokenUsage::reported(26, 290, 316)));
    assert_eq!(result.model, "qwen2.5:7b");
}

#[test]
fn test_not_done_maps_to_length() {
    let provider = provider();
    let result = provider
        .map_response(
            &[ChatMessage::user("hi")],
            response(r#"{"message": {"content": "partial"}, "done": false}"#),
        )
        .unwrap();

    assert_eq!(result.finish_reason.as_deref(), Some("length"));
}

#[test]
fn test_missing_message_is_no_response() {
    let provider = provider();
    let err = provider
        .map_response(&[ChatMessage::user("hi")], response(r#"{"done": true}"#))
        .unwrap_err();

    assert!(matches!(err, Error::NoResponse(_)));
}

#[test]
fn test_local_inference_is_free() {
    let provider = provider();
    let usage = TokenUsage::estimated(100_000, 50_000);
    assert_eq!(provider.estimate_cost(&usage), 0.0);
}
