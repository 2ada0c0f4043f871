use super::types::ChatResponse;
use super::*;

fn provider(kind: ProviderKind) -> OpenAiProvider {
    let config = ProviderConfig::new(kind).with_api_key("sk-1234567890abcdefghij");
    match kind {
        ProviderKind::DeepSeek => OpenAiProvider::deepseek(config).unwrap(),
        _ => OpenAiProvider::openai(config).unwrap(),
    }
}

fn response(json: &str) -> ChatResponse {
    serde_json::from_str(json).unwrap()
}

#[test]
fn test_profiles() {
    let openai = provider(ProviderKind::OpenAi);
    assert_eq!(openai.name(), "openai");
    assert_eq!(openai.model(), "gpt-4o");
    assert_eq!(openai.endpoint(), "https://api.openai.com/v1/chat/completions");

    let deepseek = provider(ProviderKind::DeepSeek);
    assert_eq!(deepseek.name(), "deepseek");
    assert_eq!(deepseek.kind(), ProviderKind::DeepSeek);
    assert_eq!(deepseek.model(), "deepseek-chat");
    assert_eq!(
        deepseek.endpoint(),
        "https://api.deepseek.com/v1/chat/completions"
    );
}

#[test]
fn test_profile_selects_vendor_defaults() {
    // A config built for the wrong vendor still resolves through the profile
    let config = ProviderConfig::new(ProviderKind::OpenAi).with_api_key("sk-1234567890abcdefghij");
    let deepseek = OpenAiProvider::deepseek(config).unwrap();

    assert_eq!(
        deepseek.endpoint(),
        format!("{}/chat/completions", ProviderKind::DeepSeek.default_base_url())
    );
    assert_eq!(deepseek.model(), ProviderKind::DeepSeek.default_model());
}

#[test]
fn test_base_url_override() {
    let config = ProviderConfig::new(ProviderKind::DeepSeek)
        .with_api_key("sk-1234567890abcdefghij")
        .with_base_url("http://127.0.0.1:8080/v1/");
    let provider = OpenAiProvider::deepseek(config).unwrap();
    assert_eq!(provider.endpoint(), "http://127.0.0.1:8080/v1/chat/completions");
}

#[test]
fn test_request_shape() {
    let config = ProviderConfig::new(ProviderKind::OpenAi)
        .with_api_key("sk-1234567890abcdefghij")
        .with_model("gpt-4o-mini")
        .with_temperature(0.2)
        .with_max_tokens(512);
    let provider = OpenAiProvider::openai(config).unwrap();

    let messages = vec![
        ChatMessage::system("You are an analyst"),
        ChatMessage::user("Summarize CPI"),
    ];
    let body = serde_json::to_value(provider.build_request(&messages)).unwrap();

    assert_eq!(body["model"], "gpt-4o-mini");
    assert_eq!(body["max_tokens"], 512);
    assert!((body["temperature"].as_f64().unwrap() - 0.2).abs() < 1e-6);
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][1]["content"], "Summarize CPI");
}

#[test]
fn test_map_response() {
    let provider = provider(ProviderKind::OpenAi);
    let result = provider
        .map_response(response(
            r#"{
                "model": "gpt-4o-2024-08-06",
                "choices": [{"message": {"role": "assistant", "content": "Rates on hold"}, "finish_reason": "stop"}],
                "usage": {"prompt_tokens": 12, "completion_tokens": 3, "total_tokens": 15}
            }"#,
        ))
        .unwrap();

    assert_eq!(result.content, "Rates on hold");
    assert_eq!(result.model, "gpt-4o-2024-08-06");
    assert_eq!(result.finish_reason.as_deref(), Some("stop"));
    assert_eq!(result.usage, Some(TokenUsage::reported(12, 3, 15)));
}

#[test]
fn test_missing_usage_and_model() {
    let provider = provider(ProviderKind::DeepSeek);
    let result = provider
        .map_response(response(r#"{"choices": [{"message": {"content": "ok"}}]}"#))
        .unwrap();

    assert_eq!(result.usage, None);
    assert_eq!(result.model, "deepseek-chat");
    assert_eq!(result.finish_reason, None);
}

#[test]
fn test_empty_choices_is_no_response() {
    let provider = provider(ProviderKind::OpenAi);

    for body in [
        r#"{"choices": []}"#,
        r#"{}"#,
        r#"{"choices": [{"message": {"content": null}}]}"#,
        r#"{"choices": [{"message": {"content": ""}}]}"#,
    ] {
        let err = provider.map_response(response(body)).unwrap_err();
        assert!(matches!(err, Error::NoResponse(ref p) if p == "openai"), "{body}");
    }
}

#[test]
fn test_debug_masks_key() {
    let provider = provider(ProviderKind::OpenAi);
    let debug_str = format!("{:?}", provider);
    assert!(!debug_str.contains("1234567890abcdefghij"));
}
