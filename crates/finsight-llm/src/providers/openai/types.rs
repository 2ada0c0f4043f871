use crate::config::ProviderKind;
use serde::{Deserialize, Serialize};

/// Wire profile of an OpenAI-compatible vendor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenAiCompatible {
    /// Provider name used in logs and errors
    pub name: &'static str,
    /// Vendor (selects the default endpoint, model and price table)
    pub kind: ProviderKind,
}

impl OpenAiCompatible {
    /// OpenAI
    pub const OPENAI: Self = Self {
        name: "openai",
        kind: ProviderKind::OpenAi,
    };

    /// DeepSeek
    pub const DEEPSEEK: Self = Self {
        name: "deepseek",
        kind: ProviderKind::DeepSeek,
    };
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<WireMessage<'a>>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Serialize)]
pub(crate) struct WireMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
    pub usage: Option<ChatUsage>,
    pub model: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatChoice {
    pub message: Option<ChatResponseMessage>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponseMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatUsage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
}
