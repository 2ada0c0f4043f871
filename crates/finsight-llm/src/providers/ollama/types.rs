use serde::{Deserialize, Serialize};

// ============================================================================
// API Types
// ============================================================================

/// Request for the Ollama chat endpoint
#[derive(Debug, Serialize)]
pub(crate) struct OllamaChatRequest<'a> {
    /// The model name to use
    pub model: &'a str,
    /// List of messages in the conversation
    pub messages: Vec<OllamaMessage<'a>>,
    /// Always false; the full reply arrives in one body
    pub stream: bool,
    /// Sampling options
    pub options: OllamaOptions,
}

/// Message format for Ollama chat
#[derive(Debug, Serialize)]
pub(crate) struct OllamaMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

/// Model configuration options for Ollama
#[derive(Debug, Serialize)]
pub(crate) struct OllamaOptions {
    /// Sampling temperature
    pub temperature: f32,
    /// Maximum number of tokens to generate
    pub num_predict: u32,
}

/// Response from the Ollama chat endpoint
#[derive(Debug, Deserialize)]
pub(crate) struct OllamaChatResponse {
    pub model: Option<String>,
    pub message: Option<OllamaResponseMessage>,
    #[serde(default)]
    pub done: bool,
    pub done_reason: Option<String>,
    pub prompt_eval_count: Option<u32>,
    pub eval_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OllamaResponseMessage {
    #[serde(default)]
    pub content: String,
}
