//! Mock chat provider for testing
//!
//! Returns scripted results in order and records every conversation it
//! receives. When the queue is empty it answers with a default reply.

use crate::completion::{ChatResult, TokenUsage};
use crate::config::ProviderKind;
use crate::error::Result;
use crate::message::ChatMessage;
use crate::provider::ChatProvider;

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// A mock provider that returns queued results or a default reply.
#[derive(Debug, Clone)]
pub struct MockProvider {
    kind: ProviderKind,
    model: String,
    responses: Arc<Mutex<VecDeque<Result<ChatResult>>>>,
    requests: Arc<Mutex<Vec<Vec<ChatMessage>>>>,
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockProvider {
    /// Create a new mock provider posing as OpenAI's `mock-model`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_model(ProviderKind::OpenAi, "mock-model")
    }

    /// Create a mock that reports the given vendor and model.
    #[must_use]
    pub fn with_model(kind: ProviderKind, model: impl Into<String>) -> Self {
        Self {
            kind,
            model: model.into(),
            responses: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a result to the queue.
    pub fn push_result(&self, result: Result<ChatResult>) {
        self.responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(result);
    }

    /// Queue a successful reply with the given content and usage.
    pub fn push_reply(&self, content: impl Into<String>, usage: Option<TokenUsage>) {
        self.push_result(Ok(ChatResult {
            content: content.into(),
            usage,
            model: self.model.clone(),
            finish_reason: Some("stop".to_string()),
        }));
    }

    /// Conversations received so far.
    #[must_use]
    pub fn requests(&self) -> Vec<Vec<ChatMessage>> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Number of chat calls received.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

#[async_trait::async_trait]
impl ChatProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    fn kind(&self) -> ProviderKind {
        self.kind
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn chat(&self, messages: &[ChatMessage]) -> Result<ChatResult> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(messages.to_vec());

        let queued = self
            .responses
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front();

        queued.unwrap_or_else(|| {
            Ok(ChatResult {
                content: "mock response".to_string(),
                usage: None,
                model: self.model.clone(),
                finish_reason: Some("stop".to_string()),
            })
        })
    }
}
