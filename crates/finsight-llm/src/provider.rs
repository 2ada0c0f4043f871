//! Chat provider trait definition
//!
//! This module defines the core trait that all vendor clients implement and
//! the factory that builds one from a [`ProviderConfig`].

use crate::completion::{ChatResult, TokenUsage};
use crate::config::{ProviderConfig, ProviderKind};
use crate::cost;
use crate::error::{Error, Result};
use crate::message::ChatMessage;
use crate::providers::{
    anthropic::AnthropicProvider, gemini::GeminiProvider, ollama::OllamaProvider,
    openai::OpenAiProvider,
};

/// Trait for chat providers
///
/// One call to [`ChatProvider::chat`] issues exactly one outbound request.
/// Implementations neither retry nor cache.
#[async_trait::async_trait]
pub trait ChatProvider: Send + Sync {
    /// Get the provider name
    fn name(&self) -> &str;

    /// Vendor behind this client
    fn kind(&self) -> ProviderKind;

    /// Model sent with every request
    fn model(&self) -> &str;

    /// Send a conversation and return the completion
    async fn chat(&self, messages: &[ChatMessage]) -> Result<ChatResult>;

    /// Estimated cost in USD for `usage` on this client's model
    fn estimate_cost(&self, usage: &TokenUsage) -> f64 {
        cost::estimate_cost(
            self.kind(),
            self.model(),
            usage.prompt_tokens,
            usage.completion_tokens,
        )
    }
}

/// Build the client for `config.provider`
///
/// # Errors
/// Returns [`Error::NotConfigured`] when a required credential is missing, or
/// an error if the HTTP client cannot be created.
pub fn create_provider(config: ProviderConfig) -> Result<Box<dyn ChatProvider>> {
    config.validate()?;

    Ok(match config.provider {
        ProviderKind::OpenAi => Box::new(OpenAiProvider::openai(config)?),
        ProviderKind::DeepSeek => Box::new(OpenAiProvider::deepseek(config)?),
        ProviderKind::Anthropic => Box::new(AnthropicProvider::new(config)?),
        ProviderKind::Google => Box::new(GeminiProvider::new(config)?),
        ProviderKind::Ollama => Box::new(OllamaProvider::new(config)?),
    })
}

/// Reject an empty conversation before any network call
pub(crate) fn ensure_messages(messages: &[ChatMessage]) -> Result<()> {
    if messages.is_empty() {
        return Err(Error::NotConfigured(
            "at least one message is required".to_string(),
        ));
    }
    Ok(())
}
