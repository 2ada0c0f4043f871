//! OpenAI-compatible chat completions
//!
//! OpenAI and DeepSeek share one wire format (bearer auth, flat messages
//! array, `choices[0].message.content`). DeepSeek is the same client with a
//! different [`OpenAiCompatible`] profile, which selects its own endpoint and
//! price table through [`ProviderKind`].

mod types;

#[cfg(test)]
mod tests;

pub use types::OpenAiCompatible;

use crate::completion::{ChatResult, TokenUsage};
use crate::config::{ProviderConfig, ProviderKind};
use crate::error::{Error, Result};
use crate::message::ChatMessage;
use crate::provider::{ensure_messages, ChatProvider};
use crate::transport::{nested_error_message, HttpTransport};
use types::{ChatRequest, ChatResponse, WireMessage};
use tracing::{debug, instrument};

/// OpenAI-compatible provider
#[derive(Debug)]
pub struct OpenAiProvider {
    profile: OpenAiCompatible,
    transport: HttpTransport,
    config: ProviderConfig,
    base_url: String,
    model: String,
}

impl OpenAiProvider {
    /// Create a client for the given wire profile
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_profile(profile: OpenAiCompatible, mut config: ProviderConfig) -> Result<Self> {
        // Vendor defaults (endpoint, model) follow the profile
        config.provider = profile.kind;

        let transport = HttpTransport::new(
            profile.kind,
            profile.name,
            config.effective_timeout(),
            config.api_key(),
        )?;

        let base_url = config.effective_base_url();
        let model = config.effective_model().to_string();

        Ok(Self {
            profile,
            transport,
            config,
            base_url,
            model,
        })
    }

    /// OpenAI client
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn openai(config: ProviderConfig) -> Result<Self> {
        Self::with_profile(OpenAiCompatible::OPENAI, config)
    }

    /// DeepSeek client
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn deepseek(config: ProviderConfig) -> Result<Self> {
        Self::with_profile(OpenAiCompatible::DEEPSEEK, config)
    }

    /// Endpoint for chat completions
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    fn build_request<'a>(&'a self, messages: &'a [ChatMessage]) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.model,
            messages: messages
                .iter()
                .map(|m| WireMessage {
                    role: m.role.as_str(),
                    content: &m.content,
                })
                .collect(),
            temperature: self.config.effective_temperature(),
            max_tokens: self.config.effective_max_tokens(),
        }
    }

    fn map_response(&self, response: ChatResponse) -> Result<ChatResult> {
        let no_response = || Error::NoResponse(self.profile.name.to_string());

        let choice = response.choices.into_iter().next().ok_or_else(no_response)?;
        let content = choice
            .message
            .and_then(|m| m.content)
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(no_response)?;

        let usage = response.usage.map(|u| {
            TokenUsage::reported(u.prompt_tokens, u.completion_tokens, u.total_tokens)
        });

        Ok(ChatResult {
            content,
            usage,
            model: response.model.unwrap_or_else(|| self.model.clone()),
            finish_reason: choice.finish_reason,
        })
    }
}

#[async_trait::async_trait]
impl ChatProvider for OpenAiProvider {
    fn name(&self) -> &str {
        self.profile.name
    }

    fn kind(&self) -> ProviderKind {
        self.profile.kind
    }

    fn model(&self) -> &str {
        &self.model
    }

    #[instrument(skip(self, messages), fields(provider = self.profile.name, model = %self.model))]
    async fn chat(&self, messages: &[ChatMessage]) -> Result<ChatResult> {
        ensure_messages(messages)?;

        let request = self.build_request(messages);

        debug!("Sending request to {}", self.profile.name);

        let builder = self
            .transport
            .post(&self.endpoint())
            .header("Authorization", format!("Bearer {}", self.config.api_key()));

        let response: ChatResponse = self
            .transport
            .post_json(builder, &request, nested_error_message)
            .await?;

        self.map_response(response)
    }
}
