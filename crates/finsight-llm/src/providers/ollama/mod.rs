//! Ollama - local inference provider
//!
//! No credential, no cost. Usage is estimated locally with the character
//! heuristic unless the server reports both eval counts.

mod types;

#[cfg(test)]
mod tests;

use crate::completion::{ChatResult, TokenUsage};
use crate::config::{ProviderConfig, ProviderKind};
use crate::error::{Error, Result};
use crate::message::ChatMessage;
use crate::provider::{ensure_messages, ChatProvider};
use crate::token::{estimate_conversation_tokens, estimate_tokens};
use crate::transport::{plain_error_message, HttpTransport};
use tracing::{debug, instrument};
use types::{OllamaChatRequest, OllamaChatResponse, OllamaMessage, OllamaOptions};

/// Ollama provider
#[derive(Debug)]
pub struct OllamaProvider {
    transport: HttpTransport,
    config: ProviderConfig,
    model: String,
}

impl OllamaProvider {
    /// Create a new Ollama provider
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let transport = HttpTransport::new(
            ProviderKind::Ollama,
            "ollama",
            config.effective_timeout(),
            String::new(),
        )?;
        let model = config.effective_model().to_string();

        Ok(Self {
            transport,
            config,
            model,
        })
    }

    /// Endpoint for chat
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}/api/chat", self.config.effective_base_url())
    }

    fn build_request<'a>(&'a self, messages: &'a [ChatMessage]) -> OllamaChatRequest<'a> {
        OllamaChatRequest {
            model: &self.model,
            messages: messages
                .iter()
                .map(|m| OllamaMessage {
                    role: m.role.as_str(),
                    content: &m.content,
                })
                .collect(),
            stream: false,
            options: OllamaOptions {
                temperature: self.config.effective_temperature(),
                num_predict: self.config.effective_max_tokens(),
            },
        }
    }

    fn map_response(
        &self,
        messages: &[ChatMessage],
        response: OllamaChatResponse,
    ) -> Result<ChatResult> {
        let content = response
            .message
            .map(|m| m.content)
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| Error::NoResponse("ollama".to_string()))?;

        let usage = match (response.prompt_eval_count, response.eval_count) {
            (Some(prompt), Some(completion)) => {
                TokenUsage::reported(prompt, completion, prompt.saturating_add(completion))
            }
            _ => TokenUsage::estimated(
                estimate_conversation_tokens(messages),
                estimate_tokens(&content),
            ),
        };

        let done = response.done;
        let finish_reason = response
            .done_reason
            .unwrap_or_else(|| String::from(if done { "stop" } else { "length" }));

        Ok(ChatResult {
            content,
            usage: Some(usage),
            model: response.model.unwrap_or_else(|| self.model.clone()),
            finish_reason: Some(finish_reason),
        })
    }
}

#[async_trait::async_trait]
impl ChatProvider for OllamaProvider {
    fn name(&self) -> &str {
        "ollama"
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Ollama
    }

    fn model(&self) -> &str {
        &self.model
    }

    #[instrument(skip(self, messages), fields(provider = "ollama", model = %self.model))]
    async fn chat(&self, messages: &[ChatMessage]) -> Result<ChatResult> {
        ensure_messages(messages)?;

        let request = self.build_request(messages);

        debug!("Sending request to Ollama: {}", self.endpoint());

        let builder = self.transport.post(&self.endpoint());
        let response: OllamaChatResponse = self
            .transport
            .post_json(builder, &request, plain_error_message)
            .await?;

        self.map_response(messages, response)
    }

    fn estimate_cost(&self, _usage: &TokenUsage) -> f64 {
        0.0
    }
}
