use super::convert::{collect_text, convert_messages};
use super::types::{AnthropicRequest, AnthropicResponse, API_VERSION};
use crate::completion::{ChatResult, TokenUsage};
use crate::config::{ProviderConfig, ProviderKind};
use crate::error::{Error, Result};
use crate::message::ChatMessage;
use crate::provider::{ensure_messages, ChatProvider};
use crate::transport::{nested_error_message, HttpTransport};
use tracing::{debug, instrument};

/// Anthropic Claude provider
#[derive(Debug)]
pub struct AnthropicProvider {
    pub(crate) transport: HttpTransport,
    pub(crate) config: ProviderConfig,
    pub(crate) model: String,
}

impl AnthropicProvider {
    /// Create a new Anthropic provider
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let transport = HttpTransport::new(
            ProviderKind::Anthropic,
            "anthropic",
            config.effective_timeout(),
            config.api_key(),
        )?;
        let model = config.effective_model().to_string();

        Ok(Self {
            transport,
            config,
            model,
        })
    }

    /// Endpoint for the messages API
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}/v1/messages", self.config.effective_base_url())
    }

    pub(crate) fn build_request<'a>(&'a self, messages: &'a [ChatMessage]) -> AnthropicRequest<'a> {
        let (system, messages) = convert_messages(messages);

        AnthropicRequest {
            model: &self.model,
            max_tokens: self.config.effective_max_tokens(),
            temperature: self.config.effective_temperature(),
            system,
            messages,
        }
    }

    pub(crate) fn map_response(&self, response: AnthropicResponse) -> Result<ChatResult> {
        let content = collect_text(&response.content);
        if content.trim().is_empty() {
            return Err(Error::NoResponse("anthropic".to_string()));
        }

        let usage = response.usage.map(|u| {
            TokenUsage::reported(
                u.input_tokens,
                u.output_tokens,
                u.input_tokens.saturating_add(u.output_tokens),
            )
        });

        Ok(ChatResult {
            content,
            usage,
            model: response.model.unwrap_or_else(|| self.model.clone()),
            finish_reason: response.stop_reason,
        })
    }
}

#[async_trait::async_trait]
impl ChatProvider for AnthropicProvider {
    fn name(&self) -> &str {
        "anthropic"
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Anthropic
    }

    fn model(&self) -> &str {
        &self.model
    }

    #[instrument(skip(self, messages), fields(provider = "anthropic", model = %self.model))]
    async fn chat(&self, messages: &[ChatMessage]) -> Result<ChatResult> {
        ensure_messages(messages)?;

        let request = self.build_request(messages);

        debug!("Sending request to Anthropic");

        let builder = self
            .transport
            .post(&self.endpoint())
            .header("x-api-key", self.config.api_key())
            .header("anthropic-version", API_VERSION);

        let response: AnthropicResponse = self
            .transport
            .post_json(builder, &request, nested_error_message)
            .await?;

        self.map_response(response)
    }
}
