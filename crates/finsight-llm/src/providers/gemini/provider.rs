//! Gemini Provider implementation

use super::convert::{collect_text, convert_messages};
use super::types::{GeminiRequest, GeminiResponse, GenerationConfig, TOP_K, TOP_P};
use crate::completion::{ChatResult, TokenUsage};
use crate::config::{ProviderConfig, ProviderKind};
use crate::error::{Error, Result};
use crate::message::ChatMessage;
use crate::provider::{ensure_messages, ChatProvider};
use crate::transport::{nested_error_message, HttpTransport};
use tracing::{debug, instrument};

/// Google Gemini provider
#[derive(Debug)]
pub struct GeminiProvider {
    transport: HttpTransport,
    config: ProviderConfig,
    model: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let transport = HttpTransport::new(
            ProviderKind::Google,
            "google",
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

    /// Endpoint for generateContent, without the key query parameter
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.effective_base_url(),
            self.model
        )
    }

    pub(crate) fn build_request(&self, messages: &[ChatMessage]) -> GeminiRequest {
        GeminiRequest {
            contents: convert_messages(messages),
            generation_config: GenerationConfig {
                temperature: self.config.effective_temperature(),
                max_output_tokens: self.config.effective_max_tokens(),
                top_p: TOP_P,
                top_k: TOP_K,
            },
        }
    }

    pub(crate) fn map_response(&self, response: GeminiResponse) -> Result<ChatResult> {
        let candidate = response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| Error::NoResponse("google".to_string()))?;

        let content = collect_text(candidate.content.as_ref());
        if content.trim().is_empty() {
            return Err(Error::NoResponse("google".to_string()));
        }

        let usage = response.usage_metadata.map(|u| {
            TokenUsage::reported(
                u.prompt_token_count,
                u.candidates_token_count,
                u.total_token_count,
            )
        });

        Ok(ChatResult {
            content,
            usage,
            model: response
                .model_version
                .unwrap_or_else(|| self.model.clone()),
            finish_reason: candidate.finish_reason,
        })
    }
}

#[async_trait::async_trait]
impl ChatProvider for GeminiProvider {
    fn name(&self) -> &str {
        "google"
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Google
    }

    fn model(&self) -> &str {
        &self.model
    }

    #[instrument(skip(self, messages), fields(provider = "google", model = %self.model))]
    async fn chat(&self, messages: &[ChatMessage]) -> Result<ChatResult> {
        ensure_messages(messages)?;

        let request = self.build_request(messages);

        // SECURITY: the key travels in the query string; log the bare endpoint only
        debug!("Sending request to Gemini: {}", self.endpoint());

        let builder = self
            .transport
            .post(&self.endpoint())
            .query(&[("key", self.config.api_key())]);

        let response: GeminiResponse = self
            .transport
            .post_json(builder, &request, nested_error_message)
            .await?;

        self.map_response(response)
    }
}
