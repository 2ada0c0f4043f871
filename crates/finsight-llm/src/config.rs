//! Provider configuration
//!
//! A [`ProviderConfig`] is built once and handed to exactly one client
//! instance. Values are pass-through; the only defaulting happens in the
//! `effective_*` accessors.

use crate::error::{Error, Result};
use crate::util::mask_api_key;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Default sampling temperature
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Default maximum output tokens
pub const DEFAULT_MAX_TOKENS: u32 = 4096;

/// Default timeout for hosted vendors
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Default timeout for local inference (local models can be slow)
pub const DEFAULT_LOCAL_TIMEOUT: Duration = Duration::from_secs(120);

/// Supported vendors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// OpenAI chat completions
    #[serde(rename = "openai")]
    OpenAi,
    /// Anthropic messages API
    Anthropic,
    /// Google Gemini generateContent
    #[serde(alias = "gemini")]
    Google,
    /// Local Ollama server
    Ollama,
    /// DeepSeek (OpenAI-compatible)
    #[serde(rename = "deepseek")]
    DeepSeek,
}

impl ProviderKind {
    /// All supported vendors
    pub const ALL: [ProviderKind; 5] = [
        Self::OpenAi,
        Self::Anthropic,
        Self::Google,
        Self::Ollama,
        Self::DeepSeek,
    ];

    /// Identifier used in configuration and logs
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Anthropic => "anthropic",
            Self::Google => "google",
            Self::Ollama => "ollama",
            Self::DeepSeek => "deepseek",
        }
    }

    /// Whether the vendor mandates a credential
    #[must_use]
    pub fn requires_api_key(&self) -> bool {
        !matches!(self, Self::Ollama)
    }

    /// Default endpoint
    #[must_use]
    pub fn default_base_url(&self) -> &'static str {
        match self {
            Self::OpenAi => "https://api.openai.com/v1",
            Self::Anthropic => "https://api.anthropic.com",
            Self::Google => "https://generativelanguage.googleapis.com",
            Self::Ollama => "http://localhost:11434",
            Self::DeepSeek => "https://api.deepseek.com/v1",
        }
    }

    /// Model used when none is configured
    #[must_use]
    pub fn default_model(&self) -> &'static str {
        match self {
            Self::OpenAi => "gpt-4o",
            Self::Anthropic => "claude-3-5-sonnet-20241022",
            Self::Google => "gemini-1.5-flash",
            Self::Ollama => "qwen2.5:7b",
            Self::DeepSeek => "deepseek-chat",
        }
    }

    /// Request timeout used when none is configured
    #[must_use]
    pub fn default_timeout(&self) -> Duration {
        match self {
            Self::Ollama => DEFAULT_LOCAL_TIMEOUT,
            _ => DEFAULT_TIMEOUT,
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(Self::OpenAi),
            "anthropic" | "claude" => Ok(Self::Anthropic),
            "google" | "gemini" => Ok(Self::Google),
            "ollama" => Ok(Self::Ollama),
            "deepseek" => Ok(Self::DeepSeek),
            other => Err(Error::NotConfigured(format!(
                "unsupported LLM provider: {other}"
            ))),
        }
    }
}

/// Configuration for one provider client
#[derive(Clone)]
pub struct ProviderConfig {
    /// Vendor
    pub provider: ProviderKind,
    /// Model identifier (empty means vendor default)
    pub model: String,
    /// Credential
    pub api_key: Option<String>,
    /// Endpoint override
    pub base_url: Option<String>,
    /// Sampling temperature
    pub temperature: Option<f32>,
    /// Maximum output tokens
    pub max_tokens: Option<u32>,
    /// Request timeout
    pub timeout: Option<Duration>,
}

// SECURITY: Custom Debug implementation to mask API key
impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_deref().map(mask_api_key))
            .field("base_url", &self.base_url)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ProviderConfig {
    /// Create a configuration for a vendor with its default model
    #[must_use]
    pub fn new(provider: ProviderKind) -> Self {
        Self {
            provider,
            model: String::new(),
            api_key: None,
            base_url: None,
            temperature: None,
            max_tokens: None,
            timeout: None,
        }
    }

    /// Set the model
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the API key
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the temperature
    #[must_use]
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the maximum output tokens
    #[must_use]
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set the timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Fail fast when a required credential is absent
    ///
    /// # Errors
    /// Returns [`Error::NotConfigured`] when the vendor needs a key and none is set.
    pub fn validate(&self) -> Result<()> {
        if self.provider.requires_api_key() && self.api_key().is_empty() {
            return Err(Error::NotConfigured(format!(
                "API key is required for {}",
                self.provider
            )));
        }
        Ok(())
    }

    /// Credential, or empty string
    #[must_use]
    pub fn api_key(&self) -> &str {
        self.api_key.as_deref().map(str::trim).unwrap_or_default()
    }

    /// Endpoint without a trailing slash
    #[must_use]
    pub fn effective_base_url(&self) -> String {
        self.base_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or(self.provider.default_base_url())
            .trim_end_matches('/')
            .to_string()
    }

    /// Configured model, or the vendor default
    #[must_use]
    pub fn effective_model(&self) -> &str {
        if self.model.trim().is_empty() {
            self.provider.default_model()
        } else {
            self.model.trim()
        }
    }

    /// Configured temperature, or 0.7
    #[must_use]
    pub fn effective_temperature(&self) -> f32 {
        self.temperature.unwrap_or(DEFAULT_TEMPERATURE)
    }

    /// Configured max tokens, or 4096
    #[must_use]
    pub fn effective_max_tokens(&self) -> u32 {
        self.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS)
    }

    /// Configured timeout, or the vendor default
    #[must_use]
    pub fn effective_timeout(&self) -> Duration {
        self.timeout
            .unwrap_or_else(|| self.provider.default_timeout())
    }
}
