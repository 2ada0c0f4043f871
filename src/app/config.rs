//! Application configuration types

use anyhow::{Context, Result};
use finsight_insight::{EnhancerConfig, PromptLoader};
use finsight_llm::util::mask_api_key;
use finsight_llm::{ProviderConfig, ProviderKind};
use serde::Deserialize;
use std::fmt;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub llm: LlmSettings,
    #[serde(default)]
    pub prompts: PromptSettings,
}

/// `[llm]` section
///
/// Unset optional values fall back to the per-vendor defaults of
/// [`ProviderConfig`].
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    pub enabled: bool,
    pub provider: String,
    pub model: String,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub timeout_ms: Option<u64>,
}

// SECURITY: Custom Debug implementation to mask API key
impl fmt::Debug for LlmSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmSettings")
            .field("enabled", &self.enabled)
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_deref().map(mask_api_key))
            .field("base_url", &self.base_url)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

impl LlmSettings {
    /// Resolve into a provider client configuration
    pub fn provider_config(&self) -> Result<ProviderConfig> {
        let kind: ProviderKind = self
            .provider
            .parse()
            .with_context(|| format!("Invalid llm.provider '{}'", self.provider))?;

        let mut config = ProviderConfig::new(kind);
        if !self.model.trim().is_empty() {
            config = config.with_model(self.model.trim());
        }
        if let Some(key) = non_blank(self.api_key.as_deref()) {
            config = config.with_api_key(key);
        }
        if let Some(url) = non_blank(self.base_url.as_deref()) {
            config = config.with_base_url(url);
        }
        if let Some(temperature) = self.temperature {
            config = config.with_temperature(temperature);
        }
        if let Some(max_tokens) = self.max_tokens {
            config = config.with_max_tokens(max_tokens);
        }
        if let Some(ms) = self.timeout_ms {
            config = config.with_timeout(Duration::from_millis(ms));
        }
        Ok(config)
    }

    /// Resolve into the enhancer configuration
    pub fn enhancer_config(&self) -> Result<EnhancerConfig> {
        Ok(EnhancerConfig {
            enabled: self.enabled,
            provider: self.provider_config()?,
        })
    }
}

/// `[prompts]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PromptSettings {
    /// Directory holding the prompt templates
    pub dir: String,
    /// Prefer `<dir>/custom/` templates when present
    pub custom: bool,
}

impl Default for PromptSettings {
    fn default() -> Self {
        Self {
            dir: "prompts".to_string(),
            custom: false,
        }
    }
}

impl PromptSettings {
    pub fn loader(&self) -> PromptLoader {
        PromptLoader::new(&self.dir, self.custom)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
