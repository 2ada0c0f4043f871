//! Enhancement orchestrator
//!
//! [`InsightEnhancer::enhance`] runs one LLM call on top of a rule-engine
//! analysis and never fails. When enhancement is disabled or anything goes
//! wrong the analysis comes back unmodified.

use crate::analysis::{EnhancedAnalysis, IntelligentAnalysis, LlmMetadata};
use crate::parse::parse_insight;
use crate::prompts::PromptLoader;
use finsight_llm::{create_provider, ChatMessage, ChatProvider, ChatResult, ProviderConfig};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// LLM settings shared by the enhancer and the smart-money analyzer
#[derive(Debug, Clone)]
pub struct EnhancerConfig {
    /// Master switch; when off no provider is built and no call is made
    pub enabled: bool,
    /// Provider client configuration
    pub provider: ProviderConfig,
}

impl EnhancerConfig {
    /// Disabled configuration for the given provider settings
    #[must_use]
    pub fn disabled(provider: ProviderConfig) -> Self {
        Self {
            enabled: false,
            provider,
        }
    }

    /// Enabled configuration for the given provider settings
    #[must_use]
    pub fn enabled(provider: ProviderConfig) -> Self {
        Self {
            enabled: true,
            provider,
        }
    }
}

/// Adds LLM insight to rule-engine analyses
pub struct InsightEnhancer {
    prompts: PromptLoader,
    provider: Option<Arc<dyn ChatProvider>>,
}

impl std::fmt::Debug for InsightEnhancer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InsightEnhancer")
            .field("prompts", &self.prompts)
            .field("provider", &self.provider.as_ref().map(|p| p.name()))
            .finish()
    }
}

impl InsightEnhancer {
    /// Build the enhancer, constructing the provider client when enabled
    ///
    /// # Errors
    /// Returns a configuration error when enabled with an invalid provider
    /// configuration (e.g. a missing credential).
    pub fn new(config: EnhancerConfig, prompts: PromptLoader) -> finsight_llm::Result<Self> {
        let provider = if config.enabled {
            Some(Arc::from(create_provider(config.provider)?))
        } else {
            None
        };
        Ok(Self { prompts, provider })
    }

    /// Build the enhancer around an existing provider
    ///
    /// The provider is only used when `config.enabled` is set.
    #[must_use]
    pub fn with_provider(
        config: EnhancerConfig,
        prompts: PromptLoader,
        provider: Arc<dyn ChatProvider>,
    ) -> Self {
        Self {
            prompts,
            provider: config.enabled.then_some(provider),
        }
    }

    /// Whether enhancement calls will be made
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.provider.is_some()
    }

    /// Enhance an analysis; never fails
    pub async fn enhance(&self, analysis: IntelligentAnalysis) -> EnhancedAnalysis {
        let Some(provider) = &self.provider else {
            info!("LLM enhancement is disabled, returning rule-based analysis");
            return EnhancedAnalysis::passthrough(analysis);
        };

        info!(
            provider = provider.name(),
            model = provider.model(),
            "Starting LLM enhancement"
        );
        let start = Instant::now();

        let messages = vec![
            ChatMessage::system(self.prompts.system_prompt()),
            ChatMessage::user(self.prompts.analysis_prompt(&analysis)),
        ];

        let result = match provider.chat(&messages).await {
            Ok(result) => result,
            Err(e) => {
                warn!(
                    provider = provider.name(),
                    error = %e,
                    "LLM enhancement failed, returning rule-based analysis"
                );
                return EnhancedAnalysis::passthrough(analysis);
            }
        };

        let insight = parse_insight(&result.content);
        let completion_time = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        let metadata = build_metadata(provider.as_ref(), &result, completion_time);

        info!(
            completion_time_ms = completion_time,
            tokens = metadata.tokens_used,
            cost = metadata.cost,
            placeholder = insight.is_placeholder(),
            "LLM enhancement completed"
        );

        EnhancedAnalysis {
            analysis,
            llm_insights: Some(insight),
            llm_metadata: Some(metadata),
        }
    }
}

fn build_metadata(provider: &dyn ChatProvider, result: &ChatResult, completion_time: u64) -> LlmMetadata {
    LlmMetadata {
        provider: provider.name().to_string(),
        model: provider.model().to_string(),
        completion_time,
        tokens_used: result.usage.as_ref().map(|u| u.total_tokens),
        cost: result.usage.as_ref().map(|u| provider.estimate_cost(u)),
    }
}
