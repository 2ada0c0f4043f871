//! Smart-money analysis
//!
//! Congressional trades, hedge-fund 13F holdings, prediction markets and
//! retail sentiment are summarized into one prompt. The reply is parsed with
//! [`parse_smart_money`]; any failure yields `None`.

mod summary;
mod types;

#[cfg(test)]
mod tests;

pub use summary::{
    prepare_data_summary, CONGRESS_LIMIT, CONSENSUS_HOLDINGS_LIMIT, HEDGE_FUND_LIMIT,
    OUTCOMES_PER_MARKET, PREDICTION_LIMIT, SOCIAL_LIMIT,
};
pub use types::*;

use crate::enhancer::EnhancerConfig;
use crate::parse::parse_smart_money;
use crate::prompts::PromptLoader;
use chrono::Utc;
use finsight_llm::{create_provider, ChatMessage, ChatProvider};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// One collected dataset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectedData {
    /// Collector identifier
    #[serde(default)]
    pub source: String,
    /// Collected records
    #[serde(default)]
    pub items: Vec<DataItem>,
    /// Aggregates computed by the collector
    #[serde(default)]
    pub metadata: Map<String, Value>,
    /// Other fields (type, collectedAt, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One collected record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataItem {
    #[allow(missing_docs)]
    #[serde(default)]
    pub id: String,
    #[allow(missing_docs)]
    #[serde(default)]
    pub title: String,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Source-specific fields (ticker, politician, sentiment, ...)
    #[serde(default)]
    pub metadata: Map<String, Value>,
    /// Other fields (timestamp, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Smart-money datasets, any of which may be absent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmartMoneyData {
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub congress_trading: Option<CollectedData>,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hedge_fund: Option<CollectedData>,
    #[allow(missing_docs)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prediction_market: Option<CollectedData>,
    /// Reddit (ApeWisdom)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_sentiment: Option<CollectedData>,
    /// X.com (StockGeist)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_sentiment: Option<CollectedData>,
}

impl SmartMoneyData {
    /// Whether at least one dataset has items
    #[must_use]
    pub fn has_items(&self) -> bool {
        [
            &self.congress_trading,
            &self.hedge_fund,
            &self.prediction_market,
            &self.social_sentiment,
            &self.twitter_sentiment,
        ]
        .into_iter()
        .flatten()
        .any(|data| !data.items.is_empty())
    }
}

/// Runs the smart-money LLM analysis
pub struct SmartMoneyAnalyzer {
    prompts: PromptLoader,
    provider: Option<Arc<dyn ChatProvider>>,
}

impl std::fmt::Debug for SmartMoneyAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmartMoneyAnalyzer")
            .field("prompts", &self.prompts)
            .field("provider", &self.provider.as_ref().map(|p| p.name()))
            .finish()
    }
}

impl SmartMoneyAnalyzer {
    /// Build the analyzer, constructing the provider client when enabled
    ///
    /// # Errors
    /// Returns a configuration error when enabled with an invalid provider
    /// configuration.
    pub fn new(config: EnhancerConfig, prompts: PromptLoader) -> finsight_llm::Result<Self> {
        let provider = if config.enabled {
            Some(Arc::from(create_provider(config.provider)?))
        } else {
            None
        };
        Ok(Self { prompts, provider })
    }

    /// Build the analyzer around an existing provider
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

    /// Analyze the datasets; `None` when disabled, empty or on any failure
    pub async fn analyze(&self, data: &SmartMoneyData) -> Option<SmartMoneyInsight> {
        let Some(provider) = &self.provider else {
            info!("Smart-money LLM analysis is disabled");
            return None;
        };

        if !data.has_items() {
            info!("No smart-money data available for analysis");
            return None;
        }

        info!(
            provider = provider.name(),
            model = provider.model(),
            "Starting smart-money LLM analysis"
        );
        let start = Instant::now();

        let summary = prepare_data_summary(data);
        let messages = vec![
            ChatMessage::system(
                self.prompts
                    .smart_money_system_prompt_for(Utc::now().date_naive()),
            ),
            ChatMessage::user(self.prompts.smart_money_prompt(&summary)),
        ];

        let result = match provider.chat(&messages).await {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, "Smart-money analysis failed");
                return None;
            }
        };

        info!(
            completion_time_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
            tokens = result.usage.as_ref().map(|u| u.total_tokens),
            "Smart-money analysis completed"
        );

        parse_smart_money(&result.content)
    }
}
