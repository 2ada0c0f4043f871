//! Rule-engine analysis (input) and its enhanced form (output)
//!
//! The rule engine lives outside this workspace; its result arrives as JSON.
//! Only the fields the prompts read are typed. Everything else is carried
//! through untouched so that a passthrough serializes to the same document.

use crate::insight::StructuredInsight;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Result of the rule-based multi-dimensional analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntelligentAnalysis {
    /// Overall summary
    pub summary: AnalysisSummary,
    /// Per-dimension analysis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
    /// Cross-domain connections
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub cross_domain_insights: Value,
    /// Rule-engine investment implications
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub investment_implications: Value,
    /// Upcoming and monitored catalysts
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub catalysts: Value,
    /// Every other field (timestamp, market, news, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Summary block of the rule-engine analysis
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    /// e.g. `bull`, `bear`, `volatile`
    #[serde(default)]
    pub market_condition: String,
    /// e.g. `positive`, `negative`, `neutral`
    #[serde(default)]
    pub overall_sentiment: String,
    /// Headline points
    #[serde(default)]
    pub key_points: Vec<String>,
    /// Flagged risks
    #[serde(default)]
    pub risks_and_concerns: Vec<String>,
    /// Outlook sentence
    #[serde(default)]
    pub outlook: String,
    /// Other summary fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Dimension analyses, kept as opaque JSON
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimensions {
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub macro_economic: Value,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub monetary_policy: Value,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub geopolitical: Value,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub regulatory: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector_deep_dive: Option<SectorDeepDive>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Focus-sector analyses, kept as opaque JSON
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorDeepDive {
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub ai: Value,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub semiconductor: Value,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub data_center: Value,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub energy: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Call metadata attached to an enhanced analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LlmMetadata {
    /// Provider name
    pub provider: String,
    /// Model sent with the request
    pub model: String,
    /// Wall-clock latency of the enhancement in milliseconds
    pub completion_time: u64,
    /// Total tokens, when usage was available
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens_used: Option<u32>,
    /// Estimated USD cost, when usage was available
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
}

/// Rule-engine analysis, optionally augmented with LLM insight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedAnalysis {
    /// The original analysis
    #[serde(flatten)]
    pub analysis: IntelligentAnalysis,
    /// Parsed insight
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub llm_insights: Option<StructuredInsight>,
    /// Call metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub llm_metadata: Option<LlmMetadata>,
}

impl EnhancedAnalysis {
    /// Wrap an analysis without adding anything
    #[must_use]
    pub fn passthrough(analysis: IntelligentAnalysis) -> Self {
        Self {
            analysis,
            llm_insights: None,
            llm_metadata: None,
        }
    }

    /// Whether LLM insight was attached
    #[must_use]
    pub fn is_enhanced(&self) -> bool {
        self.llm_insights.is_some()
    }
}
