//! Structured insight
//!
//! The multi-section JSON object the model is prompted to produce. Only
//! `macroEconomicInsights` and `strategicRecommendations` are mandatory. An
//! accepted reply is kept as the document the model sent, key for key, so it
//! serializes back unchanged. The section types below are typed views over
//! that document; a section that does not fit its view is still kept.

use finsight_llm::util::truncate_chars;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Text placed in every field of a placeholder insight
pub const PARSE_FAILED_SENTINEL: &str = "LLM analysis parsing failed";

/// Characters of the raw reply kept in a placeholder for diagnostics
pub const DIAGNOSTIC_PREFIX_CHARS: usize = 200;

/// Deep insight produced by one enhancement call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StructuredInsight {
    document: Map<String, Value>,
    #[serde(skip)]
    placeholder: bool,
}

/// `macroEconomicInsights`
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MacroEconomicInsights {
    pub summary: String,
    pub implications: Vec<String>,
    pub risk_factors: Vec<String>,
    pub opportunities: Vec<String>,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MonetaryPolicyInsights {
    pub summary: String,
    pub future_expectations: Vec<String>,
    pub market_impact: Vec<String>,
    pub investment_strategy: Vec<String>,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeopoliticalInsights {
    pub summary: String,
    pub key_events: Vec<String>,
    pub affected_sectors: Vec<String>,
    pub timeline_analysis: String,
}

/// Per-sector trend analysis
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SectorTrendsInsights {
    pub ai: AiTrend,
    pub semiconductor: SemiconductorTrend,
    pub data_center: DataCenterTrend,
    pub energy: EnergyTrend,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AiTrend {
    pub key_drivers: Vec<String>,
    pub competitive_landscape: String,
    pub future_outlook: String,
    pub investment_thesis: String,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SemiconductorTrend {
    pub supply_demand_analysis: String,
    pub cycle_timing: String,
    pub key_risks: Vec<String>,
    pub opportunities: Vec<String>,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DataCenterTrend {
    pub growth_drivers: Vec<String>,
    pub competitive_advantages: String,
    pub infrastructure_gaps: Vec<String>,
    pub investment_priorities: Vec<String>,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnergyTrend {
    pub transition_analysis: String,
    pub nuclear_renaissance: String,
    pub policy_impact: Vec<String>,
    pub long_term_outlook: String,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CrossDomainDeepInsights {
    pub systemic_connections: Vec<String>,
    pub emerging_narratives: Vec<String>,
    pub contrarian: Vec<String>,
    pub black_swan_risks: Vec<String>,
}

/// Recommendations by horizon (short 1-3 months, medium 3-12 months, long 1-3 years)
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StrategicRecommendations {
    pub short_term: Vec<String>,
    pub medium_term: Vec<String>,
    pub long_term: Vec<String>,
    pub risk_management: Vec<String>,
    pub portfolio_allocation: String,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalystTimeline {
    pub this_week: Vec<String>,
    pub this_month: Vec<String>,
    pub this_quarter: Vec<String>,
    pub beyond_quarter: Vec<String>,
}

/// Scenario probabilities are percentages
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScenarioAnalysis {
    pub bull_case: BullCase,
    pub base_case: BaseCase,
    pub bear_case: BearCase,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BullCase {
    pub probability: f64,
    pub scenario: String,
    pub triggers: Vec<String>,
    pub targets: Vec<String>,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BaseCase {
    pub probability: f64,
    pub scenario: String,
    pub expected_outcome: String,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BearCase {
    pub probability: f64,
    pub scenario: String,
    pub triggers: Vec<String>,
    pub protections: Vec<String>,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KeyQuestionsAndActions {
    pub critical_questions: Vec<String>,
    pub action_items: Vec<String>,
    pub monitoring_metrics: Vec<String>,
}

impl StructuredInsight {
    /// Top-level key of the macro-economic section
    pub const MACRO_ECONOMIC: &'static str = "macroEconomicInsights";
    /// Top-level key of the recommendations section
    pub const STRATEGIC_RECOMMENDATIONS: &'static str = "strategicRecommendations";
    /// Top-level key of the scenario section
    pub const SCENARIO_ANALYSIS: &'static str = "scenarioAnalysis";
    /// Top-level key of the catalyst section
    pub const CATALYST_TIMELINE: &'static str = "catalystTimeline";

    /// Wrap a document that passed the mandatory-key check
    pub(crate) fn accepted(document: Map<String, Value>) -> Self {
        Self {
            document,
            placeholder: false,
        }
    }

    /// Schema-complete, content-empty insight used when a reply cannot be parsed
    ///
    /// Every list is empty and every text field holds [`PARSE_FAILED_SENTINEL`],
    /// except `macroEconomicInsights.summary`, which keeps the first 200
    /// characters of `raw` for diagnostics.
    #[must_use]
    pub fn placeholder(raw: &str) -> Self {
        let failed = PARSE_FAILED_SENTINEL;
        let summary = if raw.trim().is_empty() {
            failed
        } else {
            truncate_chars(raw, DIAGNOSTIC_PREFIX_CHARS)
        };

        let sections = [
            (
                Self::MACRO_ECONOMIC,
                json!({"summary": summary, "implications": [], "riskFactors": [], "opportunities": []}),
            ),
            (
                "monetaryPolicyInsights",
                json!({"summary": failed, "futureExpectations": [], "marketImpact": [], "investmentStrategy": []}),
            ),
            (
                "geopoliticalInsights",
                json!({"summary": failed, "keyEvents": [], "affectedSectors": [], "timelineAnalysis": failed}),
            ),
            (
                "sectorTrendsInsights",
                json!({
                    "ai": {"keyDrivers": [], "competitiveLandscape": failed, "futureOutlook": failed, "investmentThesis": failed},
                    "semiconductor": {"supplyDemandAnalysis": failed, "cycleTiming": failed, "keyRisks": [], "opportunities": []},
                    "dataCenter": {"growthDrivers": [], "competitiveAdvantages": failed, "infrastructureGaps": [], "investmentPriorities": []},
                    "energy": {"transitionAnalysis": failed, "nuclearRenaissance": failed, "policyImpact": [], "longTermOutlook": failed}
                }),
            ),
            (
                "crossDomainDeepInsights",
                json!({"systemicConnections": [], "emergingNarratives": [], "contrarian": [], "blackSwanRisks": []}),
            ),
            (
                Self::STRATEGIC_RECOMMENDATIONS,
                json!({"shortTerm": [], "mediumTerm": [], "longTerm": [], "riskManagement": [], "portfolioAllocation": failed}),
            ),
            (
                Self::CATALYST_TIMELINE,
                json!({"thisWeek": [], "thisMonth": [], "thisQuarter": [], "beyondQuarter": []}),
            ),
            (
                Self::SCENARIO_ANALYSIS,
                json!({
                    "bullCase": {"probability": 33, "scenario": failed, "triggers": [], "targets": []},
                    "baseCase": {"probability": 34, "scenario": failed, "expectedOutcome": failed},
                    "bearCase": {"probability": 33, "scenario": failed, "triggers": [], "protections": []}
                }),
            ),
            (
                "keyQuestionsAndActions",
                json!({"criticalQuestions": [], "actionItems": [], "monitoringMetrics": []}),
            ),
        ];

        Self {
            document: sections
                .into_iter()
                .map(|(key, section)| (key.to_string(), section))
                .collect(),
            placeholder: true,
        }
    }

    /// Whether this insight is the parse-failure placeholder
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }

    /// Raw top-level section
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.document.get(key)
    }

    /// Typed view of a top-level section
    ///
    /// `None` when the section is absent or does not fit `T`; the document
    /// itself is unaffected.
    #[must_use]
    pub fn section<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.document
            .get(key)
            .and_then(|value| T::deserialize(value).ok())
    }

    /// `macroEconomicInsights.summary` when it is text
    #[must_use]
    pub fn summary(&self) -> Option<&str> {
        self.document.get(Self::MACRO_ECONOMIC)?.get("summary")?.as_str()
    }

    /// The document as received
    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.document
    }

    /// Consume into the document
    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        self.document
    }
}
