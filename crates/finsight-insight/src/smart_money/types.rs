//! Smart-money insight schema

#![allow(missing_docs)]

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Direction of the combined smart-money signal
///
/// Read case-insensitively; anything outside the set, including non-text
/// values, becomes `Unknown`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "Value")]
pub enum OverallSignal {
    Bullish,
    Bearish,
    #[default]
    Neutral,
    Mixed,
    Unknown,
}

impl From<Value> for OverallSignal {
    fn from(value: Value) -> Self {
        match normalize(&value).as_str() {
            "bullish" => Self::Bullish,
            "bearish" => Self::Bearish,
            "neutral" => Self::Neutral,
            "mixed" => Self::Mixed,
            _ => Self::Unknown,
        }
    }
}

/// Confidence in the combined signal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "Value")]
pub enum SignalStrength {
    Strong,
    Moderate,
    #[default]
    Weak,
    Unknown,
}

impl From<Value> for SignalStrength {
    fn from(value: Value) -> Self {
        match normalize(&value).as_str() {
            "strong" => Self::Strong,
            "moderate" => Self::Moderate,
            "weak" => Self::Weak,
            _ => Self::Unknown,
        }
    }
}

/// Holding period for an investment thesis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "Value")]
pub enum TimeHorizon {
    Short,
    #[default]
    Medium,
    Long,
    Unknown,
}

impl From<Value> for TimeHorizon {
    fn from(value: Value) -> Self {
        let value = normalize(&value);
        match value.trim_end_matches("-term").trim_end_matches("_term") {
            "short" => Self::Short,
            "medium" => Self::Medium,
            "long" => Self::Long,
            _ => Self::Unknown,
        }
    }
}

fn normalize(value: &Value) -> String {
    value
        .as_str()
        .map(|v| v.trim().to_ascii_lowercase())
        .unwrap_or_default()
}

/// Result of one smart-money analysis call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmartMoneyInsight {
    /// Per-source readings and their synthesis
    #[serde(default)]
    pub smart_money_analysis: SmartMoneyAnalysis,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub investment_theses: Option<Vec<InvestmentThesis>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watchlist: Option<Watchlist>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_outlook: Option<MarketOutlook>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmartMoneyAnalysis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub congress_trading: Option<CongressTradingReading>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hedge_fund_holdings: Option<HedgeFundReading>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prediction_market: Option<PredictionMarketReading>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_sentiment: Option<SocialSentimentReading>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synthesis: Option<Synthesis>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CongressTradingReading {
    pub summary: String,
    pub notable_trades: Vec<NotableTrade>,
    pub focus_stocks: Vec<String>,
    pub interpretation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotableTrade {
    pub politician: String,
    /// `D`, `R` or `I`
    pub party: String,
    pub ticker: String,
    pub action: String,
    pub amount: String,
    pub significance: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HedgeFundReading {
    pub summary: String,
    pub top_holdings: Vec<String>,
    pub significant_changes: Vec<HoldingChange>,
    pub interpretation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HoldingChange {
    pub fund: String,
    pub ticker: String,
    pub action: String,
    pub implication: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PredictionMarketReading {
    pub summary: String,
    pub key_predictions: Vec<KeyPrediction>,
    pub interpretation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KeyPrediction {
    pub question: String,
    /// Models answer with `"62%"`, `0.62` or `62`
    pub probability: Value,
    pub market_implication: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialSentimentReading {
    pub summary: String,
    pub most_bullish: Vec<String>,
    pub most_bearish: Vec<String>,
    pub contrarian_signals: Vec<ContrarianSignal>,
    pub interpretation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContrarianSignal {
    pub ticker: String,
    pub signal: String,
    pub interpretation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Synthesis {
    pub overall_signal: OverallSignal,
    pub signal_strength: SignalStrength,
    pub focus_stocks: Vec<FocusStock>,
    pub actionable_insights: Vec<String>,
    pub risk_warnings: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FocusStock {
    pub ticker: String,
    pub signals: Vec<String>,
    pub recommendation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvestmentThesis {
    pub ticker: String,
    pub company: String,
    pub thesis: String,
    pub signals: Vec<String>,
    pub entry_strategy: String,
    pub risk_factors: Vec<String>,
    pub time_horizon: TimeHorizon,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Watchlist {
    pub top_picks: Vec<TopPick>,
    pub caution_list: Vec<CautionEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TopPick {
    pub ticker: String,
    pub reason: String,
    pub signal_source: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CautionEntry {
    pub ticker: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarketOutlook {
    pub short_term: String,
    pub medium_term: String,
    pub key_risks: Vec<String>,
    pub key_catalysts: Vec<String>,
}
