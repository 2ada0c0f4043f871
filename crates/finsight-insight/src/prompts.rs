//! Prompt templates
//!
//! Templates are plain text files under a prompt root. With custom prompts
//! enabled, `<root>/custom/<file>` is tried first. A missing or empty file
//! falls back to the built-in text.

use crate::analysis::IntelligentAnalysis;
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// System prompt for the enhancement call
pub const SYSTEM_PROMPT_FILE: &str = "system-prompt.txt";

/// Task appended after the rule-engine data
pub const ANALYSIS_TASK_FILE: &str = "analysis-task.txt";

/// Smart-money template with a `{DATA}` placeholder
pub const SMART_MONEY_FILE: &str = "smart-money-analysis.txt";

/// Placeholder replaced by the smart-money data summary
pub const DATA_PLACEHOLDER: &str = "{DATA}";

const DEFAULT_SYSTEM_PROMPT: &str = "\
You are a senior financial analyst and investment advisor with more than 20 years of experience in global markets. Your expertise covers:

1. **Macro-economic analysis**: how economic cycles, monetary policy and fiscal policy move markets
2. **Sector research**: especially AI, semiconductors, data centers and energy
3. **Geopolitical insight**: judging the market impact of geopolitical events
4. **Investment strategy**: actionable recommendations with controlled risk

Your analysis:
- rests on data and facts, not speculation
- cross-checks several dimensions to find the connections that matter
- balances optimism with caution and takes risk management seriously
- gives concrete, actionable advice rather than vague concepts
- separates short-term noise from long-term trends

Build a deeper analysis on top of the rule-engine result provided.";

const DEFAULT_ANALYSIS_TASK: &str = "\
Based on the rule-engine analysis above, provide deeper insight and recommendations. \
Respond with a single JSON object inside a ```json code block with these top-level keys: \
macroEconomicInsights, monetaryPolicyInsights, geopoliticalInsights, sectorTrendsInsights \
(ai, semiconductor, dataCenter, energy), crossDomainDeepInsights, strategicRecommendations, \
catalystTimeline, scenarioAnalysis (bullCase, baseCase, bearCase with numeric probability \
percentages summing to 100) and keyQuestionsAndActions.";

const DEFAULT_SMART_MONEY_SYSTEM_PROMPT: &str = "\
You are a senior investment analyst who tracks \"smart money\", with more than 15 years of experience following institutional investors, congressional trading and market sentiment.

Your expertise:
1. Reading hedge fund 13F filings to find institutional consensus and divergence
2. Analyzing congressional trades for policy signals and information advantages
3. Interpreting prediction market odds for their impact on capital markets
4. Using retail sentiment data to find contrarian opportunities

Principles:
- Let the data speak; no unfounded speculation
- Cross-check several sources to raise signal reliability
- Separate noise from real signals
- Give specific, actionable investment recommendations
- Take risk management seriously";

const DEFAULT_SMART_MONEY_TEMPLATE: &str = "\
Analyze the following smart-money data in depth and provide investment insight and concrete recommendations:

{DATA}

Respond in JSON with:
1. An interpretation of each data source
2. The combined investment signal
3. Specific tickers to consider
4. Risk warnings";

/// Loads prompt templates from disk with built-in fallbacks
#[derive(Debug, Clone)]
pub struct PromptLoader {
    root: PathBuf,
    use_custom: bool,
}

impl Default for PromptLoader {
    fn default() -> Self {
        Self::new("prompts", false)
    }
}

impl PromptLoader {
    /// Create a loader rooted at `root`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, use_custom: bool) -> Self {
        Self {
            root: root.into(),
            use_custom,
        }
    }

    /// Prompt root directory
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Read a template, trimmed; `None` when absent or empty
    #[must_use]
    pub fn load(&self, filename: &str) -> Option<String> {
        if self.use_custom {
            let custom = self.root.join("custom").join(filename);
            if let Some(text) = read_trimmed(&custom) {
                debug!(path = %custom.display(), "Using custom prompt");
                return Some(text);
            }
        }

        let path = self.root.join(filename);
        let text = read_trimmed(&path);
        if text.is_none() {
            warn!(path = %path.display(), "Prompt file unavailable, using built-in default");
        }
        text
    }

    /// System prompt stamped with today's date (UTC)
    #[must_use]
    pub fn system_prompt(&self) -> String {
        self.system_prompt_for(Utc::now().date_naive())
    }

    /// System prompt stamped with `date`
    #[must_use]
    pub fn system_prompt_for(&self, date: NaiveDate) -> String {
        let base = self
            .load(SYSTEM_PROMPT_FILE)
            .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string());
        format!("{base}\n\nCurrent date: {}", date.format("%Y-%m-%d"))
    }

    /// Rule-engine result rendered for the model, followed by the task
    #[must_use]
    pub fn analysis_prompt(&self, analysis: &IntelligentAnalysis) -> String {
        let dimensions = analysis.dimensions.clone().unwrap_or_default();
        let sectors = dimensions.sector_deep_dive.clone().unwrap_or_default();
        let summary = &analysis.summary;

        let task = self
            .load(ANALYSIS_TASK_FILE)
            .unwrap_or_else(|| DEFAULT_ANALYSIS_TASK.to_string());

        format!(
            "# Rule Engine Analysis

## Market Overview
- Market condition: {condition}
- Overall sentiment: {sentiment}
- Outlook: {outlook}

## Dimensions

### Macro Economy
{macro_economic}

### Monetary Policy (Fed)
{monetary}

### Geopolitics
{geopolitical}

### Regulation
{regulatory}

## Sector Deep Dive

### AI
{ai}

### Semiconductors
{semiconductor}

### Data Centers
{data_center}

### Energy
{energy}

## Cross-Domain Insights
{cross_domain}

## Investment Implications (rule engine)
{implications}

## Key Catalysts
{catalysts}

---


{task}",
            condition = summary.market_condition,
            sentiment = summary.overall_sentiment,
            outlook = summary.outlook,
            macro_economic = pretty(&dimensions.macro_economic),
            monetary = pretty(&dimensions.monetary_policy),
            geopolitical = pretty(&dimensions.geopolitical),
            regulatory = pretty(&dimensions.regulatory),
            ai = pretty(&sectors.ai),
            semiconductor = pretty(&sectors.semiconductor),
            data_center = pretty(&sectors.data_center),
            energy = pretty(&sectors.energy),
            cross_domain = pretty(&analysis.cross_domain_insights),
            implications = pretty(&analysis.investment_implications),
            catalysts = pretty(&analysis.catalysts),
        )
    }

    /// System prompt for the smart-money call, stamped with `date`
    #[must_use]
    pub fn smart_money_system_prompt_for(&self, date: NaiveDate) -> String {
        format!(
            "{DEFAULT_SMART_MONEY_SYSTEM_PROMPT}\n\nCurrent date: {}",
            date.format("%Y-%m-%d")
        )
    }

    /// Smart-money user prompt with `{DATA}` replaced by `summary`
    #[must_use]
    pub fn smart_money_prompt(&self, summary: &str) -> String {
        let template = self
            .load(SMART_MONEY_FILE)
            .unwrap_or_else(|| DEFAULT_SMART_MONEY_TEMPLATE.to_string());
        template.replacen(DATA_PLACEHOLDER, summary, 1)
    }
}

fn read_trimmed(path: &Path) -> Option<String> {
    let text = fs::read_to_string(path).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn pretty<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| Value::Null.to_string())
}
