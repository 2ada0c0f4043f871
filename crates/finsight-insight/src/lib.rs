//! Finsight Insight - LLM enhancement of rule-based market analysis
//!
//! A rule engine produces an [`IntelligentAnalysis`]. [`InsightEnhancer`]
//! sends it to a [`finsight_llm::ChatProvider`] and attaches the parsed
//! [`StructuredInsight`]. Enhancement is best effort: the rule-based result is
//! always returned, with or without insight.
//!
//! The model's reply is repaired by [`parse_insight`], which accepts fenced or
//! bare JSON and falls back to a placeholder when the reply cannot be used.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod analysis;
pub mod enhancer;
pub mod insight;
pub mod parse;
pub mod prompts;
pub mod smart_money;

pub use analysis::{EnhancedAnalysis, IntelligentAnalysis, LlmMetadata};
pub use enhancer::{EnhancerConfig, InsightEnhancer};
pub use insight::{StructuredInsight, PARSE_FAILED_SENTINEL};
pub use parse::{parse_insight, parse_smart_money, ParseError};
pub use prompts::PromptLoader;
pub use smart_money::{SmartMoneyAnalyzer, SmartMoneyData, SmartMoneyInsight};
