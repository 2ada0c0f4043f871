//! Response repair
//!
//! Model replies may be plain JSON, JSON inside a labeled or unlabeled code
//! fence, or JSON surrounded by prose. [`parse_insight`] turns any of these
//! into a [`StructuredInsight`] and never fails. A reply is accepted when it
//! decodes to an object carrying both mandatory sections, and is then kept
//! exactly as sent. Anything else yields the placeholder in full. There is no
//! partial merge.
//!
//! [`parse_smart_money`] is the looser variant for the smart-money schema. It
//! additionally narrows the candidate to the first `{` through the last `}`
//! and reports failure as `None`.

#[cfg(test)]
mod tests;

use crate::insight::StructuredInsight;
use crate::smart_money::SmartMoneyInsight;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use thiserror::Error;
use tracing::warn;

/// Top-level keys a reply must carry to be accepted
pub const MANDATORY_KEYS: [&str; 2] = ["macroEconomicInsights", "strategicRecommendations"];

static JSON_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```json\s*(.*?)\s*```").expect("json fence pattern"));

static ANY_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```\s*(.*?)\s*```").expect("fence pattern"));

/// Why a reply was rejected
#[derive(Debug, Error)]
pub enum ParseError {
    /// No `{ ... }` span in the candidate
    #[error("no JSON object found in response")]
    NoJsonObject,

    /// Candidate is not valid JSON, or does not fit the smart-money schema
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Candidate is JSON but not an object
    #[error("response is not a JSON object")]
    NotAnObject,

    /// A mandatory top-level key is absent or not an object
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// Locate the JSON candidate in a model reply
///
/// A ```` ```json ```` fence wins, then any fence, then the whole text.
#[must_use]
pub fn extract_json_candidate(text: &str) -> &str {
    JSON_FENCE
        .captures(text)
        .or_else(|| ANY_FENCE.captures(text))
        .and_then(|caps| caps.get(1))
        .map_or(text, |m| m.as_str())
        .trim()
}

/// Narrow a candidate to the span from the first `{` to the last `}`
#[must_use]
pub fn narrow_to_object(candidate: &str) -> Option<&str> {
    let start = candidate.find('{')?;
    let end = candidate.rfind('}')?;
    (start < end).then(|| &candidate[start..=end])
}

/// Parse a reply into an insight
///
/// Only the mandatory sections are checked. Optional sections and nested
/// fields are kept verbatim whatever their shape.
///
/// # Errors
/// Returns a [`ParseError`] describing the first check that failed.
pub fn try_parse_insight(text: &str) -> Result<StructuredInsight, ParseError> {
    let value: Value = serde_json::from_str(extract_json_candidate(text))?;

    let Value::Object(document) = value else {
        return Err(ParseError::NotAnObject);
    };
    for key in MANDATORY_KEYS {
        if !document.get(key).is_some_and(Value::is_object) {
            return Err(ParseError::MissingField(key));
        }
    }

    Ok(StructuredInsight::accepted(document))
}

/// Parse a reply into an insight, substituting the placeholder on any failure
#[must_use]
pub fn parse_insight(text: &str) -> StructuredInsight {
    match try_parse_insight(text) {
        Ok(insight) => insight,
        Err(e) => {
            warn!(error = %e, "Failed to parse LLM insight, using placeholder");
            StructuredInsight::placeholder(text)
        }
    }
}

/// Parse a smart-money reply
///
/// # Errors
/// Returns a [`ParseError`] when no object can be extracted or decoded.
pub fn try_parse_smart_money(text: &str) -> Result<SmartMoneyInsight, ParseError> {
    let candidate = narrow_to_object(extract_json_candidate(text)).ok_or(ParseError::NoJsonObject)?;
    Ok(serde_json::from_str(candidate)?)
}

/// Parse a smart-money reply, `None` on any failure
#[must_use]
pub fn parse_smart_money(text: &str) -> Option<SmartMoneyInsight> {
    match try_parse_smart_money(text) {
        Ok(insight) => Some(insight),
        Err(e) => {
            warn!(error = %e, "Failed to parse smart-money response");
            None
        }
    }
}
