//! Chat result types

use serde::{Deserialize, Serialize};

/// Token usage information
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Prompt tokens
    pub prompt_tokens: u32,
    /// Completion tokens
    pub completion_tokens: u32,
    /// Total tokens
    pub total_tokens: u32,
    /// Computed by the local character heuristic instead of reported by the vendor
    #[serde(default)]
    pub estimated: bool,
}

impl TokenUsage {
    /// Usage as reported by a vendor
    #[must_use]
    pub fn reported(prompt_tokens: u32, completion_tokens: u32, total_tokens: u32) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens,
            estimated: false,
        }
    }

    /// Usage estimated locally; total is the sum of both parts
    #[must_use]
    pub fn estimated(prompt_tokens: u32, completion_tokens: u32) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens.saturating_add(completion_tokens),
            estimated: true,
        }
    }
}

/// Result of one chat call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResult {
    /// Generated content (never empty on success)
    pub content: String,
    /// Token usage, when reported or estimated
    pub usage: Option<TokenUsage>,
    /// Model echoed back by the vendor
    pub model: String,
    /// Stop / finish reason
    pub finish_reason: Option<String>,
}
