//! Local token estimation
//!
//! Used only when a vendor does not report usage. The heuristic splits the
//! text into CJK ideographs (about 2 chars per token) and everything else
//! (about 4 chars per token), adds both quotients and takes the ceiling.

use crate::message::ChatMessage;

/// Characters per token for CJK ideographs
const CJK_CHARS_PER_TOKEN: f64 = 2.0;

/// Characters per token for everything else
const OTHER_CHARS_PER_TOKEN: f64 = 4.0;

fn is_cjk(c: char) -> bool {
    matches!(c, '\u{4E00}'..='\u{9FFF}')
}

/// Estimate the number of tokens in `text`
#[must_use]
pub fn estimate_tokens(text: &str) -> u32 {
    let (cjk, other) = text.chars().fold((0u64, 0u64), |(cjk, other), c| {
        if is_cjk(c) {
            (cjk + 1, other)
        } else {
            (cjk, other + 1)
        }
    });

    let tokens = other as f64 / OTHER_CHARS_PER_TOKEN + cjk as f64 / CJK_CHARS_PER_TOKEN;
    tokens.ceil() as u32
}

/// Estimate the prompt tokens of a conversation
#[must_use]
pub fn estimate_conversation_tokens(messages: &[ChatMessage]) -> u32 {
    messages
        .iter()
        .map(|m| estimate_tokens(&m.content))
        .fold(0u32, u32::saturating_add)
}
