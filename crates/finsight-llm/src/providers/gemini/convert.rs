use super::types::{CandidateContent, GeminiContent, RequestPart};
use crate::message::{ChatMessage, ChatRole};

/// Convert our messages to Gemini `contents`
///
/// Gemini has no system role. System text is prefixed to the first user turn
/// (blank-line separated) or, when the conversation has no user turn, sent as
/// a leading user turn of its own. Assistant turns become `model` turns.
pub(crate) fn convert_messages(messages: &[ChatMessage]) -> Vec<GeminiContent> {
    let system: Vec<&str> = messages
        .iter()
        .filter(|m| m.role == ChatRole::System && !m.content.is_empty())
        .map(|m| m.content.as_str())
        .collect();
    let mut system = (!system.is_empty()).then(|| system.join("\n\n"));

    let mut contents = Vec::with_capacity(messages.len() + 1);
    for msg in messages {
        let (role, text) = match msg.role {
            ChatRole::System => continue,
            ChatRole::Assistant => ("model", msg.content.clone()),
            ChatRole::User => match system.take() {
                Some(prefix) => ("user", format!("{prefix}\n\n{}", msg.content)),
                None => ("user", msg.content.clone()),
            },
        };
        contents.push(GeminiContent {
            role,
            parts: vec![RequestPart { text }],
        });
    }

    if let Some(text) = system {
        contents.insert(
            0,
            GeminiContent {
                role: "user",
                parts: vec![RequestPart { text }],
            },
        );
    }

    contents
}

/// Concatenate the text of every part
pub(crate) fn collect_text(content: Option<&CandidateContent>) -> String {
    content
        .map(|c| {
            c.parts
                .iter()
                .filter_map(|p| p.text.as_deref())
                .collect::<String>()
        })
        .unwrap_or_default()
}
