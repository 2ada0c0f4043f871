use super::types::{AnthropicMessage, ResponseContentBlock};
use crate::message::{ChatMessage, ChatRole};

/// Convert our messages to Anthropic format, returning the system prompt separately
///
/// Every system message is lifted out of the list and joined with a blank
/// line into the top-level `system` field.
pub(crate) fn convert_messages(
    messages: &[ChatMessage],
) -> (Option<String>, Vec<AnthropicMessage<'_>>) {
    let mut system_parts = Vec::new();
    let mut anthropic_messages = Vec::new();

    for msg in messages {
        match msg.role {
            ChatRole::System => {
                if !msg.content.is_empty() {
                    system_parts.push(msg.content.as_str());
                }
            }
            ChatRole::User | ChatRole::Assistant => {
                anthropic_messages.push(AnthropicMessage {
                    role: msg.role.as_str(),
                    content: &msg.content,
                });
            }
        }
    }

    let system_message = if system_parts.is_empty() {
        None
    } else {
        Some(system_parts.join("\n\n"))
    };

    (system_message, anthropic_messages)
}

/// Concatenate every text block
pub(crate) fn collect_text(blocks: &[ResponseContentBlock]) -> String {
    blocks
        .iter()
        .filter_map(|block| match block {
            ResponseContentBlock::Text { text } => Some(text.as_str()),
            ResponseContentBlock::Other => None,
        })
        .collect()
}
