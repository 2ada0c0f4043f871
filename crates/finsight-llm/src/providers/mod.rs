//! Vendor clients
//!
//! Each client composes a shared [`HttpTransport`](crate::transport::HttpTransport)
//! with its own request builder and response mapping.

/// Anthropic messages API
pub mod anthropic;
/// Google Gemini generateContent
pub mod gemini;
/// Ollama local provider
pub mod ollama;
/// OpenAI chat completions (also DeepSeek)
pub mod openai;
