//! Finsight LLM - Chat provider abstraction
//!
//! This crate presents one capability, [`ChatProvider::chat`], uniformly across
//! heterogeneous vendor wire protocols:
//! - OpenAI: bearer auth, flat messages array
//! - DeepSeek: OpenAI-compatible client with its own endpoint and price table
//! - Anthropic: `x-api-key` auth, system prompt as a top-level field
//! - Google Gemini: API key in the query string, `contents/parts` shape
//! - Ollama: local inference, no credential, locally estimated usage
//!
//! Token estimation and cost lookup are pure functions usable without any
//! network call.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod completion;
pub mod config;
pub mod cost;
pub mod error;
pub mod message;
pub mod mock;
pub mod provider;
pub mod providers;
pub mod token;
pub mod transport;
pub mod util;

pub use completion::{ChatResult, TokenUsage};
pub use config::{ProviderConfig, ProviderKind};
pub use cost::{estimate_cost, price_table, ModelPricing, PriceTable};
pub use error::{Error, Result};
pub use message::{ChatMessage, ChatRole};
pub use mock::MockProvider;
pub use provider::{create_provider, ChatProvider};
pub use token::{estimate_conversation_tokens, estimate_tokens};

// Re-export provider types
pub use providers::anthropic::AnthropicProvider;
pub use providers::gemini::GeminiProvider;
pub use providers::ollama::OllamaProvider;
pub use providers::openai::{OpenAiCompatible, OpenAiProvider};
