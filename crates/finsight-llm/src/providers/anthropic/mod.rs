//! Anthropic - Claude messages API
//!
//! This module implements the Anthropic provider using reqwest.

/// Message conversion utilities
pub mod convert;
/// Provider implementation
pub mod provider;
/// API types
pub mod types;


pub use provider::AnthropicProvider;
pub use types::API_VERSION;
