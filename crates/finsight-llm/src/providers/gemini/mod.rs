//! Google Gemini - generateContent API provider
//!
//! The API key is sent as a query parameter. Gemini has no system role, so
//! system text is folded into the first user turn.

mod convert;
mod provider;
mod types;


pub use provider::GeminiProvider;
pub use types::{TOP_K, TOP_P};
