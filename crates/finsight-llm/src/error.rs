//! Error types for finsight-llm

use thiserror::Error;

/// Chat call error type
///
/// Every variant is a synchronous rejection carrying a human-readable message.
/// This layer never retries; the caller decides what to do with the failure.
#[derive(Debug, Error)]
pub enum Error {
    /// Provider configuration is invalid (raised before any network call)
    #[error("provider not configured: {0}")]
    NotConfigured(String),

    /// Transport failure (connect, DNS, body read)
    #[error("network error: {0}")]
    Network(String),

    /// Transport failure because the per-request timeout elapsed
    #[error("timeout after {0}ms")]
    Timeout(u64),

    /// Non-success HTTP status from the vendor
    #[error("{provider} API error ({status}): {message}")]
    Api {
        /// Provider name
        provider: String,
        /// HTTP status code
        status: u16,
        /// Message from the vendor error envelope, or a generic fallback
        message: String,
    },

    /// Body is not valid JSON or not the expected shape
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Vendor answered successfully but produced no usable content
    #[error("no response from {0}")]
    NoResponse(String),
}

impl Error {
    /// Whether the failure happened before a response was received
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Timeout(_))
    }

    /// Whether the vendor rejected the request with an error status
    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Api { .. })
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
