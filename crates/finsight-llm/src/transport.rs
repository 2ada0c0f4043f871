//! Shared HTTP transport
//!
//! Every vendor client owns one [`HttpTransport`] and differs only in how it
//! builds the request and maps the response. The transport performs exactly
//! one POST per call and turns transport, status and body failures into the
//! crate's error taxonomy.

use crate::config::ProviderKind;
use crate::error::{Error, Result};
use crate::util::{mask_api_key, redact_secret, truncate_safe};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::debug;

/// Fallback when the vendor error body carries no usable message
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Longest remote error message surfaced to callers
const MAX_ERROR_MESSAGE_BYTES: usize = 500;

/// Pulls a human-readable message out of a vendor error body
pub type ErrorExtractor = fn(&str) -> Option<String>;

/// HTTP client bound to one vendor
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    provider: ProviderKind,
    name: &'static str,
    timeout: Duration,
    secret: String,
}

// SECURITY: Custom Debug implementation to mask the credential
impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("provider", &self.provider)
            .field("timeout", &self.timeout)
            .field("secret", &mask_api_key(&self.secret))
            .finish()
    }
}

impl HttpTransport {
    /// Create a transport with the given per-request timeout
    ///
    /// `secret` is redacted from any remote or transport error message.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(
        provider: ProviderKind,
        name: &'static str,
        timeout: Duration,
        secret: impl Into<String>,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            provider,
            name,
            timeout,
            secret: secret.into(),
        })
    }

    /// Vendor this transport talks to
    #[must_use]
    pub fn provider(&self) -> ProviderKind {
        self.provider
    }

    /// Per-request timeout
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Start a POST request
    pub fn post(&self, url: &str) -> RequestBuilder {
        self.client
            .post(url)
            .header("Content-Type", "application/json")
    }

    /// Send `body` as JSON and decode the success body as `R`
    ///
    /// # Errors
    /// - [`Error::Timeout`] when the request timed out
    /// - [`Error::Network`] for any other transport failure
    /// - [`Error::Api`] for a non-success status
    /// - [`Error::InvalidResponse`] when the success body does not decode
    pub async fn post_json<B, R>(
        &self,
        request: RequestBuilder,
        body: &B,
        extract_error: ErrorExtractor,
    ) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = request.json(body).send().await.map_err(|e| self.send_error(e))?;

        let status = response.status();
        let text = response.text().await.map_err(|e| self.send_error(e))?;

        if !status.is_success() {
            let message = extract_error(&text)
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| UNKNOWN_ERROR.to_string());
            let message = redact_secret(truncate_safe(&message, MAX_ERROR_MESSAGE_BYTES), &self.secret);
            debug!(provider = self.name, status = status.as_u16(), "Remote error response");
            return Err(Error::Api {
                provider: self.name.to_string(),
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&text).map_err(|e| {
            Error::InvalidResponse(format!("{} returned malformed body: {e}", self.name))
        })
    }

    fn send_error(&self, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            let millis = u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX);
            return Error::Timeout(millis);
        }
        // The URL may carry a query-string credential
        let message = e.without_url().to_string();
        Error::Network(redact_secret(&message, &self.secret))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorField {
    Detailed { message: Option<String> },
    Plain(String),
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: Option<ErrorField>,
}

/// `{"error": {"message": "..."}}` as sent by OpenAI, DeepSeek, Anthropic and Google
#[must_use]
pub fn nested_error_message(body: &str) -> Option<String> {
    match serde_json::from_str::<ErrorEnvelope>(body).ok()?.error? {
        ErrorField::Detailed { message } => message,
        ErrorField::Plain(_) => None,
    }
}

/// `{"error": "..."}` as sent by Ollama
#[must_use]
pub fn plain_error_message(body: &str) -> Option<String> {
    match serde_json::from_str::<ErrorEnvelope>(body).ok()?.error? {
        ErrorField::Plain(message) => Some(message),
        ErrorField::Detailed { .. } => None,
    }
}
