//! HTTP client for the reply vendor API.
//!
//! Replies go to a different backend than ticket reads, with a different
//! credential presentation: the same API token, sent as a bearer token.
//! The endpoint is opt-in via configuration; without `REPLY_BASE_URL`
//! the client cannot be constructed and replies fail with a structured
//! error instead of reaching an unknown host.

use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, StatusCode};

use crate::config::Config;
use crate::error::TriageError;
use crate::models::{ReplyReceipt, ReplyRequest};
use crate::services::TicketResponder;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum length for HTTP error response bodies kept in error values.
const MAX_ERROR_BODY_LEN: usize = 500;

/// HTTP client for posting replies to tickets.
///
/// # Example
///
/// ```ignore
/// let config = Config::from_env()?;
/// let responder = ReplyClient::new(&config)?;
///
/// let receipt = responder.send_reply(35436, "On it!").await?;
/// ```
#[derive(Clone)]
pub struct ReplyClient {
    /// The underlying HTTP client (cloning is cheap).
    http: Client,

    /// Base URL of the reply API, normalized to end with `/v1`.
    base_url: String,

    /// Precomputed bearer `Authorization` header.
    authorization: String,

    /// API token, kept for error sanitization only.
    /// SECURITY: Never log this value!
    api_token: String,
}

impl std::fmt::Debug for ReplyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReplyClient")
            .field("base_url", &self.base_url)
            .field("authorization", &"<redacted>")
            .field("api_token", &"<redacted>")
            .finish()
    }
}

impl ReplyClient {
    /// Creates a reply client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `TriageError::ReplyNotConfigured` when no reply base URL
    /// is set, and `TriageError::HttpClient` if the HTTP client fails to
    /// initialize.
    pub fn new(config: &Config) -> Result<Self, TriageError> {
        let base_url = config
            .reply_base_url
            .as_deref()
            .ok_or(TriageError::ReplyNotConfigured)?;

        let http = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(TriageError::HttpClient)?;

        Ok(Self {
            http,
            base_url: Self::normalize_base_url(base_url),
            authorization: config.bearer_authorization(),
            api_token: config.api_token().to_string(),
        })
    }

    /// Normalizes the base URL to ensure it includes the API version path.
    fn normalize_base_url(url: &str) -> String {
        let url = url.trim_end_matches('/');
        if url.ends_with("/v1") {
            url.to_string()
        } else {
            format!("{}/v1", url)
        }
    }

    /// Converts a transmission failure into an error value.
    fn transport_error(&self, e: reqwest::Error, operation: &str) -> TriageError {
        if e.is_timeout() {
            return TriageError::timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS), operation);
        }
        TriageError::Http(e)
    }

    /// Handles HTTP-level errors, logging the response body.
    async fn handle_http_error(
        &self,
        status: StatusCode,
        response: reqwest::Response,
    ) -> TriageError {
        let body = response.text().await.unwrap_or_default();
        let body = TriageError::sanitize_message(&body, &self.api_token);

        tracing::warn!(status = %status, body = %body, "reply API request failed");

        let body = if body.len() > MAX_ERROR_BODY_LEN {
            format!("{}...[truncated]", &body[..MAX_ERROR_BODY_LEN])
        } else {
            body
        };

        TriageError::from_status(status, body)
    }
}

#[async_trait::async_trait]
impl TicketResponder for ReplyClient {
    async fn send_reply(
        &self,
        ticket_id: u64,
        message: &str,
    ) -> Result<ReplyReceipt, TriageError> {
        if message.trim().is_empty() {
            return Err(TriageError::validation("reply message must not be empty"));
        }

        let url = format!("{}/tickets/{}/reply", self.base_url, ticket_id);

        tracing::debug!(ticket_id, "posting ticket reply");

        let response = self
            .http
            .post(&url)
            .header(AUTHORIZATION, &self.authorization)
            .header(ACCEPT, "application/json")
            .json(&ReplyRequest::new(message))
            .send()
            .await
            .map_err(|e| self.transport_error(e, "POST /tickets/{id}/reply"))?;

        let status = response.status();
        if !status.is_success() {
            let err = self.handle_http_error(status, response).await;
            return Err(match err {
                TriageError::HttpStatus {
                    status: StatusCode::NOT_FOUND,
                    ..
                } => TriageError::ticket_not_found(ticket_id),
                other => other,
            });
        }

        let body = response.text().await.map_err(TriageError::Http)?;
        tracing::trace!(body = %body, "reply response");

        let receipt: ReplyReceipt = serde_json::from_str(&body)?;
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(
            ReplyClient::normalize_base_url("https://api.example.com"),
            "https://api.example.com/v1"
        );
        assert_eq!(
            ReplyClient::normalize_base_url("https://api.example.com/"),
            "https://api.example.com/v1"
        );
        assert_eq!(
            ReplyClient::normalize_base_url("https://api.example.com/v1"),
            "https://api.example.com/v1"
        );
        assert_eq!(
            ReplyClient::normalize_base_url("https://api.example.com/v1/"),
            "https://api.example.com/v1"
        );
    }

    #[test]
    fn test_new_without_reply_url_fails() {
        let config = Config::new("acme", "agent@example.com", "secret123").unwrap();
        let err = ReplyClient::new(&config).unwrap_err();
        assert!(matches!(err, TriageError::ReplyNotConfigured));
    }

    #[test]
    fn test_new_with_reply_url() {
        let config = Config::new("acme", "agent@example.com", "secret123")
            .unwrap()
            .with_reply_base_url("https://api.example.com")
            .unwrap();
        let client = ReplyClient::new(&config).unwrap();
        assert_eq!(client.base_url, "https://api.example.com/v1");
        assert_eq!(client.authorization, "Bearer secret123");
    }
}
