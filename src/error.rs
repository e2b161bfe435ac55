//! Error types for the triage client.
//!
//! This module defines `TriageError`, the unified error type used by both
//! the Zendesk client and the reply client, so callers always get a tagged
//! result instead of a sentinel value.
//!
//! # Security
//!
//! All error messages are sanitized to ensure API tokens are never leaked
//! in logs or error responses. Use `sanitize_message()` when constructing
//! error messages from external sources.

use std::time::Duration;

use thiserror::Error;

/// Unified error type for all triage operations.
///
/// Each variant provides specific context about the failure, enabling
/// meaningful error messages without leaking sensitive information
/// like API tokens. Every HTTP-level failure carries its status code.
#[derive(Error, Debug)]
pub enum TriageError {
    /// Configuration error - missing or invalid environment variables.
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP request failed during transmission.
    #[error("HTTP request failed: {0}")]
    Http(#[source] reqwest::Error),

    /// HTTP client initialization failed.
    #[error("HTTP client error: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// HTTP response returned a non-success status code.
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// The HTTP status code returned.
        status: reqwest::StatusCode,
        /// The response body, potentially containing error details.
        body: String,
    },

    /// Request timed out.
    #[error("request timed out after {duration:?} - the server may be slow or unreachable")]
    Timeout {
        /// How long we waited before timing out.
        duration: Duration,
        /// The operation that timed out.
        operation: String,
    },

    /// Authentication was rejected - likely a bad email/token pair.
    #[error("authentication rejected ({status}) - check ZENDESK_EMAIL and ZENDESK_API_TOKEN")]
    Authentication {
        /// The rejecting status code (401 or 403).
        status: reqwest::StatusCode,
    },

    /// The referenced ticket does not exist.
    #[error("ticket {ticket_id} not found (HTTP 404)")]
    TicketNotFound {
        /// The id of the ticket that was not found.
        ticket_id: u64,
    },

    /// JSON serialization or deserialization failed.
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Input validation failed.
    #[error("validation error: {0}")]
    Validation(String),

    /// The reply API has no configured endpoint.
    #[error("reply API not configured - set REPLY_BASE_URL to enable ticket replies")]
    ReplyNotConfigured,
}

impl TriageError {
    /// Creates a configuration error for a missing environment variable.
    pub fn missing_env(var_name: &str) -> Self {
        TriageError::Config(format!(
            "missing required environment variable: {}",
            var_name
        ))
    }

    /// Creates a configuration error for an invalid value.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        TriageError::Config(message.into())
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        TriageError::Validation(message.into())
    }

    /// Creates a not found error for a ticket id.
    pub fn ticket_not_found(ticket_id: u64) -> Self {
        TriageError::TicketNotFound { ticket_id }
    }

    /// Creates a timeout error.
    pub fn timeout(duration: Duration, operation: impl Into<String>) -> Self {
        TriageError::Timeout {
            duration,
            operation: operation.into(),
        }
    }

    /// Returns the HTTP status code this error carries, if any.
    #[must_use]
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            TriageError::HttpStatus { status, .. } => Some(*status),
            TriageError::Authentication { status } => Some(*status),
            TriageError::TicketNotFound { .. } => Some(reqwest::StatusCode::NOT_FOUND),
            TriageError::Http(e) => e.status(),
            _ => None,
        }
    }

    /// Classifies a non-success HTTP status into an error variant.
    ///
    /// 401 and 403 become [`TriageError::Authentication`]; everything
    /// else keeps the status and (already sanitized) body.
    #[must_use]
    pub fn from_status(status: reqwest::StatusCode, body: String) -> Self {
        match status {
            reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
                TriageError::Authentication { status }
            }
            _ => TriageError::HttpStatus { status, body },
        }
    }

    /// Sanitizes an error message to remove any occurrence of the API token.
    ///
    /// This is critical for security - API tokens must never appear in logs,
    /// error messages, or responses to users.
    ///
    /// # Arguments
    ///
    /// * `message` - The message to sanitize
    /// * `api_token` - The API token to strip from the message
    ///
    /// # Returns
    ///
    /// The message with any occurrence of the API token replaced with `[REDACTED]`
    #[must_use]
    pub fn sanitize_message(message: &str, api_token: &str) -> String {
        if api_token.is_empty() {
            return message.to_string();
        }
        message.replace(api_token, "[REDACTED]")
    }

    /// Creates a sanitized version of this error's display message.
    ///
    /// Use this when you need to include error details in logs or responses
    /// and want to ensure no sensitive data is leaked.
    #[must_use]
    pub fn sanitized_display(&self, api_token: &str) -> String {
        Self::sanitize_message(&self.to_string(), api_token)
    }
}
