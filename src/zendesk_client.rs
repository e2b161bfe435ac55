//! HTTP client for the Zendesk ticket API.
//!
//! This module provides the `ZendeskClient` struct for making
//! authenticated requests to the Zendesk REST API: searching tickets and
//! fetching comment threads.
//!
//! # Authentication
//!
//! Search requests carry a precomputed `Basic base64("{email}/token:
//! {token}")` header; the comments endpoint presents the same token as a
//! `("{email}/token", token)` username/password pair. Both forms are
//! produced by [`Config`].
//!
//! # Security
//!
//! The API token is never logged. All error messages are sanitized
//! before logging.

use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, StatusCode};

use crate::config::Config;
use crate::error::TriageError;
use crate::models::{Comment, CommentsResponse, SearchResponse, Ticket};
use crate::services::TicketReader;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Accept header value for all API calls.
const JSON_ACCEPT: &str = "application/json";

/// Maximum length for HTTP error response bodies kept in error values.
const MAX_ERROR_BODY_LEN: usize = 500;

/// HTTP client for the Zendesk ticket API.
///
/// Handles authentication, request formatting, and response parsing for
/// the search and comment operations. Each call is a single stateless
/// round trip; the client is cheap to clone and safe to share across
/// tasks.
///
/// # Example
///
/// ```ignore
/// let config = Config::from_env()?;
/// let client = ZendeskClient::new(&config)?;
///
/// let tickets = client.search_closed("password").await?;
/// ```
#[derive(Clone)]
pub struct ZendeskClient {
    /// The underlying HTTP client (cloning is cheap).
    http: Client,

    /// Base URL for the ticket API (e.g., `https://acme.zendesk.com/api/v2`).
    base_url: String,

    /// Precomputed `Authorization` header for search calls.
    authorization: String,

    /// Username half of the pair presentation (`{email}/token`).
    basic_user: String,

    /// API token for the pair presentation and error sanitization.
    /// SECURITY: Never log this value!
    api_token: String,
}

impl ZendeskClient {
    /// Creates a new client from configuration, targeting the account's
    /// `https://{domain}.zendesk.com/api/v2` endpoint.
    ///
    /// # Errors
    ///
    /// Returns `TriageError::HttpClient` if the HTTP client fails to
    /// initialize.
    pub fn new(config: &Config) -> Result<Self, TriageError> {
        let base_url = format!("https://{}.zendesk.com/api/v2", config.domain);
        Self::with_base_url(config, base_url)
    }

    /// Creates a client against an explicit base URL.
    ///
    /// Useful for pointing the client at a stub server or an HTTP proxy;
    /// the URL should include the API version path (e.g.
    /// `https://host/api/v2`).
    pub fn with_base_url(
        config: &Config,
        base_url: impl Into<String>,
    ) -> Result<Self, TriageError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(TriageError::HttpClient)?;

        let (basic_user, api_token) = config.basic_pair();

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            authorization: config.basic_authorization(),
            basic_user,
            api_token,
        })
    }

    /// Runs a ticket search and returns the full response envelope.
    ///
    /// # Arguments
    ///
    /// * `query` - The search terms to send
    ///
    /// # Errors
    ///
    /// Returns an error carrying the HTTP status code on any non-success
    /// response.
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResponse, TriageError> {
        let url = format!("{}/search.json", self.base_url);
        let rendered = query.render();

        tracing::debug!(query = %rendered, "searching tickets");

        let response = self
            .http
            .get(&url)
            .header(AUTHORIZATION, &self.authorization)
            .header(ACCEPT, JSON_ACCEPT)
            .query(&[("query", rendered.as_str())])
            .send()
            .await
            .map_err(|e| self.transport_error(e, "GET /search.json"))?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.handle_http_error(status, response).await);
        }

        let body = response.text().await.map_err(TriageError::Http)?;
        tracing::trace!(body = %body, "search response");

        let parsed: SearchResponse = serde_json::from_str(&body)?;
        Ok(parsed)
    }

    /// Fetches the comment thread of a ticket, swallowing failures.
    ///
    /// Logs the failure and returns an empty list instead of an error,
    /// for callers that treat a missing thread the same as an empty one.
    /// Use [`TicketReader::list_comments`] to observe the failure.
    pub async fn list_comments_or_empty(&self, ticket_id: u64) -> Vec<Comment> {
        match self.list_comments(ticket_id).await {
            Ok(comments) => comments,
            Err(e) => {
                tracing::warn!(
                    ticket_id,
                    error = %e.sanitized_display(&self.api_token),
                    "failed to fetch ticket comments"
                );
                Vec::new()
            }
        }
    }

    /// Returns the web URL for viewing a ticket in the agent UI.
    pub fn ticket_web_url(&self, ticket_id: u64) -> String {
        let web_base = self.base_url.trim_end_matches("/api/v2");
        format!("{}/agent/tickets/{}", web_base, ticket_id)
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
        // Sanitize the body to ensure no API token leakage
        let body = TriageError::sanitize_message(&body, &self.api_token);

        tracing::warn!(status = %status, body = %body, "API request failed");

        // Truncate to keep error values readable
        let body = if body.len() > MAX_ERROR_BODY_LEN {
            format!("{}...[truncated]", &body[..MAX_ERROR_BODY_LEN])
        } else {
            body
        };

        TriageError::from_status(status, body)
    }
}

#[async_trait::async_trait]
impl TicketReader for ZendeskClient {
    async fn first_open_ticket(&self) -> Result<Option<Ticket>, TriageError> {
        let query = SearchQuery::new().with_status("open").with_type("ticket");
        let response = self.search(&query).await?;

        if response.results.len() > 1 {
            tracing::debug!(
                total = response.results.len(),
                "multiple open tickets, returning the first"
            );
        }

        Ok(response.results.into_iter().next())
    }

    async fn search_closed(&self, keyword: &str) -> Result<Vec<Ticket>, TriageError> {
        let query = SearchQuery::new()
            .with_status("closed")
            .with_type("ticket")
            .with_description_phrase(keyword);

        Ok(self.search(&query).await?.results)
    }

    async fn list_comments(&self, ticket_id: u64) -> Result<Vec<Comment>, TriageError> {
        let url = format!("{}/tickets/{}/comments.json", self.base_url, ticket_id);

        tracing::debug!(ticket_id, "fetching ticket comments");

        let response = self
            .http
            .get(&url)
            .basic_auth(&self.basic_user, Some(&self.api_token))
            .header(ACCEPT, JSON_ACCEPT)
            .send()
            .await
            .map_err(|e| self.transport_error(e, "GET /tickets/{id}/comments.json"))?;

        let status = response.status();
        if !status.is_success() {
            let err = self.handle_http_error(status, response).await;
            // Attach the ticket id to plain 404s
            return Err(match err {
                TriageError::HttpStatus {
                    status: StatusCode::NOT_FOUND,
                    ..
                } => TriageError::ticket_not_found(ticket_id),
                other => other,
            });
        }

        let body = response.text().await.map_err(TriageError::Http)?;
        tracing::trace!(body = %body, "comments response");

        let parsed: CommentsResponse = serde_json::from_str(&body)?;
        Ok(parsed.comments)
    }
}

/// Builder for Zendesk search queries.
///
/// Renders terms in the `field:value` search syntax, e.g.
/// `status:closed type:ticket description:"printer"`.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    /// Rendered terms, joined with spaces.
    terms: Vec<String>,
}

impl SearchQuery {
    /// Creates an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters by ticket status (e.g., "open", "closed").
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.terms.push(format!("status:{}", status.into()));
        self
    }

    /// Filters by result type (e.g., "ticket", "user").
    pub fn with_type(mut self, kind: impl Into<String>) -> Self {
        self.terms.push(format!("type:{}", kind.into()));
        self
    }

    /// Filters by a quoted phrase in the ticket description.
    ///
    /// Embedded `"` characters are stripped: they would terminate the
    /// phrase early and let the remainder be parsed as query operators.
    pub fn with_description_phrase(mut self, phrase: impl Into<String>) -> Self {
        let phrase = phrase.into();
        let cleaned: String = phrase.chars().filter(|c| *c != '"').collect();
        self.terms
            .push(format!("description:\"{}\"", cleaned.trim()));
        self
    }

    /// Renders the query string to send to the search endpoint.
    pub fn render(&self) -> String {
        self.terms.join(" ")
    }
}
