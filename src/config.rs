//! Configuration management for the triage client.
//!
//! This module handles loading configuration from environment variables,
//! with validation to ensure all required values are present. A `Config`
//! can also be built explicitly with [`Config::new`], so callers can run
//! against several helpdesk tenants in one process or inject test values.

use std::env;

use base64::prelude::{Engine as _, BASE64_STANDARD};
use url::Url;

use crate::error::TriageError;

/// Configuration for the Zendesk and reply APIs.
///
/// The account email, API token, and account subdomain are required.
/// The API token is stored but never logged or exposed in error messages.
#[derive(Clone)]
pub struct Config {
    /// Zendesk account subdomain (the `acme` in `acme.zendesk.com`).
    pub domain: String,

    /// Account email the API token belongs to.
    pub email: String,

    /// API token for authentication.
    /// This value must never be logged or included in error messages.
    api_token: String,

    /// Base URL of the reply API, when replies are enabled.
    pub reply_base_url: Option<String>,
}

impl Config {
    /// Builds a configuration from explicit values.
    ///
    /// # Errors
    ///
    /// Returns `TriageError::Config` if any value fails validation.
    pub fn new(
        domain: impl Into<String>,
        email: impl Into<String>,
        api_token: impl Into<String>,
    ) -> Result<Self, TriageError> {
        let domain = Self::validate_domain(domain.into())?;
        let email = Self::validate_email(email.into())?;
        let api_token = api_token.into();
        Self::validate_api_token(&api_token)?;

        Ok(Config {
            domain,
            email,
            api_token,
            reply_base_url: None,
        })
    }

    /// Loads configuration from environment variables.
    ///
    /// # Required Environment Variables
    ///
    /// - `ZENDESK_DOMAIN`: The account subdomain (e.g., `acme`)
    /// - `ZENDESK_EMAIL`: The account email the token belongs to
    /// - `ZENDESK_API_TOKEN`: The API token for authentication
    ///
    /// # Optional Environment Variables
    ///
    /// - `REPLY_BASE_URL`: Base URL of the reply API. Replies stay
    ///   disabled while this is unset.
    ///
    /// # Errors
    ///
    /// Returns `TriageError::Config` if any required variable is missing
    /// or if values fail validation.
    ///
    /// # Example
    ///
    /// ```ignore
    /// dotenvy::dotenv().ok();
    /// let config = Config::from_env()?;
    /// ```
    pub fn from_env() -> Result<Self, TriageError> {
        let domain = Self::get_required_env("ZENDESK_DOMAIN")?;
        let email = Self::get_required_env("ZENDESK_EMAIL")?;
        let api_token = Self::get_required_env("ZENDESK_API_TOKEN")?;

        let mut config = Self::new(domain, email, api_token)?;

        if let Ok(reply_base_url) = env::var("REPLY_BASE_URL") {
            if !reply_base_url.trim().is_empty() {
                config = config.with_reply_base_url(reply_base_url)?;
            }
        }

        Ok(config)
    }

    /// Sets the reply API base URL, enabling reply operations.
    ///
    /// # Errors
    ///
    /// Returns `TriageError::Config` if the URL is not a valid http(s) URL.
    pub fn with_reply_base_url(
        mut self,
        url: impl Into<String>,
    ) -> Result<Self, TriageError> {
        let url = Self::validate_reply_base_url(url.into())?;
        self.reply_base_url = Some(url);
        Ok(self)
    }

    /// Returns a reference to the API token.
    ///
    /// Intended for request signing and error-message sanitization,
    /// never for logging.
    pub fn api_token(&self) -> &str {
        &self.api_token
    }

    /// Returns the `Authorization` header value for Zendesk search calls.
    ///
    /// Zendesk token auth presents the credential as
    /// `Basic base64("{email}/token:{token}")`.
    pub fn basic_authorization(&self) -> String {
        let credentials = format!("{}/token:{}", self.email, self.api_token);
        let encoded = BASE64_STANDARD.encode(credentials);
        format!("Basic {encoded}")
    }

    /// Returns the username/password pair form of the same credential.
    ///
    /// The comments endpoint authenticates with the pair
    /// `("{email}/token", token)` rather than a precomputed header.
    pub fn basic_pair(&self) -> (String, String) {
        (format!("{}/token", self.email), self.api_token.clone())
    }

    /// Returns the `Authorization` header value for the reply API.
    pub fn bearer_authorization(&self) -> String {
        format!("Bearer {}", self.api_token)
    }

    /// Gets a required environment variable, returning an error if missing or empty.
    fn get_required_env(name: &str) -> Result<String, TriageError> {
        env::var(name)
            .map_err(|_| TriageError::missing_env(name))
            .and_then(|value| {
                if value.trim().is_empty() {
                    Err(TriageError::missing_env(name))
                } else {
                    Ok(value)
                }
            })
    }

    /// Validates the account subdomain.
    ///
    /// The subdomain is interpolated into the request URL, so it must be
    /// a bare DNS label. Dots, slashes, and other separators would let a
    /// crafted value point the client at a different host.
    fn validate_domain(domain: String) -> Result<String, TriageError> {
        let domain = domain.trim().to_lowercase();

        if domain.is_empty() {
            return Err(TriageError::invalid_config(
                "ZENDESK_DOMAIN must not be empty",
            ));
        }

        if !domain
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-')
        {
            return Err(TriageError::invalid_config(
                "ZENDESK_DOMAIN must be a bare subdomain (letters, digits, and hyphens only)",
            ));
        }

        Ok(domain)
    }

    /// Validates the account email.
    fn validate_email(email: String) -> Result<String, TriageError> {
        let email = email.trim().to_string();

        if email.is_empty() || !email.contains('@') {
            return Err(TriageError::invalid_config(
                "ZENDESK_EMAIL must be an email address",
            ));
        }

        Ok(email)
    }

    /// Validates the API token is not a placeholder value.
    fn validate_api_token(token: &str) -> Result<(), TriageError> {
        if token.trim().is_empty() {
            return Err(TriageError::invalid_config(
                "ZENDESK_API_TOKEN must not be empty",
            ));
        }

        let token_lower = token.to_lowercase();
        let placeholder_patterns = [
            "your_api_token",
            "your_token",
            "placeholder",
            "xxx",
            "changeme",
        ];

        for pattern in placeholder_patterns {
            if token_lower.contains(pattern) {
                return Err(TriageError::invalid_config(
                    "ZENDESK_API_TOKEN appears to be a placeholder value",
                ));
            }
        }

        Ok(())
    }

    /// Validates and normalizes the reply API base URL.
    fn validate_reply_base_url(url: String) -> Result<String, TriageError> {
        let url = url.trim().trim_end_matches('/').to_string();

        let parsed = Url::parse(&url).map_err(|e| {
            TriageError::invalid_config(format!("REPLY_BASE_URL is not a valid URL: {}", e))
        })?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(TriageError::invalid_config(
                "REPLY_BASE_URL must start with http:// or https://",
            ));
        }

        if parsed.host().is_none() {
            return Err(TriageError::invalid_config(
                "REPLY_BASE_URL must include a host",
            ));
        }

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Note: Config::from_env is exercised indirectly; tests that modify
    // process environment variables do not run reliably in parallel.

    fn test_config() -> Config {
        Config::new("acme", "agent@example.com", "secret123").unwrap()
    }

    #[test]
    fn test_basic_authorization_encoding() {
        // base64("agent@example.com/token:secret123")
        assert_eq!(
            test_config().basic_authorization(),
            "Basic YWdlbnRAZXhhbXBsZS5jb20vdG9rZW46c2VjcmV0MTIz"
        );
    }

    #[test]
    fn test_basic_pair_form() {
        let (user, pass) = test_config().basic_pair();
        assert_eq!(user, "agent@example.com/token");
        assert_eq!(pass, "secret123");
    }

    #[test]
    fn test_bearer_authorization() {
        assert_eq!(test_config().bearer_authorization(), "Bearer secret123");
    }

    #[test]
    fn test_validate_domain_normalizes_case() {
        let config = Config::new("Acme-Support", "a@b.com", "tok").unwrap();
        assert_eq!(config.domain, "acme-support");
    }

    #[test]
    fn test_validate_domain_rejects_dots() {
        assert!(Config::new("acme.zendesk.com", "a@b.com", "tok").is_err());
    }

    #[test]
    fn test_validate_domain_rejects_slashes() {
        assert!(Config::new("acme/evil", "a@b.com", "tok").is_err());
        assert!(Config::new("", "a@b.com", "tok").is_err());
    }

    #[test]
    fn test_validate_email_requires_at_sign() {
        assert!(Config::new("acme", "not-an-email", "tok").is_err());
    }

    #[test]
    fn test_validate_api_token_rejects_placeholder() {
        assert!(Config::new("acme", "a@b.com", "your_api_token_here").is_err());
    }

    #[test]
    fn test_validate_api_token_accepts_real_token() {
        assert!(Config::new("acme", "a@b.com", "abc123def456").is_ok());
    }

    #[test]
    fn test_reply_base_url_trims_trailing_slash() {
        let config = test_config()
            .with_reply_base_url("https://api.example.com/")
            .unwrap();
        assert_eq!(
            config.reply_base_url.as_deref(),
            Some("https://api.example.com")
        );
    }

    #[test]
    fn test_reply_base_url_requires_scheme() {
        assert!(test_config().with_reply_base_url("api.example.com").is_err());
        assert!(test_config()
            .with_reply_base_url("ftp://api.example.com")
            .is_err());
    }

    #[test]
    fn test_reply_base_url_unset_by_default() {
        assert!(test_config().reply_base_url.is_none());
    }
}
