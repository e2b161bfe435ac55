//! # Triage
//!
//! Triage is a client for the Zendesk helpdesk API: search tickets, read
//! comment threads, and post replies.
//!
//! ## Features
//!
//! - **Search**: fetch the first open ticket, or search closed tickets
//!   by a keyword in their description
//! - **Comments**: read a ticket's full conversation thread
//! - **Replies**: post a reply through the separately-configured reply
//!   API (bearer auth)
//! - **Error handling**: every failure is a typed error carrying the
//!   HTTP status code, never a sentinel value
//! - **Security**: API tokens are never logged or exposed in error
//!   messages
//!
//! ## Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`config`] - Configuration loading and credential presentations
//! - [`error`] - Error types with security-conscious message sanitization
//! - [`services`] - The `TicketReader` and `TicketResponder` capability
//!   traits
//! - [`zendesk_client`] - HTTP client for the Zendesk ticket API
//! - [`reply_client`] - HTTP client for the reply vendor API
//! - [`models`] - Data models for API requests and responses
//!
//! The read path and the reply path are different backends with
//! different auth schemes, so they stay behind separate traits and
//! separate clients.
//!
//! ## Configuration
//!
//! Triage requires three environment variables (a `.env` file is
//! honored):
//!
//! - `ZENDESK_DOMAIN`: Account subdomain (the `acme` in
//!   `acme.zendesk.com`)
//! - `ZENDESK_EMAIL`: Account email the API token belongs to
//! - `ZENDESK_API_TOKEN`: API token for authentication
//!
//! Optional:
//! - `REPLY_BASE_URL`: Base URL of the reply API; reply operations stay
//!   disabled while unset
//! - `RUST_LOG`: Log level (e.g., `triage=debug`)
//!
//! ## Example
//!
//! ```ignore
//! use triage::config::Config;
//! use triage::services::TicketReader;
//! use triage::zendesk_client::ZendeskClient;
//!
//! async fn example() -> Result<(), triage::error::TriageError> {
//!     let config = Config::from_env()?;
//!     let client = ZendeskClient::new(&config)?;
//!
//!     for ticket in client.search_closed("password").await? {
//!         println!("#{}: {}", ticket.id, ticket.display_subject());
//!         for comment in client.list_comments(ticket.id).await? {
//!             println!("  {}", comment.display_body());
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod models;
pub mod reply_client;
pub mod services;
pub mod zendesk_client;
