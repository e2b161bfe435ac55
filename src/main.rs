//! Triage - search closed helpdesk tickets and print their threads.
//!
//! This binary searches closed tickets whose description contains the
//! given keyword and prints each ticket with its comment thread.
//!
//! # Configuration
//!
//! Set the following environment variables (or use a `.env` file):
//!
//! - `ZENDESK_DOMAIN`: Account subdomain
//! - `ZENDESK_EMAIL`: Account email the API token belongs to
//! - `ZENDESK_API_TOKEN`: API token for authentication
//!
//! # Usage
//!
//! ```bash
//! triage password
//! ```

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, EnvFilter};

use triage::config::Config;
use triage::services::TicketReader;
use triage::zendesk_client::ZendeskClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (ignore errors if not found)
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout is reserved for results
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("triage=info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let keyword = std::env::args()
        .nth(1)
        .context("usage: triage <keyword>")?;

    let config = Config::from_env().context("Failed to load configuration")?;

    tracing::debug!(domain = %config.domain, "configuration loaded");

    let client = ZendeskClient::new(&config).context("Failed to create Zendesk client")?;

    let tickets = client
        .search_closed(&keyword)
        .await
        .context("Ticket search failed")?;

    if tickets.is_empty() {
        println!("No closed tickets matching {:?}", keyword);
        return Ok(());
    }

    for ticket in tickets {
        println!(
            "#{} [{}] {}",
            ticket.id,
            ticket.display_status(),
            ticket.display_subject()
        );

        for comment in client.list_comments_or_empty(ticket.id).await {
            println!("  - {}", comment.display_body());
        }
    }

    Ok(())
}
