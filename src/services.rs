//! Capability traits for ticket operations.
//!
//! The read path (Zendesk, basic auth) and the reply path (reply vendor,
//! bearer auth) are different backends with different credential
//! presentations. Keeping them behind separate traits stops callers from
//! unifying them incorrectly, and lets tests substitute doubles for
//! either side independently.

use async_trait::async_trait;

use crate::error::TriageError;
use crate::models::{Comment, ReplyReceipt, Ticket};

/// Read-side operations against the helpdesk API.
#[async_trait]
pub trait TicketReader: Send + Sync {
    /// Fetches the oldest-listed open ticket, if any.
    ///
    /// Searches for `status:open type:ticket` and returns at most one
    /// ticket: the first search result, or `None` when the backend
    /// reports no open tickets.
    async fn first_open_ticket(&self) -> Result<Option<Ticket>, TriageError>;

    /// Searches closed tickets whose description contains the keyword.
    ///
    /// Returns the full first-page result list, untruncated, in backend
    /// order. Embedded `"` characters in the keyword are stripped so the
    /// quoted phrase cannot be broken out of.
    async fn search_closed(&self, keyword: &str) -> Result<Vec<Ticket>, TriageError>;

    /// Fetches the comment thread of a ticket.
    ///
    /// Returns the comments in backend order; an empty list when the
    /// response carries no `comments` key.
    async fn list_comments(&self, ticket_id: u64) -> Result<Vec<Comment>, TriageError>;
}

/// Write-side operation against the reply API.
#[async_trait]
pub trait TicketResponder: Send + Sync {
    /// Posts a reply message to a ticket.
    ///
    /// Returns the vendor's parsed acknowledgment on success.
    async fn send_reply(
        &self,
        ticket_id: u64,
        message: &str,
    ) -> Result<ReplyReceipt, TriageError>;
}
