//! Ticket models for the Zendesk API.
//!
//! This module defines the data structures for tickets as returned by
//! the search endpoint, plus the search response envelope.

use serde::Deserialize;

/// A helpdesk ticket.
///
/// All attributes are owned and mutated by the remote service; this
/// client only reads them. Fields beyond the id are optional because
/// search results omit fields that have no value.
#[derive(Debug, Clone, Deserialize)]
pub struct Ticket {
    /// Unique ticket id.
    pub id: u64,

    /// API URL of this ticket.
    #[serde(default)]
    pub url: Option<String>,

    /// Subject/title of the ticket.
    #[serde(default)]
    pub subject: Option<String>,

    /// Description (the first comment, as plain text).
    #[serde(default)]
    pub description: Option<String>,

    /// Current status: "new", "open", "pending", "hold", "solved", or "closed".
    #[serde(default)]
    pub status: Option<String>,

    /// Priority: "low", "normal", "high", or "urgent".
    #[serde(default)]
    pub priority: Option<String>,

    /// Ticket type: "problem", "incident", "question", or "task".
    #[serde(default, rename = "type")]
    pub ticket_type: Option<String>,

    /// Id of the user who requested the ticket.
    #[serde(default)]
    pub requester_id: Option<u64>,

    /// Id of the agent the ticket is assigned to.
    #[serde(default)]
    pub assignee_id: Option<u64>,

    /// Id of the requester's organization.
    #[serde(default)]
    pub organization_id: Option<u64>,

    /// Tags attached to the ticket.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Creation timestamp (ISO 8601).
    #[serde(default)]
    pub created_at: Option<String>,

    /// Last update timestamp (ISO 8601).
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Ticket {
    /// Returns the subject or a placeholder.
    pub fn display_subject(&self) -> &str {
        self.subject.as_deref().unwrap_or("(No subject)")
    }

    /// Returns the status or "unknown".
    pub fn display_status(&self) -> &str {
        self.status.as_deref().unwrap_or("unknown")
    }

    /// Returns true if the ticket is in a terminal status.
    pub fn is_closed(&self) -> bool {
        matches!(self.status.as_deref(), Some("closed") | Some("solved"))
    }
}

/// Response envelope for the search endpoint.
///
/// Only the first page is consumed; `next_page` is surfaced as-is so
/// callers can see whether more results exist.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    /// Tickets matching the query, in backend order.
    #[serde(default)]
    pub results: Vec<Ticket>,

    /// Total number of matches reported by the backend.
    #[serde(default)]
    pub count: Option<u64>,

    /// URL of the next result page, when one exists.
    #[serde(default)]
    pub next_page: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_deserialize() {
        let json = r#"{
            "id": 35436,
            "subject": "Printer on fire",
            "description": "The printer is literally on fire.",
            "status": "open",
            "priority": "urgent",
            "type": "incident",
            "requester_id": 20978392,
            "tags": ["printer", "fire"],
            "created_at": "2024-02-01T10:30:00Z"
        }"#;
        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.id, 35436);
        assert_eq!(ticket.display_subject(), "Printer on fire");
        assert_eq!(ticket.display_status(), "open");
        assert_eq!(ticket.ticket_type.as_deref(), Some("incident"));
        assert_eq!(ticket.tags, vec!["printer", "fire"]);
        assert!(!ticket.is_closed());
    }

    #[test]
    fn test_ticket_deserialize_minimal() {
        let ticket: Ticket = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert_eq!(ticket.display_subject(), "(No subject)");
        assert_eq!(ticket.display_status(), "unknown");
        assert!(ticket.tags.is_empty());
    }

    #[test]
    fn test_ticket_is_closed() {
        let closed: Ticket =
            serde_json::from_str(r#"{"id": 2, "status": "closed"}"#).unwrap();
        assert!(closed.is_closed());

        let solved: Ticket =
            serde_json::from_str(r#"{"id": 3, "status": "solved"}"#).unwrap();
        assert!(solved.is_closed());
    }

    #[test]
    fn test_search_response_defaults() {
        let response: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.results.is_empty());
        assert_eq!(response.count, None);
        assert_eq!(response.next_page, None);
    }

    #[test]
    fn test_search_response_preserves_order() {
        let json = r#"{
            "results": [{"id": 3}, {"id": 1}, {"id": 2}],
            "count": 3
        }"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        let ids: Vec<u64> = response.results.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}
