//! Reply models for the reply vendor API.

use serde::{Deserialize, Serialize};

/// Request body for posting a reply to a ticket.
#[derive(Debug, Clone, Serialize)]
pub struct ReplyRequest {
    /// The reply message text.
    pub message: String,
}

impl ReplyRequest {
    /// Creates a reply request with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Acknowledgment returned by the reply API.
///
/// The vendor's response shape is loosely specified, so the common
/// fields are typed and everything else is kept in `extra`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplyReceipt {
    /// Id assigned to the reply, when the vendor provides one.
    #[serde(default)]
    pub id: Option<u64>,

    /// Processing status, e.g. "queued" or "sent".
    #[serde(default)]
    pub status: Option<String>,

    /// Echo of the message, when the vendor provides one.
    #[serde(default)]
    pub message: Option<String>,

    /// Any remaining response fields, preserved verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
