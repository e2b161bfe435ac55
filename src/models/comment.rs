//! Comment models for the Zendesk API.
//!
//! Comments form a ticket's conversation thread. They are ordered and,
//! from this client's perspective, append-only.

use serde::Deserialize;

/// A comment attached to a ticket.
#[derive(Debug, Clone, Deserialize)]
pub struct Comment {
    /// Unique comment id.
    pub id: u64,

    /// Comment kind, e.g. "Comment" or "VoiceComment".
    #[serde(default, rename = "type")]
    pub comment_type: Option<String>,

    /// Id of the user who wrote the comment.
    #[serde(default)]
    pub author_id: Option<u64>,

    /// Plain-text body.
    #[serde(default)]
    pub body: Option<String>,

    /// HTML body.
    #[serde(default)]
    pub html_body: Option<String>,

    /// Whether the comment is visible to the requester.
    #[serde(default)]
    pub public: Option<bool>,

    /// Creation timestamp (ISO 8601).
    #[serde(default)]
    pub created_at: Option<String>,

    /// Files attached to the comment.
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

impl Comment {
    /// Returns the plain-text body, falling back to the HTML body,
    /// or a placeholder when neither is present.
    pub fn display_body(&self) -> &str {
        self.body
            .as_deref()
            .or(self.html_body.as_deref())
            .unwrap_or("(No content)")
    }
}

/// A file attached to a comment.
#[derive(Debug, Clone, Deserialize)]
pub struct Attachment {
    /// Unique attachment id.
    pub id: u64,

    /// Original file name.
    #[serde(default)]
    pub file_name: Option<String>,

    /// Download URL.
    #[serde(default)]
    pub content_url: Option<String>,

    /// MIME type.
    #[serde(default)]
    pub content_type: Option<String>,

    /// Size in bytes.
    #[serde(default)]
    pub size: Option<u64>,
}

/// Response envelope for the comments endpoint.
///
/// The `comments` key defaults to an empty list when the body lacks it.
#[derive(Debug, Clone, Deserialize)]
pub struct CommentsResponse {
    /// Comments in the order the backend returns them.
    #[serde(default)]
    pub comments: Vec<Comment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_deserialize() {
        let json = r#"{
            "id": 1274,
            "type": "Comment",
            "author_id": 123,
            "body": "Thanks for reaching out!",
            "public": true,
            "created_at": "2024-02-01T10:31:00Z"
        }"#;
        let comment: Comment = serde_json::from_str(json).unwrap();
        assert_eq!(comment.id, 1274);
        assert_eq!(comment.display_body(), "Thanks for reaching out!");
        assert_eq!(comment.public, Some(true));
        assert!(comment.attachments.is_empty());
    }

    #[test]
    fn test_comment_display_body_falls_back_to_html() {
        let json = r#"{"id": 1, "html_body": "<p>hi</p>"}"#;
        let comment: Comment = serde_json::from_str(json).unwrap();
        assert_eq!(comment.display_body(), "<p>hi</p>");
    }

    #[test]
    fn test_comment_display_body_placeholder() {
        let comment: Comment = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert_eq!(comment.display_body(), "(No content)");
    }

    #[test]
    fn test_comments_response_missing_key_is_empty() {
        let response: CommentsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.comments.is_empty());
    }

    #[test]
    fn test_comments_response_preserves_order() {
        let json = r#"{"comments": [{"id": 5}, {"id": 2}, {"id": 9}]}"#;
        let response: CommentsResponse = serde_json::from_str(json).unwrap();
        let ids: Vec<u64> = response.comments.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![5, 2, 9]);
    }

    #[test]
    fn test_attachment_deserialize() {
        let json = r#"{
            "id": 77,
            "file_name": "screenshot.png",
            "content_type": "image/png",
            "size": 2048
        }"#;
        let attachment: Attachment = serde_json::from_str(json).unwrap();
        assert_eq!(attachment.file_name.as_deref(), Some("screenshot.png"));
        assert_eq!(attachment.size, Some(2048));
    }
}
