//! Integration tests for the reply client against a stub HTTP server.

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{bearer_token, body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use triage::config::Config;
use triage::error::TriageError;
use triage::reply_client::ReplyClient;
use triage::services::TicketResponder;

fn client(server: &MockServer) -> ReplyClient {
    let config = Config::new("acme", "agent@example.com", "secret123")
        .unwrap()
        .with_reply_base_url(server.uri())
        .unwrap();
    ReplyClient::new(&config).unwrap()
}

#[tokio::test]
async fn send_reply_posts_bearer_auth_and_message_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/tickets/42/reply"))
        .and(bearer_token("secret123"))
        .and(body_json(json!({"message": "on my way"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "status": "queued"
        })))
        .mount(&server)
        .await;

    let receipt = client(&server).send_reply(42, "on my way").await.unwrap();

    assert_eq!(receipt.id, Some(7));
    assert_eq!(receipt.status.as_deref(), Some("queued"));
}

#[tokio::test]
async fn send_reply_failure_carries_status_code() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/tickets/42/reply"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let err = client(&server).send_reply(42, "hello").await.unwrap_err();

    assert!(matches!(err, TriageError::HttpStatus { .. }));
    assert!(err.to_string().contains("502"));
}

#[tokio::test]
async fn send_reply_maps_404_to_ticket_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/tickets/42/reply"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such ticket"))
        .mount(&server)
        .await;

    let err = client(&server).send_reply(42, "hello").await.unwrap_err();

    assert!(matches!(
        err,
        TriageError::TicketNotFound { ticket_id: 42 }
    ));
}

#[tokio::test]
async fn send_reply_rejects_empty_message() {
    let server = MockServer::start().await;

    // No mock mounted: the request must never reach the server.
    let err = client(&server).send_reply(42, "   ").await.unwrap_err();

    assert!(matches!(err, TriageError::Validation(_)));
}

#[tokio::test]
async fn responder_without_configuration_is_a_structured_error() {
    let config = Config::new("acme", "agent@example.com", "secret123").unwrap();

    let err = ReplyClient::new(&config).unwrap_err();
    assert!(matches!(err, TriageError::ReplyNotConfigured));
}
