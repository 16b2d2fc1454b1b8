//! Integration tests for the backend client.
//!
//! A wiremock server stands in for the contact backend.

#![allow(clippy::unwrap_used)]

use folio_backend::{BackendClient, ContactRequest, Error};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_submit_contact_posts_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/contact"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "Hello"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"ok": true, "email_dispatched": true})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = BackendClient::new(server.uri());
    let response = client
        .submit_contact(&ContactRequest::new("Ada", "ada@example.com", "Hello"))
        .await
        .unwrap();

    assert!(response.ok);
    assert!(response.email_dispatched);
}

#[tokio::test]
async fn test_submit_contact_status_error_uses_body_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/contact"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"ok": false, "error": "db down"})),
        )
        .mount(&server)
        .await;

    let client = BackendClient::new(server.uri());
    let err = client
        .submit_contact(&ContactRequest::new("Ada", "ada@example.com", "Hello"))
        .await
        .unwrap_err();

    match err {
        Error::Status { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "db down");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_submit_contact_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/contact"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = BackendClient::new(server.uri());
    let err = client
        .submit_contact(&ContactRequest::new("Ada", "ada@example.com", "Hello"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Json(_)));
}

#[tokio::test]
async fn test_fetch_health() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/contact/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "smtp_configured": true,
            "target_email": "me@example.com",
            "from_email": "bot@example.com",
            "mode": "smtp"
        })))
        .mount(&server)
        .await;

    let client = BackendClient::new(format!("{}/", server.uri()));
    let health = client.fetch_health().await.unwrap();

    assert_eq!(health.smtp_configured, Some(true));
    assert_eq!(health.target_email.as_deref(), Some("me@example.com"));
    assert_eq!(health.from_email.as_deref(), Some("bot@example.com"));
    assert_eq!(health.mode.as_deref(), Some("smtp"));
    assert!(health.error.is_none());
}

#[tokio::test]
async fn test_fetch_health_not_found() {
    let server = MockServer::start().await;

    let client = BackendClient::new(server.uri());
    let err = client.fetch_health().await.unwrap_err();

    assert!(matches!(err, Error::Status { status: 404, .. }));
    assert!(!err.is_unreachable());
}
