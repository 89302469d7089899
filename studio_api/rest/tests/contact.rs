use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use studio_core_contact_contracts::{ContactSendMessageError, MockContactService};
use studio_models::contact::{ContactSubmission, ContactSubmissionInput};

use common::{post, server};

mod common;

const VALID: &str = r#"{
    "name": "Jane Doe",
    "email": "jane@x.com",
    "message": "Hello there, I'd like to book.",
    "website": ""
}"#;

fn submission() -> ContactSubmission {
    ContactSubmissionInput {
        name: Some("Jane Doe".into()),
        email: Some("jane@x.com".into()),
        message: Some("Hello there, I'd like to book.".into()),
        ..Default::default()
    }
    .validate()
    .unwrap()
}

#[tokio::test]
async fn ok() {
    // Arrange
    let server = common::Server {
        contact: MockContactService::new().with_send_message(submission(), Ok(())),
        ..server()
    };

    // Act
    let response = post(server, "/api/contact", Some("application/json"), VALID).await;

    // Assert
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({"ok": true}));
    assert!(response.headers.contains_key("X-Request-Id"));
}

#[tokio::test]
async fn json_suffix_and_parameters_are_accepted() {
    for content_type in ["application/json; charset=utf-8", "application/ld+json"] {
        // Arrange
        let server = common::Server {
            contact: MockContactService::new().with_send_message(submission(), Ok(())),
            ..server()
        };

        // Act
        let response = post(server, "/api/contact", Some(content_type), VALID).await;

        // Assert
        assert_eq!(response.status, StatusCode::OK);
    }
}

#[tokio::test]
async fn unsupported_media_type() {
    for content_type in [None, Some("text/plain"), Some("application/x-www-form-urlencoded")] {
        // Act
        let response = post(server(), "/api/contact", content_type, VALID).await;

        // Assert
        assert_eq!(response.status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(response.body, json!({"error": "Expected application/json."}));
    }
}

#[tokio::test]
async fn invalid_json() {
    for body in ["{not json", r#"{"name": 42}"#, "null", ""] {
        // Act
        let response = post(server(), "/api/contact", Some("application/json"), body).await;

        // Assert
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body, json!({"error": "Invalid JSON."}));
    }
}

#[tokio::test]
async fn body_too_large() {
    // Arrange
    let body = json!({ "message": "x".repeat(2048) }).to_string();

    // Act
    let response = post(server(), "/api/contact", Some("application/json"), body).await;

    // Assert
    assert_eq!(response.status, StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn validation_failed() {
    // Arrange
    let body = json!({
        "name": "",
        "email": "a@b",
        "phone": "abc",
        "message": "Hi",
    })
    .to_string();

    // Act
    let response = post(server(), "/api/contact", Some("application/json"), body).await;

    // Assert
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body,
        json!({
            "error": "Validation failed.",
            "details": {
                "name": "Name is required and must be ≤ 100 chars.",
                "email": "Valid email required.",
                "phone": "Invalid phone.",
                "message": "Message must be 10–5000 characters.",
            }
        })
    );
}

#[tokio::test]
async fn line_breaks_do_not_count_towards_message_length() {
    // Arrange
    let body = json!({
        "name": "Jane Doe",
        "email": "jane@x.com",
        "message": "hi\nthere\nyo",
    })
    .to_string();

    // Act
    let response = post(server(), "/api/contact", Some("application/json"), body).await;

    // Assert
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body,
        json!({
            "error": "Validation failed.",
            "details": {"message": "Message must be 10–5000 characters."},
        })
    );
}

#[tokio::test]
async fn not_configured() {
    // Arrange
    let server = common::Server {
        contact: MockContactService::new()
            .with_send_message(submission(), Err(ContactSendMessageError::NotConfigured)),
        ..server()
    };

    // Act
    let response = post(server, "/api/contact", Some("application/json"), VALID).await;

    // Assert
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body, json!({"error": "Email is not configured."}));
}

#[tokio::test]
async fn delivery_failed() {
    // Arrange
    let server = common::Server {
        contact: MockContactService::new().with_send_message(
            submission(),
            Err(ContactSendMessageError::Delivery(
                "The recipient domain is not verified".into(),
            )),
        ),
        ..server()
    };

    // Act
    let response = post(server, "/api/contact", Some("application/json"), VALID).await;

    // Assert
    assert_eq!(response.status, StatusCode::BAD_GATEWAY);
    assert_eq!(
        response.body,
        json!({
            "error": "Failed to send email.",
            "debug": "The recipient domain is not verified",
        })
    );
}

#[tokio::test]
async fn handler_panic() {
    // Arrange
    let mut contact = MockContactService::new();
    contact
        .expect_send_message()
        .once()
        .returning(|_| {
            Box::pin(futures::future::lazy(
                |_| -> Result<(), ContactSendMessageError> { panic!("boom") },
            ))
        });
    let server = common::Server {
        contact,
        ..server()
    };

    // Act
    let response = post(server, "/api/contact", Some("application/json"), VALID).await;

    // Assert
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body, json!({"error": "Internal server error"}));
}
