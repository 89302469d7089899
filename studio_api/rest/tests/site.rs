use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use studio_core_site_contracts::MockSiteService;
use studio_email_contracts::MockEmailService;
use studio_models::site::{Site, SiteEmbeds, SiteNavLink};

use common::{get, server};

mod common;

#[tokio::test]
async fn get_site() {
    // Arrange
    let site = Site {
        links: vec![SiteNavLink {
            href: "/services".into(),
            label: "Services".into(),
            active: true,
        }],
        show_socials: false,
        show_logo: true,
        socials: vec![],
        embeds: SiteEmbeds::default(),
    };
    let server = common::Server {
        site: MockSiteService::new().with_get_site(Some("/services/newborn".into()), site),
        ..server()
    };

    // Act
    let response = get(server, "/api/site?path=/services/newborn").await;

    // Assert
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({
            "links": [{"href": "/services", "label": "Services", "active": true}],
            "show_socials": false,
            "show_logo": true,
            "socials": [],
            "embeds": {"booking_url": null, "availability_url": null},
        })
    );
}

#[tokio::test]
async fn health() {
    // Arrange
    let server = common::Server {
        email: MockEmailService::new().with_ping(true),
        ..server()
    };

    // Act
    let response = get(server, "/health").await;

    // Assert
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({"http": true, "email": true}));
}

#[tokio::test]
async fn health_email_not_configured() {
    // Arrange
    let mut server = server();
    server.config.email_configured = false;

    // Act
    let response = get(server, "/health").await;

    // Assert
    assert_eq!(response.body, json!({"http": true, "email": false}));
}

#[tokio::test]
async fn health_email_unreachable() {
    // Arrange
    let server = common::Server {
        email: MockEmailService::new().with_ping(false),
        ..server()
    };

    // Act
    let response = get(server, "/health").await;

    // Assert
    assert_eq!(response.body, json!({"http": true, "email": false}));
}
