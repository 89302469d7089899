#![allow(dead_code, reason = "not every test file uses every helper")]

use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, HeaderMap, Method, Request, StatusCode},
};
use studio_api_rest::{RestServer, RestServerConfig};
use studio_core_catalog_contracts::MockCatalogService;
use studio_core_contact_contracts::MockContactService;
use studio_core_gallery_contracts::MockGalleryService;
use studio_core_site_contracts::MockSiteService;
use studio_email_contracts::MockEmailService;
use tower::ServiceExt;

pub type Server = RestServer<
    MockContactService,
    MockCatalogService,
    MockGalleryService,
    MockSiteService,
    MockEmailService,
>;

pub fn server() -> Server {
    RestServer {
        config: RestServerConfig {
            body_limit: 1024,
            email_configured: true,
        },
        ..Default::default()
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: serde_json::Value,
}

pub async fn send(server: Server, request: Request<Body>) -> TestResponse {
    let response = server.router().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn get(server: Server, uri: &str) -> TestResponse {
    send(
        server,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

pub async fn post(
    server: Server,
    uri: &str,
    content_type: Option<&str>,
    body: impl Into<Body>,
) -> TestResponse {
    let mut request = Request::builder().method(Method::POST).uri(uri);
    if let Some(content_type) = content_type {
        request = request.header(CONTENT_TYPE, content_type);
    }
    send(server, request.body(body.into()).unwrap()).await
}
