use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use serde_json::json;

pub const BRANDS_ROUTE: &str = "/brand";
pub const EVENTS_ROUTE: &str = "/brand/:brand_id/event";

/// The only brand known to the fake platform.
pub const BRAND_ID: u64 = 42;

pub fn router(access_token: String) -> Router<()> {
    Router::new()
        .route(BRANDS_ROUTE, routing::get(list_brands))
        .route(EVENTS_ROUTE, routing::get(list_events))
        .with_state(Arc::from(access_token))
}

fn authorized(state: &str, headers: &HeaderMap) -> bool {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .is_some_and(|token| token == state)
}

async fn list_brands(state: State<Arc<str>>, headers: HeaderMap) -> Response {
    if !authorized(&state, &headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    Json(json!({
        "items": [
            { "id": BRAND_ID, "name": "Test Studio", "websiteUrl": "https://studio.example.com/" }
        ]
    }))
    .into_response()
}

async fn list_events(
    state: State<Arc<str>>,
    headers: HeaderMap,
    Path(brand_id): Path<u64>,
) -> Response {
    if !authorized(&state, &headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    if brand_id != BRAND_ID {
        return StatusCode::NOT_FOUND.into_response();
    }

    Json(json!({
        "items": [
            {
                "id": 1,
                "name": "Fall Minis",
                "eventDate": "2025-10-04",
                "galleryUrl": "https://studio.example.com/gallery/1"
            },
            { "id": 2, "name": "Cake Smash" }
        ]
    }))
    .into_response()
}
