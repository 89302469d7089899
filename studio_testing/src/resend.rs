use std::sync::Arc;

use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

pub const SEND_ROUTE: &str = "/emails";

/// Recipients containing this marker are rejected with an error object, the
/// way the real API rejects unverified domains.
pub const REJECT_MARKER: &str = "reject";

pub fn router(api_key: String) -> Router<()> {
    Router::new()
        .route(SEND_ROUTE, routing::post(send))
        .with_state(Arc::from(api_key))
}

#[derive(Deserialize)]
struct SendRequest {
    from: String,
    to: Vec<String>,
    subject: String,
    html: String,
    text: String,
}

async fn send(
    state: State<Arc<str>>,
    headers: HeaderMap,
    Json(request): Json<SendRequest>,
) -> Response {
    let authorized = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .is_some_and(|key| key == &**state);
    if !authorized {
        return error(StatusCode::UNAUTHORIZED, "missing_api_key", "API key is invalid");
    }

    if request.html.is_empty() || request.text.is_empty() {
        return error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "validation_error",
            "Both html and text bodies are required",
        );
    }

    if request.to.iter().any(|to| to.contains(REJECT_MARKER)) {
        return error(
            StatusCode::FORBIDDEN,
            "validation_error",
            "The recipient domain is not verified",
        );
    }

    let id = Uuid::new_v4();
    info!(%id, from = %request.from, to = ?request.to, subject = %request.subject, "accepted email");
    Json(json!({ "id": id })).into_response()
}

fn error(status: StatusCode, name: &str, message: &str) -> Response {
    (
        status,
        Json(json!({ "statusCode": status.as_u16(), "name": name, "message": message })),
    )
        .into_response()
}
