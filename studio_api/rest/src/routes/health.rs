use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use serde::Serialize;
use studio_email_contracts::EmailService;
use tracing::warn;

struct HealthState<Email> {
    email: Email,
    email_configured: bool,
}

pub fn router(email: impl EmailService, email_configured: bool) -> Router<()> {
    Router::new()
        .route("/health", routing::get(health))
        .with_state(Arc::new(HealthState {
            email,
            email_configured,
        }))
}

#[derive(Serialize)]
struct HealthResponse {
    http: bool,
    email: bool,
}

async fn health<Email: EmailService>(state: State<Arc<HealthState<Email>>>) -> Response {
    let email = state.email_configured
        && state
            .email
            .ping()
            .await
            .inspect_err(|err| warn!("email provider is not reachable: {err:#}"))
            .is_ok();

    Json(HealthResponse { http: true, email }).into_response()
}
