use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use serde::Serialize;
use studio_core_contact_contracts::{ContactSendMessageError, ContactService};
use studio_models::contact::ContactSubmissionInput;
use tracing::debug;

use crate::{
    errors::{error, internal_server_error, ApiError},
    extractors::json_body::JsonBody,
};

pub fn router(service: Arc<impl ContactService>, body_limit: usize) -> Router<()> {
    Router::new()
        .route("/api/contact", routing::post(send_message))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(service)
}

#[derive(Serialize)]
struct SendMessageResponse {
    ok: bool,
}

async fn send_message(
    service: State<Arc<impl ContactService>>,
    JsonBody(input): JsonBody<ContactSubmissionInput>,
) -> Response {
    let submission = match input.validate() {
        Ok(submission) => submission,
        Err(details) => {
            let fields = details.0.keys().collect::<Vec<_>>();
            debug!(?fields, "contact submission is invalid");
            return ApiError::new("Validation failed.")
                .with_details(details)
                .into_response(StatusCode::BAD_REQUEST);
        }
    };

    match service.send_message(submission).await {
        Ok(()) => Json(SendMessageResponse { ok: true }).into_response(),
        Err(ContactSendMessageError::NotConfigured) => error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Email is not configured.",
        ),
        Err(ContactSendMessageError::Delivery(debug)) => ApiError::new("Failed to send email.")
            .with_debug(debug)
            .into_response(StatusCode::BAD_GATEWAY),
        Err(ContactSendMessageError::Other(err)) => internal_server_error(err),
    }
}
