use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    response::Response,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::errors::error;

/// Like [`axum::Json`], but with the rejections of the public API.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_json(request.headers()) {
            return Err(error(
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "Expected application/json.",
            ));
        }

        let body = Bytes::from_request(request, state)
            .await
            .map_err(|rejection| match rejection.status() {
                StatusCode::PAYLOAD_TOO_LARGE => {
                    error(StatusCode::PAYLOAD_TOO_LARGE, "Request body is too large.")
                }
                _ => error(StatusCode::BAD_REQUEST, "Invalid JSON."),
            })?;

        serde_json::from_slice(&body).map(Self).map_err(|err| {
            debug!("rejecting request body: {err}");
            error(StatusCode::BAD_REQUEST, "Invalid JSON.")
        })
    }
}

/// `application/json`, with parameters or as a `+json` suffix.
fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<mime::Mime>().ok())
        .is_some_and(|content_type| {
            content_type.type_() == mime::APPLICATION
                && (content_type.subtype() == mime::JSON
                    || content_type.suffix() == Some(mime::JSON))
        })
}
