use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use studio_models::contact::ContactFieldErrors;

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<ContactFieldErrors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<String>,
}

impl ApiError {
    pub fn new(error: &'static str) -> Self {
        Self {
            error,
            details: None,
            debug: None,
        }
    }

    pub fn with_details(self, details: ContactFieldErrors) -> Self {
        Self {
            details: Some(details),
            ..self
        }
    }

    pub fn with_debug(self, debug: String) -> Self {
        Self {
            debug: Some(debug),
            ..self
        }
    }

    pub fn into_response(self, code: StatusCode) -> Response {
        (code, Json(self)).into_response()
    }
}

pub fn error(code: StatusCode, error: &'static str) -> Response {
    ApiError::new(error).into_response(code)
}

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err:#}");
    error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}
