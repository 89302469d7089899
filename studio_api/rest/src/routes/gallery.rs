use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use serde::Serialize;
use studio_core_gallery_contracts::{GalleryError, GalleryService};
use tracing::error;
use url::Url;

use crate::errors::error;

pub fn router(service: Arc<impl GalleryService>) -> Router<()> {
    Router::new()
        .route("/api/gallery/brands", routing::get(list_brands))
        .route(
            "/api/gallery/brands/:brand_id/events",
            routing::get(list_events),
        )
        .with_state(service)
}

async fn list_brands(service: State<Arc<impl GalleryService>>) -> Response {
    match service.list_brands().await {
        Ok(brands) => Json(brands).into_response(),
        Err(err) => gallery_error(err),
    }
}

async fn list_events(
    service: State<Arc<impl GalleryService>>,
    Path(brand_id): Path<u64>,
) -> Response {
    match service.list_events(brand_id.into()).await {
        Ok(events) => Json(events).into_response(),
        Err(err) => gallery_error(err),
    }
}

#[derive(Serialize)]
struct NotConnectedResponse {
    error: &'static str,
    connect_url: Option<Url>,
}

fn gallery_error(err: GalleryError) -> Response {
    match err {
        GalleryError::NotConnected { connect_url } => (
            StatusCode::UNAUTHORIZED,
            Json(NotConnectedResponse {
                error: "Gallery account is not connected.",
                connect_url,
            }),
        )
            .into_response(),
        GalleryError::Other(err) => {
            error!("gallery platform request failed: {err:#}");
            error(StatusCode::BAD_GATEWAY, "Gallery platform request failed.")
        }
    }
}
