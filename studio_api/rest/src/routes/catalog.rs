use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use serde::Deserialize;
use studio_core_catalog_contracts::CatalogService;

use crate::errors::error;

pub fn router(service: Arc<impl CatalogService>) -> Router<()> {
    Router::new()
        .route("/api/services", routing::get(list_services))
        .route("/api/services/:slug", routing::get(get_service))
        .route("/api/contact/interests", routing::get(interest_options))
        .with_state(service)
}

async fn list_services(service: State<Arc<impl CatalogService>>) -> Response {
    Json(service.list_services()).into_response()
}

async fn get_service(
    service: State<Arc<impl CatalogService>>,
    Path(slug): Path<String>,
) -> Response {
    match service.get_service(&slug) {
        Some(service) => Json(service).into_response(),
        None => error(StatusCode::NOT_FOUND, "Service not found."),
    }
}

#[derive(Deserialize)]
struct InterestOptionsQuery {
    interest: Option<String>,
}

async fn interest_options(
    service: State<Arc<impl CatalogService>>,
    Query(query): Query<InterestOptionsQuery>,
) -> Response {
    Json(service.interest_options(query.interest)).into_response()
}
