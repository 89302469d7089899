use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use serde::Deserialize;
use studio_core_site_contracts::SiteService;

pub fn router(service: Arc<impl SiteService>) -> Router<()> {
    Router::new()
        .route("/api/site", routing::get(get_site))
        .with_state(service)
}

#[derive(Deserialize)]
struct SiteQuery {
    path: Option<String>,
}

async fn get_site(
    service: State<Arc<impl SiteService>>,
    Query(query): Query<SiteQuery>,
) -> Response {
    Json(service.get_site(query.path)).into_response()
}
