use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use metricboard_types::{DashboardCatalog, DashboardSpec};
use serde::Serialize;
use tracing::debug;

use crate::state::AppState;

#[derive(Serialize)]
pub struct ErrorResponse {
    error: String,
}

pub fn routes(_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/v1/dashboards", get(get_dashboards))
        .route("/api/v1/dashboards/:slug", get(get_dashboard))
}

async fn get_dashboards(State(state): State<AppState>) -> Json<DashboardCatalog> {
    Json(state.catalog.as_ref().clone())
}

async fn get_dashboard(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<DashboardSpec>, (StatusCode, Json<ErrorResponse>)> {
    match state.catalog.find(&slug) {
        Some(dashboard) => Ok(Json(dashboard.clone())),
        None => {
            debug!("dashboard lookup missed: {slug}");
            Err((
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: format!("dashboard not found: {slug}"),
                }),
            ))
        }
    }
}
