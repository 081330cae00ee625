use axum::routing::get;
use axum::{Json, Router};
use tracing::info;

use crate::models::DashboardSummary;
use crate::services::dashboard_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/summary", get(get_summary))
}

pub async fn get_summary() -> Json<DashboardSummary> {
    info!("GET /api/dashboard/summary - Generating mock summary");
    Json(dashboard_service::generate_summary(&mut rand::rng()))
}
