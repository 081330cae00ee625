use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use tracing::info;

use crate::models::{AssetAllocation, PortfolioMetrics};
use crate::services::portfolio_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/metrics", get(get_metrics))
        .route("/allocation", get(get_allocation))
}

pub async fn get_metrics() -> Json<Vec<PortfolioMetrics>> {
    info!("GET /api/portfolio/metrics - Generating mock portfolio metrics");
    Json(portfolio_service::generate_metrics(&mut rand::rng(), Utc::now()))
}

pub async fn get_allocation() -> Json<Vec<AssetAllocation>> {
    info!("GET /api/portfolio/allocation - Fixed allocation table");
    Json(portfolio_service::asset_allocation())
}
