use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use tracing::info;

use crate::models::{MlInsight, PricePrediction, RiskAnalysis};
use crate::services::ml_service;
use crate::state::AppState;

/// Placeholder "ML" endpoints. All responses are mock data, no model runs.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/insights", get(get_insights))
        .route("/risk-analysis", get(get_risk_analysis))
        .route("/predictions", get(get_predictions))
}

pub async fn get_insights() -> Json<Vec<MlInsight>> {
    info!("GET /api/ml/insights - Static mock insights");
    Json(ml_service::insights(Utc::now()))
}

pub async fn get_risk_analysis() -> Json<RiskAnalysis> {
    info!("GET /api/ml/risk-analysis - Generating mock risk analysis");
    Json(ml_service::generate_risk_analysis(&mut rand::rng()))
}

pub async fn get_predictions() -> Json<Vec<PricePrediction>> {
    info!("GET /api/ml/predictions - Generating mock predictions");
    Json(ml_service::generate_predictions(&mut rand::rng()))
}
