use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde_json::{json, Value};
use tracing::info;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health))
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    info!("GET /health - Health check");
    let uptime = (Utc::now() - state.started_at).num_seconds();
    Json(json!({
        "status": "ok",
        "service": state.service_name,
        "environment": state.environment,
        "uptime_seconds": uptime,
    }))
}
