use axum::Json;
use serde_json::{json, Value};
use tracing::info;

pub async fn greeting() -> Json<Value> {
    info!("GET /api - Greeting");
    Json(json!({ "message": "Cappy AI Fintech Platform API" }))
}
