use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::{HistoricalBar, StockQuote};
use crate::services::market_data_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/stocks", get(get_stocks))
        .route("/historical/:symbol", get(get_historical))
}

/// Query parameters for the historical series
#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    /// Number of daily bars (default: 30). Not bounded.
    #[serde(default = "default_days")]
    pub days: i64,
}

fn default_days() -> i64 {
    market_data_service::DEFAULT_HISTORY_DAYS
}

/// GET /api/stocks
pub async fn get_stocks() -> Json<Vec<StockQuote>> {
    info!("GET /api/stocks - Generating mock quotes");
    let quotes = market_data_service::generate_quotes(&mut rand::rng(), Utc::now());
    Json(quotes)
}

/// GET /api/historical/:symbol?days=N
///
/// The symbol is echoed in logs only; every symbol gets an independent
/// random walk starting from the same base price.
#[axum::debug_handler]
pub async fn get_historical(
    Path(symbol): Path<String>,
    params: Result<Query<HistoryParams>, QueryRejection>,
) -> Result<Json<Vec<HistoricalBar>>, AppError> {
    let Query(params) = params?;
    info!("GET /api/historical/{} - Generating {} mock bars", symbol, params.days);
    let today = Utc::now().date_naive();
    let bars = market_data_service::generate_history(&mut rand::rng(), params.days, today);
    Ok(Json(bars))
}
