use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A synthetic stock quote. `change_percent` is relative to the listing's base price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockQuote {
    pub id: Uuid,
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub volume: u64,
    pub market_cap: f64,
    pub timestamp: DateTime<Utc>,
}

/// Entry of the fixed listing table quotes are generated from.
#[derive(Debug, Clone, Copy)]
pub struct Listing {
    pub symbol: &'static str,
    pub name: &'static str,
    pub base_price: f64,
}
