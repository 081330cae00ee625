use serde::{Deserialize, Serialize};

// One daily OHLC bar. `date` is formatted as YYYY-MM-DD.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalBar {
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}
