use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Randomized performance figures for one named model portfolio.
///
/// All return figures are percentages (e.g. 12.5 for 12.5%).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioMetrics {
    pub id: Uuid,
    pub portfolio_name: String,
    pub total_value: f64,
    /// Return on investment
    pub roi: f64,
    /// `roi / volatility`, or 0 when volatility is 0. Not annualized.
    pub sharpe_ratio: f64,
    pub volatility: f64,
    pub daily_return: f64,
    pub ytd_return: f64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetAllocation {
    pub asset_type: String,
    pub percentage: f64,
    pub value: f64,
    /// Chart color as a hex string
    pub color: String,
}
