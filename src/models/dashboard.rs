use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_portfolio_value: f64,
    pub daily_pnl: f64,
    pub daily_pnl_percent: f64,
    pub ytd_return: f64,
    pub active_positions: u32,
    pub cash_balance: f64,
    pub margin_used: f64,
}
