use serde::{Deserialize, Serialize};

/// Risk level label. Serialized capitalized ("Low", "Medium", "High").
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];
}

/// Placeholder risk snapshot. None of these figures are computed from data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAnalysis {
    /// Score from 0-100, higher means riskier
    pub risk_score: f64,
    /// Drawn independently of `risk_score`
    pub risk_level: RiskLevel,
    /// 95% Value at Risk, as a negative percentage
    pub var_95: f64,
    pub beta: f64,
    pub correlation_sp500: f64,
}
