use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InsightType {
    RiskAnalysis,
    Prediction,
    Optimization,
}

/// Expected impact of acting on an insight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Impact {
    Low,
    Medium,
    High,
}

/// A canned "ML" insight. The content is static; only `id` and `timestamp`
/// are minted per response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MlInsight {
    pub id: Uuid,
    pub insight_type: InsightType,
    pub title: String,
    pub description: String,
    /// Confidence in [0, 1]
    pub confidence: f64,
    pub recommendation: String,
    pub impact: Impact,
    pub timestamp: DateTime<Utc>,
}
