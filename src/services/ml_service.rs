//! Mock "ML" generators.
//!
//! Nothing here runs a model. Insights are a fixed catalog, risk analysis
//! and predictions are uniform draws over hand-picked ranges.

use chrono::{DateTime, Utc};
use rand::Rng;
use uuid::Uuid;

use crate::models::{Impact, InsightType, MlInsight, PricePrediction, RiskAnalysis, RiskLevel};
use crate::utils::round_to;

struct InsightTemplate {
    insight_type: InsightType,
    title: &'static str,
    description: &'static str,
    confidence: f64,
    recommendation: &'static str,
    impact: Impact,
}

const INSIGHT_CATALOG: [InsightTemplate; 3] = [
    InsightTemplate {
        insight_type: InsightType::RiskAnalysis,
        title: "Portfolio Risk Assessment",
        description: "Current portfolio shows moderate risk with well-diversified assets",
        confidence: 0.87,
        recommendation: "Consider reducing tech sector exposure by 5%",
        impact: Impact::Medium,
    },
    InsightTemplate {
        insight_type: InsightType::Prediction,
        title: "Q2 Market Forecast",
        description: "AI models predict 8-12% growth in tech sector over next quarter",
        confidence: 0.73,
        recommendation: "Increase allocation to semiconductor stocks",
        impact: Impact::High,
    },
    InsightTemplate {
        insight_type: InsightType::Optimization,
        title: "Portfolio Rebalancing",
        description: "Optimal allocation suggests shifting 3% from bonds to equities",
        confidence: 0.91,
        recommendation: "Execute rebalancing within next 2 weeks",
        impact: Impact::Medium,
    },
];

pub const PREDICTION_SYMBOLS: [&str; 5] = ["AAPL", "GOOGL", "MSFT", "TSLA", "NVDA"];

pub fn insights(now: DateTime<Utc>) -> Vec<MlInsight> {
    INSIGHT_CATALOG
        .iter()
        .map(|t| MlInsight {
            id: Uuid::new_v4(),
            insight_type: t.insight_type,
            title: t.title.to_string(),
            description: t.description.to_string(),
            confidence: t.confidence,
            recommendation: t.recommendation.to_string(),
            impact: t.impact,
            timestamp: now,
        })
        .collect()
}

pub fn generate_risk_analysis<R: Rng + ?Sized>(rng: &mut R) -> RiskAnalysis {
    RiskAnalysis {
        risk_score: round_to(rng.random_range(20.0..=80.0), 1),
        risk_level: RiskLevel::ALL[rng.random_range(0..RiskLevel::ALL.len())],
        var_95: round_to(rng.random_range(-15.0..=-5.0), 2),
        beta: round_to(rng.random_range(0.5..=1.5), 2),
        correlation_sp500: round_to(rng.random_range(0.3..=0.9), 2),
    }
}

pub fn generate_predictions<R: Rng + ?Sized>(rng: &mut R) -> Vec<PricePrediction> {
    PREDICTION_SYMBOLS
        .iter()
        .map(|symbol| {
            let current: f64 = rng.random_range(100.0..=500.0);
            let one_day = current * rng.random_range(0.98..=1.02);
            let one_week = current * rng.random_range(0.95..=1.05);
            let one_month = current * rng.random_range(0.90..=1.10);

            PricePrediction {
                symbol: symbol.to_string(),
                current_price: round_to(current, 2),
                predicted_price_1d: round_to(one_day, 2),
                predicted_price_7d: round_to(one_week, 2),
                predicted_price_30d: round_to(one_month, 2),
                confidence_1d: round_to(rng.random_range(0.7..=0.95), 2),
                confidence_7d: round_to(rng.random_range(0.6..=0.85), 2),
                confidence_30d: round_to(rng.random_range(0.5..=0.75), 2),
            }
        })
        .collect()
}
