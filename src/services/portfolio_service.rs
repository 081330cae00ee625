use chrono::{DateTime, Utc};
use rand::Rng;
use uuid::Uuid;

use crate::models::{AssetAllocation, PortfolioMetrics};
use crate::utils::round_to;

pub const PORTFOLIO_NAMES: [&str; 5] = [
    "Conservative",
    "Balanced",
    "Aggressive",
    "Tech Focus",
    "ESG Portfolio",
];

/// Notional the allocation table is applied to.
pub const ALLOCATION_NOTIONAL: f64 = 500_000.0;

/// (asset type, percentage, chart color). Percentages sum to 100.
pub const ALLOCATION_TABLE: [(&str, f64, &str); 5] = [
    ("Stocks", 60.0, "#0ea5e9"),
    ("Bonds", 25.0, "#14b8a6"),
    ("Real Estate", 10.0, "#8b5cf6"),
    ("Commodities", 3.0, "#f59e0b"),
    ("Cash", 2.0, "#ef4444"),
];

/// Return over volatility. Returns 0 for non-positive volatility.
pub fn sharpe_ratio(roi: f64, volatility: f64) -> f64 {
    if volatility > 0.0 {
        roi / volatility
    } else {
        0.0
    }
}

pub fn generate_metrics<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> Vec<PortfolioMetrics> {
    PORTFOLIO_NAMES
        .iter()
        .map(|name| {
            let roi = rng.random_range(-5.0..=25.0);
            let volatility = rng.random_range(5.0..=30.0);

            PortfolioMetrics {
                id: Uuid::new_v4(),
                portfolio_name: name.to_string(),
                total_value: round_to(rng.random_range(100_000.0..=1_000_000.0), 2),
                roi: round_to(roi, 2),
                sharpe_ratio: round_to(sharpe_ratio(roi, volatility), 2),
                volatility: round_to(volatility, 2),
                daily_return: round_to(rng.random_range(-2.0..=2.0), 2),
                ytd_return: round_to(rng.random_range(-10.0..=30.0), 2),
                timestamp: now,
            }
        })
        .collect()
}

pub fn asset_allocation() -> Vec<AssetAllocation> {
    ALLOCATION_TABLE
        .iter()
        .map(|&(asset_type, percentage, color)| AssetAllocation {
            asset_type: asset_type.to_string(),
            percentage,
            value: percentage / 100.0 * ALLOCATION_NOTIONAL,
            color: color.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sharpe_ratio_zero_volatility() {
        assert_eq!(sharpe_ratio(12.0, 0.0), 0.0);
        assert_eq!(sharpe_ratio(-3.0, 0.0), 0.0);
    }

    #[test]
    fn test_sharpe_ratio_divides() {
        assert!((sharpe_ratio(10.0, 20.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_metrics_names_and_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let metrics = generate_metrics(&mut rng, Utc::now());

        let names: Vec<&str> = metrics.iter().map(|m| m.portfolio_name.as_str()).collect();
        assert_eq!(names, PORTFOLIO_NAMES.to_vec());

        for m in &metrics {
            assert!(m.roi >= -5.0 && m.roi <= 25.0);
            assert!(m.volatility >= 5.0 && m.volatility <= 30.0);
            assert!(m.total_value >= 100_000.0 && m.total_value <= 1_000_000.0);
            // sharpe is computed before rounding, so compare loosely
            assert!((m.sharpe_ratio - m.roi / m.volatility).abs() < 0.02, "{:?}", m);
        }
    }

    #[test]
    fn test_allocation_sums() {
        let allocation = asset_allocation();
        let pct: f64 = allocation.iter().map(|a| a.percentage).sum();
        let value: f64 = allocation.iter().map(|a| a.value).sum();

        assert_eq!(allocation.len(), 5);
        assert_eq!(pct, 100.0);
        assert!((value - ALLOCATION_NOTIONAL).abs() < 1e-6);
        assert_eq!(allocation[0].value, 300_000.0);
        assert_eq!(allocation[4].color, "#ef4444");
    }
}
