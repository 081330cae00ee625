//! Smoke checker for a running backend.
//!
//! Hits every read endpoint, expects HTTP 200 with a JSON body, and checks
//! that the expected fields are present (on the object, or on the first
//! element of an array). Exits non-zero if any check fails.
//!
//! Usage: `api_check [BASE_URL]` (falls back to `API_BASE_URL`, then
//! `http://localhost:8001/api`).

use std::process::ExitCode;
use std::time::Duration;

use anyhow::{bail, Context};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{error, info, warn};

const DEFAULT_BASE_URL: &str = "http://localhost:8001/api";

struct Check {
    name: &'static str,
    endpoint: &'static str,
    expected_fields: &'static [&'static str],
}

const CHECKS: [Check; 9] = [
    Check {
        name: "Root API Endpoint",
        endpoint: "",
        expected_fields: &["message"],
    },
    Check {
        name: "Stock Quotes",
        endpoint: "stocks",
        expected_fields: &["id", "symbol", "price", "change_percent", "volume"],
    },
    Check {
        name: "Portfolio Metrics",
        endpoint: "portfolio/metrics",
        expected_fields: &["portfolio_name", "total_value", "roi", "sharpe_ratio", "volatility"],
    },
    Check {
        name: "Asset Allocation",
        endpoint: "portfolio/allocation",
        expected_fields: &["asset_type", "percentage", "value", "color"],
    },
    Check {
        name: "Historical Data (AAPL)",
        endpoint: "historical/AAPL?days=30",
        expected_fields: &["date", "open", "high", "low", "close", "volume"],
    },
    Check {
        name: "ML Insights",
        endpoint: "ml/insights",
        expected_fields: &["insight_type", "title", "description", "confidence", "recommendation"],
    },
    Check {
        name: "Risk Analysis",
        endpoint: "ml/risk-analysis",
        expected_fields: &["risk_score", "risk_level", "var_95", "beta", "correlation_sp500"],
    },
    Check {
        name: "ML Predictions",
        endpoint: "ml/predictions",
        expected_fields: &["symbol", "current_price", "predicted_price_1d", "predicted_price_7d", "predicted_price_30d"],
    },
    Check {
        name: "Dashboard Summary",
        endpoint: "dashboard/summary",
        expected_fields: &["total_portfolio_value", "daily_pnl", "daily_pnl_percent", "ytd_return", "active_positions"],
    },
];

fn endpoint_url(base_url: &str, endpoint: &str) -> String {
    if endpoint.is_empty() {
        base_url.to_string()
    } else {
        format!("{}/{}", base_url.trim_end_matches('/'), endpoint)
    }
}

/// Fields from `expected` absent on the body (or its first element).
/// An empty array or a non-object body is missing everything.
fn missing_fields(body: &Value, expected: &[&str]) -> Vec<String> {
    let target = match body {
        Value::Array(items) => items.first(),
        other => Some(other),
    };

    match target.and_then(Value::as_object) {
        Some(object) => expected
            .iter()
            .filter(|field| !object.contains_key(**field))
            .map(|field| field.to_string())
            .collect(),
        None => expected.iter().map(|field| field.to_string()).collect(),
    }
}

async fn run_check(client: &Client, base_url: &str, check: &Check) -> anyhow::Result<()> {
    let url = endpoint_url(base_url, check.endpoint);
    info!("🔍 Testing {} at {}", check.name, url);

    let response = client
        .get(&url)
        .send()
        .await
        .with_context(|| format!("request to {} failed", url))?;

    let status = response.status();
    if status != StatusCode::OK {
        let text = response.text().await.unwrap_or_default();
        bail!("expected 200, got {}: {:.200}", status, text);
    }

    let body: Value = response
        .json()
        .await
        .context("response is not valid JSON")?;

    match &body {
        Value::Array(items) => info!("   array of {} items", items.len()),
        Value::Object(object) => info!("   object with keys {:?}", object.keys().collect::<Vec<_>>()),
        other => warn!("   unexpected JSON value: {}", other),
    }

    let missing = missing_fields(&body, check.expected_fields);
    if !missing.is_empty() {
        bail!("missing expected fields: {:?}", missing);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_target(false)
        .init();

    let base_url = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("API_BASE_URL").ok())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let client = Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .context("failed to build HTTP client")?;

    info!("🚀 Checking backend API at {}", base_url);

    let mut passed = 0;
    for check in &CHECKS {
        match run_check(&client, &base_url, check).await {
            Ok(()) => {
                passed += 1;
                info!("✅ {} passed", check.name);
            }
            Err(e) => error!("❌ {} failed: {:#}", check.name, e),
        }
    }

    let run = CHECKS.len();
    info!(
        "📊 Checks run: {}, passed: {}, success rate: {:.1}%",
        run,
        passed,
        passed as f64 / run as f64 * 100.0
    );

    if passed == run {
        info!("🎉 All backend API checks passed");
        Ok(ExitCode::SUCCESS)
    } else {
        warn!("⚠️  {} checks failed", run - passed);
        Ok(ExitCode::FAILURE)
    }
}
