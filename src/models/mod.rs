mod quote;
mod historical;
mod portfolio;
mod prediction;
mod dashboard;
mod insight;
mod risk;

pub use quote::{Listing, StockQuote};
pub use historical::HistoricalBar;
pub use portfolio::{AssetAllocation, PortfolioMetrics};
pub use insight::{Impact, InsightType, MlInsight};
pub use risk::{RiskAnalysis, RiskLevel};
pub use prediction::PricePrediction;
pub use dashboard::DashboardSummary;
