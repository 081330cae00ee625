pub mod market_data_service;
pub mod portfolio_service;
pub mod ml_service;
pub mod dashboard_service;
