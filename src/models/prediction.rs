use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricePrediction {
    pub symbol: String,
    pub current_price: f64,
    pub predicted_price_1d: f64,
    pub predicted_price_7d: f64,
    pub predicted_price_30d: f64,
    pub confidence_1d: f64,
    pub confidence_7d: f64,
    pub confidence_30d: f64,
}
