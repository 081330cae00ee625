use chrono::{DateTime, Utc};

/// Immutable per-process context. Generators are stateless, so this only
/// carries what the health probe reports.
#[derive(Clone)]
pub struct AppState {
    pub service_name: String,
    pub environment: String,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(service_name: String, environment: String) -> Self {
        Self {
            service_name,
            environment,
            started_at: Utc::now(),
        }
    }
}
