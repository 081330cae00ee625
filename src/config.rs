use std::net::SocketAddr;

use axum::http::HeaderValue;
use thiserror::Error;
use tokio::net::lookup_host;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("PORT must be a valid port number, got {0:?}")]
    InvalidPort(String),
    #[error("Cannot resolve HOST:PORT {0}")]
    UnresolvableHost(String),
    #[error("CORS_ORIGINS is set but lists no origins")]
    EmptyCorsOrigins,
    #[error("Invalid CORS origin {0:?}")]
    InvalidCorsOrigin(String),
}

/// Origins allowed to call the API from a browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    Any,
    List(Vec<String>),
}

impl CorsOrigins {
    /// Parses a comma-separated origin list. A `*` entry allows any origin.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let origins: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        if origins.is_empty() {
            return Err(ConfigError::EmptyCorsOrigins);
        }
        if origins.iter().any(|origin| origin == "*") {
            return Ok(CorsOrigins::Any);
        }
        for origin in &origins {
            HeaderValue::from_str(origin)
                .map_err(|_| ConfigError::InvalidCorsOrigin(origin.clone()))?;
        }
        Ok(CorsOrigins::List(origins))
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_origins: CorsOrigins,
    /// Accepted for deployment compatibility. Nothing connects to it.
    pub database_url: Option<String>,
    pub database_name: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => 8001,
        };
        let cors_origins = match lookup("CORS_ORIGINS") {
            Some(raw) => CorsOrigins::parse(&raw)?,
            None => CorsOrigins::Any,
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            database_url: lookup("DATABASE_URL"),
            database_name: lookup("DB_NAME"),
        })
    }

    /// Resolves `host:port`. Hostnames such as `localhost` are looked up,
    /// the first address returned is used.
    pub async fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let target = format!("{}:{}", self.host, self.port);
        lookup_host((self.host.as_str(), self.port))
            .await
            .ok()
            .and_then(|mut addrs| addrs.next())
            .ok_or(ConfigError::UnresolvableHost(target))
    }

    /// Methods and headers are mirrored from the preflight request.
    /// Credentials are only allowed for an explicit origin list, since
    /// browsers reject credentialed responses with a wildcard origin.
    pub fn cors_layer(&self) -> CorsLayer {
        let layer = CorsLayer::new()
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request());

        match &self.cors_origins {
            CorsOrigins::Any => layer.allow_origin(AllowOrigin::any()),
            CorsOrigins::List(origins) => {
                let origins: Vec<HeaderValue> = origins
                    .iter()
                    .filter_map(|origin| HeaderValue::from_str(origin).ok())
                    .collect();
                layer
                    .allow_origin(AllowOrigin::list(origins))
                    .allow_credentials(true)
            }
        }
    }
}
