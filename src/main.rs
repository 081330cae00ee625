mod app;
mod config;
mod errors;
mod logging;
mod models;
mod routes;
mod services;
mod state;
mod utils;

use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::logging::LoggingConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Initialize logging FIRST
    let logging_config = LoggingConfig::from_env();
    let state = AppState::new(
        logging_config.service_name.clone(),
        logging_config.environment.clone(),
    );
    logging::init_logging(logging_config)?;

    let config = AppConfig::from_env()?;
    if config.database_url.is_some() || config.database_name.is_some() {
        warn!("DATABASE_URL/DB_NAME are set but no endpoint persists data; not connecting");
    }
    info!("🌐 CORS origins: {:?}", config.cors_origins);

    let app = app::create_app(state, config.cors_layer());

    let addr = config.bind_addr().await?;
    let listener = TcpListener::bind(&addr).await?;
    info!("🚀 Cappy mock data backend running at http://{}/api", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}
