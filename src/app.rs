use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::errors::AppError;
use crate::routes::{dashboard, health, market, ml, portfolio, root};
use crate::state::AppState;

pub fn create_app(state: AppState, cors: CorsLayer) -> Router {
    let api = Router::<AppState>::new()
        .merge(market::router())
        .nest("/portfolio", portfolio::router())
        .nest("/ml", ml::router())
        .nest("/dashboard", dashboard::router());

    Router::<AppState>::new()
        .nest("/health", health::router())
        // nest() only maps "/" to "/api", so both spellings are routed here
        .route("/api", get(root::greeting))
        .route("/api/", get(root::greeting))
        .nest("/api", api)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound
}
