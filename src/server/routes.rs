//! Router configuration for the web server.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use super::handlers;
use super::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // One analysis route per document kind
        .route("/analyze-invoice", post(handlers::analyze_invoice))
        .route("/analyze-receipt", post(handlers::analyze_receipt))
        .route(
            "/analyze-business-card",
            post(handlers::analyze_business_card),
        )
        // Liveness probe
        .route("/health", get(handlers::health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
