//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::kernel::ServerDeps;
use crate::server::routes::{chat_handler, health_handler, letter_change_handler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub deps: Arc<ServerDeps>,
}

/// Build the Axum application router
///
/// Dependencies are fixed at startup and shared read-only; handlers never
/// reach into ambient globals.
pub fn build_app(deps: Arc<ServerDeps>) -> Router {
    // CORS configuration - the booking endpoint is called from any origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        // Booking assistant gateway
        .route("/", post(chat_handler))
        // Change trigger adapter for event_letters documents
        .route("/hooks/event-letters", post(letter_change_handler))
        // Health check
        .route("/health", get(health_handler))
        .layer(Extension(AppState { deps }))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
