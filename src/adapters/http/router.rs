use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use super::handlers::{health_check_handler, resolve_handler};
use super::AppState;

/// Wires the one ambient health route plus the single ARK catch-all route
/// (spec.md §4.G), grounded in the router/handler split of the pack's
/// `time-machine-project-ark-service` example.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check_handler))
        .route("/{*path}", get(resolve_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
