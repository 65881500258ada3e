//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Static pages
        .route("/", get(handlers::pages::index))
        .route("/privacy", get(handlers::pages::privacy))
        .route("/support", get(handlers::pages::support))
        // Health probe
        .route("/health", get(handlers::health::health_check))
        // OAuth install flow
        .route("/auth", get(handlers::auth::auth))
        // Slash-command webhook
        .route("/search", post(handlers::search::search))
        // Attach state
        .with_state(state)
}
