//! Route definitions.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::handlers::{self, AppState};

/// Create the API router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/carry-data", get(handlers::carry_data))
        .route("/api/chart-data", get(handlers::chart_data))
        .route("/api/health", get(handlers::health))
        .route("/api/cache/clear", get(handlers::clear_cache))
        .with_state(state)
}
