//! HTTP routes for insight endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_insights, InsightHandlers};

/// Creates the insight router.
pub fn insight_routes(handlers: InsightHandlers) -> Router {
    Router::new()
        .route("/", get(get_insights))
        .with_state(handlers)
}
