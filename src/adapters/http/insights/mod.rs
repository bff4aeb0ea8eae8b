//! HTTP endpoints for insights.

pub mod handlers;
pub mod routes;

pub use handlers::InsightHandlers;
pub use routes::insight_routes;
