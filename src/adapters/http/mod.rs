//! HTTP adapter - axum routers, DTOs, and middleware.

pub mod decisions;
mod error;
pub mod insights;
pub mod middleware;

use std::sync::Arc;

use axum::{routing::get, Json, Router};

use crate::application::handlers::decision::{
    CompleteDecisionHandler, CreateDecisionHandler, DeleteDecisionHandler, GetDecisionHandler,
    ListDecisionsHandler, LockDecisionHandler, UpdateDecisionHandler,
};
use crate::application::handlers::insights::GetInsightsHandler;
use crate::ports::DecisionRepository;

pub use error::ErrorResponse;

use decisions::{decision_routes, DecisionHandlers};
use insights::{insight_routes, InsightHandlers};

/// Builds the `/api` router over a repository implementation.
pub fn api_router(repository: Arc<dyn DecisionRepository>) -> Router {
    let decision_handlers = DecisionHandlers::new(
        Arc::new(CreateDecisionHandler::new(repository.clone())),
        Arc::new(GetDecisionHandler::new(repository.clone())),
        Arc::new(ListDecisionsHandler::new(repository.clone())),
        Arc::new(UpdateDecisionHandler::new(repository.clone())),
        Arc::new(LockDecisionHandler::new(repository.clone())),
        Arc::new(CompleteDecisionHandler::new(repository.clone())),
        Arc::new(DeleteDecisionHandler::new(repository.clone())),
    );
    let insight_handlers = InsightHandlers::new(Arc::new(GetInsightsHandler::new(repository)));

    Router::new()
        .route("/ping", get(ping))
        .nest("/decisions", decision_routes(decision_handlers))
        .nest("/insights", insight_routes(insight_handlers))
}

/// GET /api/ping - liveness probe
async fn ping() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "ping" }))
}
