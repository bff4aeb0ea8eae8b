//! HTTP handlers for insight endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::handle_decision_error;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::insights::{GetInsightsHandler, GetInsightsQuery};

// ════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct InsightHandlers {
    get_handler: Arc<GetInsightsHandler>,
}

impl InsightHandlers {
    pub fn new(get_handler: Arc<GetInsightsHandler>) -> Self {
        Self { get_handler }
    }
}

// ════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════

/// GET /api/insights - Aggregate statistics for the caller's decisions
///
/// The summary serializes directly; every field is already guarded
/// against empty denominators, so the body never contains NaN.
pub async fn get_insights(
    State(handlers): State<InsightHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    match handlers
        .get_handler
        .handle(GetInsightsQuery { owner_id: user })
        .await
    {
        Ok(summary) => Json(summary).into_response(),
        Err(e) => handle_decision_error(e),
    }
}
