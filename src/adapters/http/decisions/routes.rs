//! HTTP routes for decision endpoints.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use super::handlers::{
    complete_decision, create_decision, delete_decision, get_decision, list_decisions,
    lock_decision, update_decision, DecisionHandlers,
};

/// Creates the decision router with all endpoints.
pub fn decision_routes(handlers: DecisionHandlers) -> Router {
    Router::new()
        .route("/", post(create_decision))
        .route("/", get(list_decisions))
        .route("/:id", get(get_decision))
        .route("/:id", patch(update_decision))
        .route("/:id", delete(delete_decision))
        .route("/:id/lock", post(lock_decision))
        .route("/:id/complete", post(complete_decision))
        .with_state(handlers)
}
