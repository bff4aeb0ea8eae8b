//! GetDecisionHandler - Query handler for a single decision.

use std::sync::Arc;

use crate::domain::decision::{Decision, DecisionError};
use crate::domain::foundation::{DecisionId, UserId};
use crate::ports::DecisionRepository;

/// Query for one decision in the caller's scope.
#[derive(Debug, Clone)]
pub struct GetDecisionQuery {
    pub owner_id: UserId,
    pub decision_id: DecisionId,
}

/// Handler for retrieving a decision.
pub struct GetDecisionHandler {
    repository: Arc<dyn DecisionRepository>,
}

impl GetDecisionHandler {
    pub fn new(repository: Arc<dyn DecisionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetDecisionQuery) -> Result<Decision, DecisionError> {
        self.repository
            .find_by_id(&query.owner_id, &query.decision_id)
            .await?
            .ok_or_else(|| DecisionError::not_found(query.decision_id))
    }
}
