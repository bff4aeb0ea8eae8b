//! ListDecisionsHandler - Query handler for an owner's decisions.

use std::sync::Arc;

use crate::domain::decision::{Decision, DecisionError};
use crate::domain::foundation::UserId;
use crate::ports::DecisionRepository;

/// Query for all decisions owned by a user.
#[derive(Debug, Clone)]
pub struct ListDecisionsQuery {
    pub owner_id: UserId,
}

/// Handler for listing decisions. Returns a snapshot in insertion order;
/// display sorting is the caller's concern.
pub struct ListDecisionsHandler {
    repository: Arc<dyn DecisionRepository>,
}

impl ListDecisionsHandler {
    pub fn new(repository: Arc<dyn DecisionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListDecisionsQuery) -> Result<Vec<Decision>, DecisionError> {
        self.repository.list_by_owner(&query.owner_id).await
    }
}
