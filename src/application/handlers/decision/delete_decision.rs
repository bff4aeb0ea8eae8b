//! DeleteDecisionHandler - Command handler for discarding drafts.

use std::sync::Arc;

use crate::domain::decision::{Decision, DecisionError};
use crate::domain::foundation::{DecisionId, UserId};
use crate::ports::DecisionRepository;

/// Command to delete a draft decision.
#[derive(Debug, Clone)]
pub struct DeleteDecisionCommand {
    pub owner_id: UserId,
    pub decision_id: DecisionId,
}

/// Handler for deleting decisions. Locked and completed decisions are
/// permanent records; the draft-only guard runs under the store's lock.
pub struct DeleteDecisionHandler {
    repository: Arc<dyn DecisionRepository>,
}

impl DeleteDecisionHandler {
    pub fn new(repository: Arc<dyn DecisionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteDecisionCommand) -> Result<(), DecisionError> {
        self.repository
            .delete(
                &cmd.owner_id,
                &cmd.decision_id,
                Box::new(Decision::ensure_deletable),
            )
            .await?;

        tracing::info!(decision_id = %cmd.decision_id, "decision deleted");
        Ok(())
    }
}
