//! LockDecisionHandler - Command handler for locking in a chosen option.

use std::sync::Arc;

use crate::domain::decision::{Decision, DecisionError};
use crate::domain::foundation::{DecisionId, OptionId, UserId};
use crate::ports::DecisionRepository;

/// Command to lock a decision to one of its options.
#[derive(Debug, Clone)]
pub struct LockDecisionCommand {
    pub owner_id: UserId,
    pub decision_id: DecisionId,
    pub chosen_option_id: OptionId,
}

/// Handler for locking decisions. The transition runs atomically inside
/// the repository, so concurrent lock attempts cannot both succeed.
pub struct LockDecisionHandler {
    repository: Arc<dyn DecisionRepository>,
}

impl LockDecisionHandler {
    pub fn new(repository: Arc<dyn DecisionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: LockDecisionCommand) -> Result<Decision, DecisionError> {
        let chosen = cmd.chosen_option_id;
        let decision = self
            .repository
            .modify(
                &cmd.owner_id,
                &cmd.decision_id,
                Box::new(move |d| d.lock(chosen)),
            )
            .await?;

        tracing::info!(decision_id = %decision.id(), "decision locked");
        Ok(decision)
    }
}
