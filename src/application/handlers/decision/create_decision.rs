//! CreateDecisionHandler - Command handler for recording new decisions.

use std::sync::Arc;

use crate::domain::decision::{Decision, DecisionDraft, DecisionError, DecisionOption};
use crate::domain::foundation::{Confidence, DecisionId, OptionId, UserId};
use crate::ports::DecisionRepository;

/// One candidate option as submitted by the caller. The id is optional;
/// a fresh one is assigned when omitted.
#[derive(Debug, Clone)]
pub struct NewOption {
    pub id: Option<OptionId>,
    pub name: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

impl NewOption {
    pub(crate) fn into_domain(self) -> Result<DecisionOption, DecisionError> {
        let id = self.id.unwrap_or_default();
        Ok(DecisionOption::new(id, self.name, self.pros, self.cons)?)
    }
}

/// Command to create a new decision.
#[derive(Debug, Clone)]
pub struct CreateDecisionCommand {
    pub owner_id: UserId,
    pub title: String,
    pub context: Option<String>,
    pub confidence: u8,
    pub options: Vec<NewOption>,
}

/// Handler for creating decisions.
pub struct CreateDecisionHandler {
    repository: Arc<dyn DecisionRepository>,
}

impl CreateDecisionHandler {
    pub fn new(repository: Arc<dyn DecisionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateDecisionCommand) -> Result<Decision, DecisionError> {
        let confidence = Confidence::try_new(cmd.confidence)?;
        let options = cmd
            .options
            .into_iter()
            .map(NewOption::into_domain)
            .collect::<Result<Vec<_>, _>>()?;

        let decision = Decision::create(
            DecisionId::new(),
            cmd.owner_id,
            DecisionDraft {
                title: cmd.title,
                context: cmd.context,
                confidence,
                options,
            },
        )?;

        self.repository.insert(decision.clone()).await?;

        tracing::info!(decision_id = %decision.id(), "decision created");
        Ok(decision)
    }
}
