//! UpdateDecisionHandler - Command handler for editing draft decisions.

use std::sync::Arc;

use crate::domain::decision::{Decision, DecisionError, DecisionPatch};
use crate::domain::foundation::{Confidence, DecisionId, UserId};
use crate::ports::DecisionRepository;

use super::create_decision::NewOption;

/// Command to edit a draft decision. `None` fields are left untouched.
#[derive(Debug, Clone)]
pub struct UpdateDecisionCommand {
    pub owner_id: UserId,
    pub decision_id: DecisionId,
    pub title: Option<String>,
    pub context: Option<String>,
    pub confidence: Option<u8>,
    pub options: Option<Vec<NewOption>>,
}

/// Handler for updating decisions. The patch is validated as a whole
/// before anything is written; a failed update changes nothing.
pub struct UpdateDecisionHandler {
    repository: Arc<dyn DecisionRepository>,
}

impl UpdateDecisionHandler {
    pub fn new(repository: Arc<dyn DecisionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateDecisionCommand) -> Result<Decision, DecisionError> {
        let confidence = cmd.confidence.map(Confidence::try_new).transpose()?;
        let options = cmd
            .options
            .map(|opts| {
                opts.into_iter()
                    .map(NewOption::into_domain)
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;

        let patch = DecisionPatch {
            title: cmd.title,
            context: cmd.context,
            confidence,
            options,
        };

        self.repository
            .modify(
                &cmd.owner_id,
                &cmd.decision_id,
                Box::new(move |d| d.apply(patch)),
            )
            .await
    }
}
