//! CompleteDecisionHandler - Command handler for recording outcomes.

use std::sync::Arc;

use crate::domain::decision::{Decision, DecisionError, Outcome};
use crate::domain::foundation::{DecisionId, UserId};
use crate::ports::DecisionRepository;

/// Command to record the outcome of a locked decision.
///
/// The outcome arrives as raw text; the handler parses it so the core
/// rejects anything outside good/neutral/bad regardless of the transport.
#[derive(Debug, Clone)]
pub struct CompleteDecisionCommand {
    pub owner_id: UserId,
    pub decision_id: DecisionId,
    pub outcome: String,
    pub reflection: Option<String>,
}

/// Handler for completing decisions.
pub struct CompleteDecisionHandler {
    repository: Arc<dyn DecisionRepository>,
}

impl CompleteDecisionHandler {
    pub fn new(repository: Arc<dyn DecisionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CompleteDecisionCommand) -> Result<Decision, DecisionError> {
        let outcome: Outcome = cmd.outcome.parse()?;
        let reflection = cmd.reflection;

        let decision = self
            .repository
            .modify(
                &cmd.owner_id,
                &cmd.decision_id,
                Box::new(move |d| d.complete(outcome, reflection)),
            )
            .await?;

        tracing::info!(
            decision_id = %decision.id(),
            outcome = %outcome,
            "decision completed"
        );
        Ok(decision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryDecisionStore;
    use crate::application::handlers::decision::{
        CreateDecisionCommand, CreateDecisionHandler, LockDecisionCommand, LockDecisionHandler,
        NewOption,
    };

    fn owner() -> UserId {
        UserId::new("user-1").unwrap()
    }

    async fn seeded() -> (Arc<InMemoryDecisionStore>, Decision) {
        let store = Arc::new(InMemoryDecisionStore::new());
        let create = CreateDecisionHandler::new(store.clone());
        let decision = create
            .handle(CreateDecisionCommand {
                owner_id: owner(),
                title: "Take the offer?".to_string(),
                context: None,
                confidence: 4,
                options: vec![
                    NewOption {
                        id: None,
                        name: "Accept".to_string(),
                        pros: vec!["more pay".to_string()],
                        cons: vec!["longer commute".to_string()],
                    },
                    NewOption {
                        id: None,
                        name: "Decline".to_string(),
                        pros: vec!["stability".to_string()],
                        cons: vec!["stagnation".to_string()],
                    },
                ],
            })
            .await
            .unwrap();
        (store, decision)
    }

    async fn lock(store: &Arc<InMemoryDecisionStore>, decision: &Decision) {
        LockDecisionHandler::new(store.clone())
            .handle(LockDecisionCommand {
                owner_id: owner(),
                decision_id: *decision.id(),
                chosen_option_id: *decision.options()[0].id(),
            })
            .await
            .unwrap();
    }

    fn cmd(decision_id: DecisionId, outcome: &str) -> CompleteDecisionCommand {
        CompleteDecisionCommand {
            owner_id: owner(),
            decision_id,
            outcome: outcome.to_string(),
            reflection: Some("worth it".to_string()),
        }
    }

    #[tokio::test]
    async fn completes_a_locked_decision() {
        let (store, decision) = seeded().await;
        lock(&store, &decision).await;
        let handler = CompleteDecisionHandler::new(store);

        let completed = handler.handle(cmd(*decision.id(), "good")).await.unwrap();

        assert!(completed.lifecycle().is_completed());
        assert_eq!(completed.outcome(), Some(Outcome::Good));
        assert_eq!(completed.reflection(), Some("worth it"));
    }

    #[tokio::test]
    async fn completing_before_lock_fails() {
        let (store, decision) = seeded().await;
        let handler = CompleteDecisionHandler::new(store);

        let err = handler.handle(cmd(*decision.id(), "good")).await.unwrap_err();
        assert!(matches!(err, DecisionError::InvalidState(_)));
    }

    #[tokio::test]
    async fn completing_twice_fails_and_preserves_first_outcome() {
        let (store, decision) = seeded().await;
        lock(&store, &decision).await;
        let handler = CompleteDecisionHandler::new(store.clone());

        handler.handle(cmd(*decision.id(), "bad")).await.unwrap();
        let err = handler.handle(cmd(*decision.id(), "good")).await.unwrap_err();

        assert!(matches!(err, DecisionError::InvalidState(_)));
        let stored = store
            .find_by_id(&owner(), decision.id())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.outcome(), Some(Outcome::Bad));
    }

    #[tokio::test]
    async fn invalid_outcome_text_is_a_validation_error() {
        let (store, decision) = seeded().await;
        lock(&store, &decision).await;
        let handler = CompleteDecisionHandler::new(store.clone());

        let err = handler
            .handle(cmd(*decision.id(), "fantastic"))
            .await
            .unwrap_err();

        assert!(matches!(err, DecisionError::Validation { .. }));
        let stored = store
            .find_by_id(&owner(), decision.id())
            .await
            .unwrap()
            .unwrap();
        assert!(stored.lifecycle().is_locked());
    }
}
