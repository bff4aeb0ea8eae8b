//! In-memory decision store.
//!
//! Keyed by owner, then by decision id within the owner's vector, which
//! preserves insertion order. A single `RwLock` guards the whole map:
//! contention is per-user and low, and it keeps every transition trivially
//! atomic with respect to readers.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::decision::{Decision, DecisionError};
use crate::domain::foundation::{DecisionId, UserId};
use crate::ports::{DecisionRepository, DeleteGuard, Mutation};

/// In-memory implementation of [`DecisionRepository`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryDecisionStore {
    decisions: Arc<RwLock<HashMap<UserId, Vec<Decision>>>>,
}

impl InMemoryDecisionStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored decisions across all owners (for tests).
    pub async fn len(&self) -> usize {
        self.decisions.read().await.values().map(Vec::len).sum()
    }

    /// True if no decisions are stored.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl DecisionRepository for InMemoryDecisionStore {
    async fn insert(&self, decision: Decision) -> Result<(), DecisionError> {
        let mut decisions = self.decisions.write().await;
        decisions
            .entry(decision.owner_id().clone())
            .or_default()
            .push(decision);
        Ok(())
    }

    async fn find_by_id(
        &self,
        owner_id: &UserId,
        id: &DecisionId,
    ) -> Result<Option<Decision>, DecisionError> {
        let decisions = self.decisions.read().await;
        Ok(decisions
            .get(owner_id)
            .and_then(|owned| owned.iter().find(|d| d.id() == id))
            .cloned())
    }

    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Decision>, DecisionError> {
        let decisions = self.decisions.read().await;
        Ok(decisions.get(owner_id).cloned().unwrap_or_default())
    }

    async fn modify(
        &self,
        owner_id: &UserId,
        id: &DecisionId,
        mutation: Mutation,
    ) -> Result<Decision, DecisionError> {
        let mut decisions = self.decisions.write().await;
        let slot = decisions
            .get_mut(owner_id)
            .and_then(|owned| owned.iter_mut().find(|d| d.id() == id))
            .ok_or_else(|| DecisionError::not_found(*id))?;

        // Mutate a clone and swap it in only on success, so a failed
        // transition leaves the stored record byte-for-byte intact.
        let mut updated = slot.clone();
        mutation(&mut updated)?;
        *slot = updated.clone();
        Ok(updated)
    }

    async fn delete(
        &self,
        owner_id: &UserId,
        id: &DecisionId,
        guard: DeleteGuard,
    ) -> Result<(), DecisionError> {
        let mut decisions = self.decisions.write().await;
        let owned = decisions
            .get_mut(owner_id)
            .ok_or_else(|| DecisionError::not_found(*id))?;
        let position = owned
            .iter()
            .position(|d| d.id() == id)
            .ok_or_else(|| DecisionError::not_found(*id))?;
        guard(&owned[position])?;
        owned.remove(position);
        Ok(())
    }
}
