//! Decision repository port.
//!
//! Defines the contract for the owner-scoped, id-indexed decision store.
//! The in-memory adapter is the default implementation; a transactional
//! store can replace it without touching the application handlers.
//!
//! # Scoping
//!
//! Every operation takes the owner explicitly. An id that exists but
//! belongs to a different owner must behave exactly like an absent id,
//! so existence never leaks across owners.

use crate::domain::decision::{Decision, DecisionError};
use crate::domain::foundation::{DecisionId, UserId};
use async_trait::async_trait;

/// A state transition applied to a stored decision under the store's
/// write lock. Must either fully succeed or leave the record untouched.
pub type Mutation = Box<dyn FnOnce(&mut Decision) -> Result<(), DecisionError> + Send>;

/// A precondition checked against a stored decision under the store's
/// write lock before it is removed.
pub type DeleteGuard = Box<dyn FnOnce(&Decision) -> Result<(), DecisionError> + Send>;

/// Repository port for decision persistence.
///
/// Implementations must ensure:
/// - per-decision mutation is atomic: readers see a transition either
///   fully applied or not at all
/// - insertion order is preserved per owner
#[async_trait]
pub trait DecisionRepository: Send + Sync {
    /// Insert a new decision into its owner's collection.
    ///
    /// # Errors
    ///
    /// - `Infrastructure` on persistence failure
    async fn insert(&self, decision: Decision) -> Result<(), DecisionError>;

    /// Find a decision by id within the owner's scope.
    ///
    /// Returns `None` if absent or owned by someone else.
    async fn find_by_id(
        &self,
        owner_id: &UserId,
        id: &DecisionId,
    ) -> Result<Option<Decision>, DecisionError>;

    /// Snapshot of all decisions for an owner, in insertion order.
    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Decision>, DecisionError>;

    /// Apply a mutation to a stored decision atomically and return the
    /// updated record.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the id is absent in the owner's scope
    /// - whatever the mutation itself returns; in that case the stored
    ///   record is left unchanged
    async fn modify(
        &self,
        owner_id: &UserId,
        id: &DecisionId,
        mutation: Mutation,
    ) -> Result<Decision, DecisionError>;

    /// Remove a decision from its owner's collection, if the guard allows.
    ///
    /// The guard runs under the same lock as the removal, so the record
    /// cannot transition between the check and the delete.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the id is absent in the owner's scope
    /// - whatever the guard returns; the record stays in place
    async fn delete(
        &self,
        owner_id: &UserId,
        id: &DecisionId,
        guard: DeleteGuard,
    ) -> Result<(), DecisionError>;
}
