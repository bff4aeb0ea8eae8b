//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.

mod decision_repository;

pub use decision_repository::{DecisionRepository, DeleteGuard, Mutation};
