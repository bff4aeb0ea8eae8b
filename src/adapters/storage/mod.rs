//! Storage adapters.

mod in_memory_decision_store;

pub use in_memory_decision_store::InMemoryDecisionStore;
