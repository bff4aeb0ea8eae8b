//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to the outside world:
//! - `storage` - In-memory decision store
//! - `http` - axum routers, DTOs, and middleware

pub mod http;
pub mod storage;

pub use storage::InMemoryDecisionStore;
