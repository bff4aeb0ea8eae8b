//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `decision` - Decision aggregate and lifecycle management
//! - `insights` - Pure aggregate statistics over recorded decisions

pub mod decision;
pub mod foundation;
pub mod insights;
