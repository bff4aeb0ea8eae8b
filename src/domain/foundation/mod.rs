//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the decision-log domain.

mod confidence;
mod errors;
mod ids;
mod percentage;
mod timestamp;

pub use confidence::Confidence;
pub use errors::{ErrorCode, ValidationError};
pub use ids::{DecisionId, OptionId, UserId};
pub use percentage::Percentage;
pub use timestamp::Timestamp;
