//! Decision module - the decision aggregate and its lifecycle.
//!
//! A decision moves through three states, forward only:
//!
//! ```text
//! Draft ──lock──▶ Locked ──complete──▶ Completed
//! ```
//!
//! Drafts can be edited and deleted. Locked and completed decisions are
//! permanent records: once an option is chosen, only the outcome can be
//! recorded, and nothing can be changed after that.

mod aggregate;
mod errors;
mod option;
mod outcome;

pub use aggregate::{Decision, DecisionDraft, DecisionPatch, Lifecycle, MAX_OPTIONS, MIN_OPTIONS};
pub use errors::DecisionError;
pub use option::DecisionOption;
pub use outcome::Outcome;
