//! Decision command and query handlers.

mod complete_decision;
mod create_decision;
mod delete_decision;
mod get_decision;
mod list_decisions;
mod lock_decision;
mod update_decision;

pub use complete_decision::{CompleteDecisionCommand, CompleteDecisionHandler};
pub use create_decision::{CreateDecisionCommand, CreateDecisionHandler, NewOption};
pub use delete_decision::{DeleteDecisionCommand, DeleteDecisionHandler};
pub use get_decision::{GetDecisionHandler, GetDecisionQuery};
pub use list_decisions::{ListDecisionsHandler, ListDecisionsQuery};
pub use lock_decision::{LockDecisionCommand, LockDecisionHandler};
pub use update_decision::{UpdateDecisionCommand, UpdateDecisionHandler};
