//! Command and query handlers.

pub mod decision;
pub mod insights;

pub use decision::{
    CompleteDecisionCommand, CompleteDecisionHandler, CreateDecisionCommand,
    CreateDecisionHandler, DeleteDecisionCommand, DeleteDecisionHandler, GetDecisionHandler,
    GetDecisionQuery, ListDecisionsHandler, ListDecisionsQuery, LockDecisionCommand,
    LockDecisionHandler, NewOption, UpdateDecisionCommand, UpdateDecisionHandler,
};
pub use insights::{GetInsightsHandler, GetInsightsQuery};
