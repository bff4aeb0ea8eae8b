//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations over the repository port.
//! Each decision operation gets its own command/query handler.

pub mod handlers;

pub use handlers::{
    CompleteDecisionCommand, CompleteDecisionHandler, CreateDecisionCommand,
    CreateDecisionHandler, DeleteDecisionCommand, DeleteDecisionHandler, GetDecisionHandler,
    GetDecisionQuery, GetInsightsHandler, GetInsightsQuery, ListDecisionsHandler,
    ListDecisionsQuery, LockDecisionCommand, LockDecisionHandler, NewOption,
    UpdateDecisionCommand, UpdateDecisionHandler,
};
