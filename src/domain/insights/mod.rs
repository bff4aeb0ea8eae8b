//! Insights module - aggregate statistics over recorded decisions.

mod summary;

pub use summary::{
    InsightSummary, OutcomeBreakdown, OutcomeSlice, HIGH_CONFIDENCE_MIN, LOW_CONFIDENCE_MAX,
};
