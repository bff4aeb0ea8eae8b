//! Aggregate statistics over a user's decisions.
//!
//! Everything here is a pure function of the input slice. Every ratio and
//! mean guards its own empty-denominator case to zero: these numbers are
//! rendered straight to users and must never come out as NaN or infinity.

use serde::Serialize;

use crate::domain::decision::{Decision, Outcome};
use crate::domain::foundation::Percentage;

/// Confidence at or below this counts as "low" for humbling wins.
pub const LOW_CONFIDENCE_MAX: u8 = 2;

/// Confidence at or above this counts as "high" for reality checks.
pub const HIGH_CONFIDENCE_MIN: u8 = 4;

/// One outcome bucket in the distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeSlice {
    pub count: usize,
    /// Share of completed decisions, rounded independently per bucket;
    /// the three percentages may not sum to exactly 100.
    pub percentage: Percentage,
    /// Mean confidence of decisions in this bucket; 0 when empty.
    pub average_confidence: f64,
}

/// Distribution of completed decisions across the three outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeBreakdown {
    pub good: OutcomeSlice,
    pub neutral: OutcomeSlice,
    pub bad: OutcomeSlice,
}

impl OutcomeBreakdown {
    /// Returns the slice for a given outcome.
    pub fn slice(&self, outcome: Outcome) -> &OutcomeSlice {
        match outcome {
            Outcome::Good => &self.good,
            Outcome::Neutral => &self.neutral,
            Outcome::Bad => &self.bad,
        }
    }
}

/// User-facing statistics summary over one owner's decisions.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightSummary {
    /// All decisions, regardless of state.
    pub total: usize,
    /// Decisions that have been locked (including completed ones).
    pub locked: usize,
    /// Locked decisions still waiting for an outcome.
    pub awaiting_outcome: usize,
    /// Decisions with a recorded outcome.
    pub completed: usize,
    /// Share of completed decisions that turned out good; 0 when none
    /// are completed.
    pub good_outcome_rate: Percentage,
    /// Mean confidence over completed decisions, rounded for display;
    /// 0 when none are completed.
    pub average_confidence: u8,
    /// Per-outcome counts, shares, and mean confidence.
    pub outcomes: OutcomeBreakdown,
    /// Completed decisions with confidence <= 2 that turned out good.
    pub humbling_wins: usize,
    /// Completed decisions with confidence >= 4 that turned out bad.
    pub reality_checks: usize,
}

impl InsightSummary {
    /// Computes the summary from a snapshot of decisions, typically all
    /// decisions belonging to one owner. Order does not matter.
    pub fn compute(decisions: &[Decision]) -> Self {
        let total = decisions.len();
        let locked = decisions
            .iter()
            .filter(|d| !d.lifecycle().is_draft())
            .count();
        let awaiting_outcome = decisions
            .iter()
            .filter(|d| d.lifecycle().is_locked())
            .count();

        let completed: Vec<&Decision> = decisions
            .iter()
            .filter(|d| d.lifecycle().is_completed())
            .collect();

        let good_count = count_outcome(&completed, Outcome::Good);
        let good_outcome_rate = Percentage::from_ratio(good_count, completed.len());

        let average_confidence = rounded_mean_confidence(&completed);

        let outcomes = OutcomeBreakdown {
            good: slice_for(&completed, Outcome::Good),
            neutral: slice_for(&completed, Outcome::Neutral),
            bad: slice_for(&completed, Outcome::Bad),
        };

        let humbling_wins = completed
            .iter()
            .filter(|d| {
                d.confidence().value() <= LOW_CONFIDENCE_MAX && d.outcome() == Some(Outcome::Good)
            })
            .count();
        let reality_checks = completed
            .iter()
            .filter(|d| {
                d.confidence().value() >= HIGH_CONFIDENCE_MIN && d.outcome() == Some(Outcome::Bad)
            })
            .count();

        Self {
            total,
            locked,
            awaiting_outcome,
            completed: completed.len(),
            good_outcome_rate,
            average_confidence,
            outcomes,
            humbling_wins,
            reality_checks,
        }
    }
}

fn count_outcome(completed: &[&Decision], outcome: Outcome) -> usize {
    completed
        .iter()
        .filter(|d| d.outcome() == Some(outcome))
        .count()
}

fn slice_for(completed: &[&Decision], outcome: Outcome) -> OutcomeSlice {
    let bucket: Vec<&Decision> = completed
        .iter()
        .copied()
        .filter(|d| d.outcome() == Some(outcome))
        .collect();

    let average_confidence = if bucket.is_empty() {
        0.0
    } else {
        let sum: u32 = bucket.iter().map(|d| d.confidence().value() as u32).sum();
        sum as f64 / bucket.len() as f64
    };

    OutcomeSlice {
        count: bucket.len(),
        percentage: Percentage::from_ratio(bucket.len(), completed.len()),
        average_confidence,
    }
}

fn rounded_mean_confidence(completed: &[&Decision]) -> u8 {
    if completed.is_empty() {
        return 0;
    }
    let sum: u32 = completed
        .iter()
        .map(|d| d.confidence().value() as u32)
        .sum();
    (sum as f64 / completed.len() as f64).round() as u8
}
