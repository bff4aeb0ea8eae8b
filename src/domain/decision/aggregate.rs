//! Decision aggregate entity.
//!
//! A decision is owned by exactly one user and moves forward through
//! `Draft` → `Locked` → `Completed`, never backward. State is an explicit
//! tagged variant rather than a pair of optional timestamps, so an outcome
//! without a lock is unrepresentable.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Confidence, DecisionId, OptionId, Timestamp, UserId, ValidationError};

use super::{DecisionError, DecisionOption, Outcome};

/// Minimum number of candidate options.
pub const MIN_OPTIONS: usize = 2;

/// Maximum number of candidate options.
pub const MAX_OPTIONS: usize = 4;

/// Lifecycle state of a decision.
///
/// Each variant carries exactly the fields that exist in that state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum Lifecycle {
    /// Editable; no option chosen yet.
    Draft,
    /// An option was chosen; waiting for the real-world outcome.
    Locked {
        chosen_option_id: OptionId,
        locked_at: Timestamp,
    },
    /// Outcome recorded; terminal and read-only.
    Completed {
        chosen_option_id: OptionId,
        locked_at: Timestamp,
        outcome: Outcome,
        reflection: Option<String>,
        completed_at: Timestamp,
    },
}

impl Lifecycle {
    /// Returns the state name for display and wire use.
    pub fn name(&self) -> &'static str {
        match self {
            Lifecycle::Draft => "draft",
            Lifecycle::Locked { .. } => "locked",
            Lifecycle::Completed { .. } => "completed",
        }
    }

    pub fn is_draft(&self) -> bool {
        matches!(self, Lifecycle::Draft)
    }

    pub fn is_locked(&self) -> bool {
        matches!(self, Lifecycle::Locked { .. })
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, Lifecycle::Completed { .. })
    }
}

/// Partial update to a draft decision. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct DecisionPatch {
    pub title: Option<String>,
    pub context: Option<String>,
    pub confidence: Option<Confidence>,
    pub options: Option<Vec<DecisionOption>>,
}

impl DecisionPatch {
    /// True if no field is supplied.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.context.is_none()
            && self.confidence.is_none()
            && self.options.is_none()
    }
}

/// Validated input for creating a decision.
#[derive(Debug, Clone)]
pub struct DecisionDraft {
    pub title: String,
    pub context: Option<String>,
    pub confidence: Confidence,
    pub options: Vec<DecisionOption>,
}

/// Decision aggregate - one tracked choice with its options, confidence
/// rating, and eventual outcome.
///
/// # Invariants
///
/// - `id` is globally unique
/// - `title` is non-blank
/// - 2 to 4 options with unique ids
/// - a chosen option always references a member of `options`
/// - `created_at` is immutable; lock and completion timestamps are set
///   exactly once by their transitions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// Unique identifier for this decision.
    id: DecisionId,

    /// User who owns this decision.
    owner_id: UserId,

    /// What is being decided.
    title: String,

    /// Optional free-text background.
    context: Option<String>,

    /// Self-reported confidence at creation/edit time.
    confidence: Confidence,

    /// Candidate options (2-4, unique ids).
    options: Vec<DecisionOption>,

    /// Current lifecycle state.
    lifecycle: Lifecycle,

    /// When the decision was created.
    created_at: Timestamp,
}

impl Decision {
    /// Create a new decision in `Draft` state.
    ///
    /// # Errors
    ///
    /// - `Validation` if the title is blank, the option count is out of
    ///   range, or option ids collide
    pub fn create(
        id: DecisionId,
        owner_id: UserId,
        draft: DecisionDraft,
    ) -> Result<Self, DecisionError> {
        Self::validate_title(&draft.title)?;
        Self::validate_options(&draft.options)?;

        Ok(Self {
            id,
            owner_id,
            title: draft.title,
            context: draft.context,
            confidence: draft.confidence,
            options: draft.options,
            lifecycle: Lifecycle::Draft,
            created_at: Timestamp::now(),
        })
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &DecisionId {
        &self.id
    }

    pub fn owner_id(&self) -> &UserId {
        &self.owner_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    pub fn confidence(&self) -> Confidence {
        self.confidence
    }

    pub fn options(&self) -> &[DecisionOption] {
        &self.options
    }

    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// The chosen option id, once locked.
    pub fn chosen_option_id(&self) -> Option<&OptionId> {
        match &self.lifecycle {
            Lifecycle::Draft => None,
            Lifecycle::Locked {
                chosen_option_id, ..
            }
            | Lifecycle::Completed {
                chosen_option_id, ..
            } => Some(chosen_option_id),
        }
    }

    /// When the decision was locked, if it has been.
    pub fn locked_at(&self) -> Option<&Timestamp> {
        match &self.lifecycle {
            Lifecycle::Draft => None,
            Lifecycle::Locked { locked_at, .. } | Lifecycle::Completed { locked_at, .. } => {
                Some(locked_at)
            }
        }
    }

    /// When the outcome was recorded, if it has been.
    pub fn completed_at(&self) -> Option<&Timestamp> {
        match &self.lifecycle {
            Lifecycle::Completed { completed_at, .. } => Some(completed_at),
            _ => None,
        }
    }

    /// The recorded outcome, once completed.
    pub fn outcome(&self) -> Option<Outcome> {
        match &self.lifecycle {
            Lifecycle::Completed { outcome, .. } => Some(*outcome),
            _ => None,
        }
    }

    /// The recorded reflection, once completed.
    pub fn reflection(&self) -> Option<&str> {
        match &self.lifecycle {
            Lifecycle::Completed { reflection, .. } => reflection.as_deref(),
            _ => None,
        }
    }

    /// Checks if the given user owns this decision.
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.owner_id == user_id
    }

    // ─────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────

    /// Apply a partial edit. Only supplied fields change; the whole patch
    /// is validated before any field is written (all-or-nothing).
    ///
    /// # Errors
    ///
    /// - `InvalidState` if the decision is not in `Draft`
    /// - `Validation` if any supplied field fails the creation rules
    pub fn apply(&mut self, patch: DecisionPatch) -> Result<(), DecisionError> {
        self.ensure_draft("edit")?;

        if let Some(title) = &patch.title {
            Self::validate_title(title)?;
        }
        if let Some(options) = &patch.options {
            Self::validate_options(options)?;
        }

        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(context) = patch.context {
            self.context = Some(context);
        }
        if let Some(confidence) = patch.confidence {
            self.confidence = confidence;
        }
        if let Some(options) = patch.options {
            self.options = options;
        }
        Ok(())
    }

    /// Lock in a chosen option, transitioning `Draft` → `Locked`.
    ///
    /// Not idempotent: locking twice is an error, and the original
    /// `locked_at` is preserved.
    ///
    /// # Errors
    ///
    /// - `InvalidState` if already locked or completed
    /// - `Validation` if `chosen_option_id` is not one of the options
    pub fn lock(&mut self, chosen_option_id: OptionId) -> Result<(), DecisionError> {
        self.ensure_draft("lock")?;

        if !self.options.iter().any(|o| o.id() == &chosen_option_id) {
            return Err(DecisionError::validation(
                "chosen_option_id",
                format!("option {} is not part of this decision", chosen_option_id),
            ));
        }

        self.lifecycle = Lifecycle::Locked {
            chosen_option_id,
            locked_at: Timestamp::now(),
        };
        Ok(())
    }

    /// Record the outcome, transitioning `Locked` → `Completed`.
    ///
    /// Not idempotent: completing twice is an error, and the original
    /// outcome, reflection, and `completed_at` are preserved.
    ///
    /// # Errors
    ///
    /// - `InvalidState` if not locked yet, or already completed
    pub fn complete(
        &mut self,
        outcome: Outcome,
        reflection: Option<String>,
    ) -> Result<(), DecisionError> {
        match &self.lifecycle {
            Lifecycle::Draft => Err(DecisionError::invalid_state(
                "decision must be locked before an outcome can be recorded",
            )),
            Lifecycle::Completed { .. } => Err(DecisionError::invalid_state(
                "decision already has an outcome",
            )),
            Lifecycle::Locked {
                chosen_option_id,
                locked_at,
            } => {
                self.lifecycle = Lifecycle::Completed {
                    chosen_option_id: *chosen_option_id,
                    locked_at: *locked_at,
                    outcome,
                    reflection,
                    completed_at: Timestamp::now(),
                };
                Ok(())
            }
        }
    }

    /// Checks that the decision may be deleted. Locked and completed
    /// decisions are permanent records.
    ///
    /// # Errors
    ///
    /// - `InvalidState` if not in `Draft`
    pub fn ensure_deletable(&self) -> Result<(), DecisionError> {
        self.ensure_draft("delete")
    }

    fn ensure_draft(&self, action: &str) -> Result<(), DecisionError> {
        if self.lifecycle.is_draft() {
            Ok(())
        } else {
            Err(DecisionError::invalid_state(format!(
                "cannot {} a {} decision",
                action,
                self.lifecycle.name()
            )))
        }
    }

    fn validate_title(title: &str) -> Result<(), ValidationError> {
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        Ok(())
    }

    fn validate_options(options: &[DecisionOption]) -> Result<(), ValidationError> {
        if !(MIN_OPTIONS..=MAX_OPTIONS).contains(&options.len()) {
            return Err(ValidationError::out_of_range(
                "options",
                MIN_OPTIONS as i32,
                MAX_OPTIONS as i32,
                options.len() as i32,
            ));
        }
        for (i, option) in options.iter().enumerate() {
            if options[..i].iter().any(|o| o.id() == option.id()) {
                return Err(ValidationError::invalid_format(
                    "options",
                    format!("duplicate option id {}", option.id()),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner() -> UserId {
        UserId::new("user-1").unwrap()
    }

    fn option(name: &str, pro: &str, con: &str) -> DecisionOption {
        DecisionOption::new(
            OptionId::new(),
            name.to_string(),
            vec![pro.to_string()],
            vec![con.to_string()],
        )
        .unwrap()
    }

    fn draft() -> DecisionDraft {
        DecisionDraft {
            title: "Should I change jobs?".to_string(),
            context: None,
            confidence: Confidence::try_new(3).unwrap(),
            options: vec![
                option("Stay", "stable", "boring"),
                option("Leave", "growth", "risk"),
            ],
        }
    }

    fn new_decision() -> Decision {
        Decision::create(DecisionId::new(), owner(), draft()).unwrap()
    }

    #[test]
    fn create_starts_in_draft_with_nothing_set() {
        let decision = new_decision();
        assert!(decision.lifecycle().is_draft());
        assert!(decision.chosen_option_id().is_none());
        assert!(decision.locked_at().is_none());
        assert!(decision.completed_at().is_none());
        assert!(decision.outcome().is_none());
        assert_eq!(decision.options().len(), 2);
    }

    #[test]
    fn create_rejects_blank_title() {
        let mut d = draft();
        d.title = "   ".to_string();
        assert!(Decision::create(DecisionId::new(), owner(), d).is_err());
    }

    #[test]
    fn create_rejects_too_few_options() {
        let mut d = draft();
        d.options.truncate(1);
        let err = Decision::create(DecisionId::new(), owner(), d).unwrap_err();
        assert!(matches!(err, DecisionError::Validation { .. }));
    }

    #[test]
    fn create_rejects_too_many_options() {
        let mut d = draft();
        for i in 0..3 {
            d.options.push(option(&format!("Extra {}", i), "p", "c"));
        }
        assert_eq!(d.options.len(), 5);
        assert!(Decision::create(DecisionId::new(), owner(), d).is_err());
    }

    #[test]
    fn create_rejects_duplicate_option_ids() {
        let mut d = draft();
        let dup = d.options[0].clone();
        d.options[1] = dup;
        let err = Decision::create(DecisionId::new(), owner(), d).unwrap_err();
        assert!(matches!(err, DecisionError::Validation { .. }));
    }

    #[test]
    fn lock_sets_chosen_option_and_timestamp() {
        let mut decision = new_decision();
        let chosen = *decision.options()[1].id();

        decision.lock(chosen).unwrap();

        assert!(decision.lifecycle().is_locked());
        assert_eq!(decision.chosen_option_id(), Some(&chosen));
        assert!(decision.locked_at().is_some());
    }

    #[test]
    fn lock_rejects_unknown_option_and_leaves_decision_unchanged() {
        let mut decision = new_decision();
        let before = decision.clone();

        let err = decision.lock(OptionId::new()).unwrap_err();

        assert!(matches!(err, DecisionError::Validation { .. }));
        assert_eq!(decision, before);
    }

    #[test]
    fn lock_twice_fails_and_preserves_original_timestamp() {
        let mut decision = new_decision();
        let chosen = *decision.options()[0].id();
        decision.lock(chosen).unwrap();
        let locked_at = *decision.locked_at().unwrap();

        let err = decision.lock(chosen).unwrap_err();

        assert!(matches!(err, DecisionError::InvalidState(_)));
        assert_eq!(decision.locked_at(), Some(&locked_at));
    }

    #[test]
    fn complete_before_lock_fails() {
        let mut decision = new_decision();
        let err = decision.complete(Outcome::Good, None).unwrap_err();
        assert!(matches!(err, DecisionError::InvalidState(_)));
        assert!(decision.lifecycle().is_draft());
    }

    #[test]
    fn complete_records_outcome_and_reflection() {
        let mut decision = new_decision();
        let chosen = *decision.options()[1].id();
        decision.lock(chosen).unwrap();

        decision
            .complete(Outcome::Good, Some("went well".to_string()))
            .unwrap();

        assert!(decision.lifecycle().is_completed());
        assert_eq!(decision.outcome(), Some(Outcome::Good));
        assert_eq!(decision.reflection(), Some("went well"));
        assert!(decision.completed_at().is_some());
        // The lock fields survive the transition.
        assert_eq!(decision.chosen_option_id(), Some(&chosen));
        assert!(decision.locked_at().is_some());
    }

    #[test]
    fn complete_twice_fails_and_preserves_first_outcome() {
        let mut decision = new_decision();
        let chosen = *decision.options()[0].id();
        decision.lock(chosen).unwrap();
        decision.complete(Outcome::Bad, None).unwrap();
        let completed_at = *decision.completed_at().unwrap();

        let err = decision
            .complete(Outcome::Good, Some("revision".to_string()))
            .unwrap_err();

        assert!(matches!(err, DecisionError::InvalidState(_)));
        assert_eq!(decision.outcome(), Some(Outcome::Bad));
        assert_eq!(decision.reflection(), None);
        assert_eq!(decision.completed_at(), Some(&completed_at));
    }

    #[test]
    fn apply_updates_only_supplied_fields() {
        let mut decision = new_decision();
        let original_options = decision.options().to_vec();

        decision
            .apply(DecisionPatch {
                title: Some("Should I relocate?".to_string()),
                confidence: Some(Confidence::try_new(5).unwrap()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(decision.title(), "Should I relocate?");
        assert_eq!(decision.confidence().value(), 5);
        assert_eq!(decision.context(), None);
        assert_eq!(decision.options(), original_options.as_slice());
    }

    #[test]
    fn apply_is_all_or_nothing() {
        let mut decision = new_decision();
        let before = decision.clone();

        // Valid title together with an invalid option set: nothing applies.
        let err = decision
            .apply(DecisionPatch {
                title: Some("New title".to_string()),
                options: Some(vec![option("Only one", "p", "c")]),
                ..Default::default()
            })
            .unwrap_err();

        assert!(matches!(err, DecisionError::Validation { .. }));
        assert_eq!(decision, before);
    }

    #[test]
    fn default_patch_is_empty() {
        assert!(DecisionPatch::default().is_empty());
        let patch = DecisionPatch {
            title: Some("t".to_string()),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }

    #[test]
    fn apply_fails_on_locked_decision_even_without_changes() {
        let mut decision = new_decision();
        let chosen = *decision.options()[0].id();
        decision.lock(chosen).unwrap();

        let err = decision.apply(DecisionPatch::default()).unwrap_err();
        assert!(matches!(err, DecisionError::InvalidState(_)));
    }

    #[test]
    fn ensure_deletable_rejects_locked_and_completed() {
        let mut decision = new_decision();
        assert!(decision.ensure_deletable().is_ok());

        let chosen = *decision.options()[0].id();
        decision.lock(chosen).unwrap();
        assert!(decision.ensure_deletable().is_err());

        decision.complete(Outcome::Neutral, None).unwrap();
        assert!(decision.ensure_deletable().is_err());
    }

    #[test]
    fn lifecycle_serializes_with_state_tag() {
        let mut decision = new_decision();
        let chosen = *decision.options()[0].id();
        decision.lock(chosen).unwrap();

        let json = serde_json::to_value(decision.lifecycle()).unwrap();
        assert_eq!(json["state"], "locked");
        assert!(json["locked_at"].is_string());
    }
}
