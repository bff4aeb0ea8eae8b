//! Candidate option within a decision.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{OptionId, ValidationError};

/// One candidate choice within a decision, with supporting pros and cons.
///
/// # Invariants
///
/// - `name` is non-blank
/// - at least one non-blank pro and one non-blank con
///
/// The entry wizard enforces these before submission, but the aggregate
/// re-validates every option it accepts; the caller is never trusted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionOption {
    id: OptionId,
    name: String,
    pros: Vec<String>,
    cons: Vec<String>,
}

impl DecisionOption {
    /// Creates a validated option.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name is blank, or no non-blank pro/con exists
    pub fn new(
        id: OptionId,
        name: String,
        pros: Vec<String>,
        cons: Vec<String>,
    ) -> Result<Self, ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("option.name"));
        }
        if !pros.iter().any(|p| !p.trim().is_empty()) {
            return Err(ValidationError::empty_field("option.pros"));
        }
        if !cons.iter().any(|c| !c.trim().is_empty()) {
            return Err(ValidationError::empty_field("option.cons"));
        }
        Ok(Self {
            id,
            name,
            pros,
            cons,
        })
    }

    /// Returns the option ID.
    pub fn id(&self) -> &OptionId {
        &self.id
    }

    /// Returns the option name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the pros, in display order.
    pub fn pros(&self) -> &[String] {
        &self.pros
    }

    /// Returns the cons, in display order.
    pub fn cons(&self) -> &[String] {
        &self.cons
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option_with(name: &str, pros: &[&str], cons: &[&str]) -> Result<DecisionOption, ValidationError> {
        DecisionOption::new(
            OptionId::new(),
            name.to_string(),
            pros.iter().map(|s| s.to_string()).collect(),
            cons.iter().map(|s| s.to_string()).collect(),
        )
    }

    #[test]
    fn option_accepts_valid_shape() {
        let opt = option_with("Stay", &["stable"], &["boring"]).unwrap();
        assert_eq!(opt.name(), "Stay");
        assert_eq!(opt.pros(), &["stable".to_string()]);
        assert_eq!(opt.cons(), &["boring".to_string()]);
    }

    #[test]
    fn option_rejects_blank_name() {
        assert!(option_with("", &["a"], &["b"]).is_err());
        assert!(option_with("   ", &["a"], &["b"]).is_err());
    }

    #[test]
    fn option_rejects_missing_pros() {
        assert!(option_with("Leave", &[], &["risk"]).is_err());
        assert!(option_with("Leave", &["", "  "], &["risk"]).is_err());
    }

    #[test]
    fn option_rejects_missing_cons() {
        assert!(option_with("Leave", &["growth"], &[]).is_err());
        assert!(option_with("Leave", &["growth"], &[" "]).is_err());
    }

    #[test]
    fn option_keeps_blank_entries_alongside_real_ones() {
        // Blank lines are tolerated as long as one real entry exists;
        // display order is preserved as entered.
        let opt = option_with("Leave", &["", "growth"], &["risk", ""]).unwrap();
        assert_eq!(opt.pros().len(), 2);
        assert_eq!(opt.cons().len(), 2);
    }
}
