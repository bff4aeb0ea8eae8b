//! Confidence value object (1-5 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Self-reported confidence in a decision: 1 (a coin flip) to 5 (certain).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Confidence(u8);

impl Confidence {
    /// Minimum confidence rating.
    pub const MIN: u8 = 1;

    /// Maximum confidence rating.
    pub const MAX: u8 = 5;

    /// Creates a Confidence, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::out_of_range(
                "confidence",
                Self::MIN as i32,
                Self::MAX as i32,
                value as i32,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self.0 {
            1 => "Coin flip",
            2 => "Doubtful",
            3 => "Leaning",
            4 => "Confident",
            _ => "Certain",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/5", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_try_new_accepts_valid_values() {
        for v in 1..=5 {
            assert_eq!(Confidence::try_new(v).unwrap().value(), v);
        }
    }

    #[test]
    fn confidence_try_new_rejects_invalid_values() {
        assert!(Confidence::try_new(0).is_err());
        assert!(Confidence::try_new(6).is_err());
        assert!(Confidence::try_new(255).is_err());
    }

    #[test]
    fn confidence_out_of_range_error_names_field() {
        match Confidence::try_new(0) {
            Err(ValidationError::OutOfRange { field, min, max, actual }) => {
                assert_eq!(field, "confidence");
                assert_eq!(min, 1);
                assert_eq!(max, 5);
                assert_eq!(actual, 0);
            }
            other => panic!("Expected OutOfRange error, got {:?}", other),
        }
    }

    #[test]
    fn confidence_label_covers_all_values() {
        assert_eq!(Confidence::try_new(1).unwrap().label(), "Coin flip");
        assert_eq!(Confidence::try_new(3).unwrap().label(), "Leaning");
        assert_eq!(Confidence::try_new(5).unwrap().label(), "Certain");
    }

    #[test]
    fn confidence_ordering_works() {
        assert!(Confidence::try_new(1).unwrap() < Confidence::try_new(5).unwrap());
    }

    #[test]
    fn confidence_displays_with_scale() {
        assert_eq!(format!("{}", Confidence::try_new(4).unwrap()), "4/5");
    }

    #[test]
    fn confidence_serializes_as_plain_number() {
        let c = Confidence::try_new(3).unwrap();
        assert_eq!(serde_json::to_string(&c).unwrap(), "3");
    }
}
