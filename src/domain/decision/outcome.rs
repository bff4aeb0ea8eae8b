//! Outcome of a completed decision.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// How a decision turned out, judged by its owner after the fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Good,
    Neutral,
    Bad,
}

impl Outcome {
    /// All outcomes, in display order.
    pub const ALL: [Outcome; 3] = [Outcome::Good, Outcome::Neutral, Outcome::Bad];

    /// Returns the wire/display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Good => "good",
            Outcome::Neutral => "neutral",
            Outcome::Bad => "bad",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Outcome {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "good" => Ok(Outcome::Good),
            "neutral" => Ok(Outcome::Neutral),
            "bad" => Ok(Outcome::Bad),
            other => Err(ValidationError::invalid_format(
                "outcome",
                format!("expected one of good/neutral/bad, got '{}'", other),
            )),
        }
    }
}
