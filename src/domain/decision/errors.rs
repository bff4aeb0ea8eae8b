//! Decision-specific error types.

use crate::domain::foundation::{DecisionId, ErrorCode, ValidationError};

/// Errors raised by decision operations.
///
/// Every failure the lifecycle can produce maps onto one of four kinds, so
/// the transport layer can translate mechanically: validation (caller sent
/// bad data), not found (id absent or owned by someone else), invalid state
/// (operation not allowed in the current lifecycle state), infrastructure
/// (unexpected; surfaced generically).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecisionError {
    /// Decision was not found in the caller's scope.
    NotFound(DecisionId),
    /// Operation not permitted in the decision's current state.
    InvalidState(String),
    /// Validation failed.
    Validation { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl DecisionError {
    pub fn not_found(id: DecisionId) -> Self {
        DecisionError::NotFound(id)
    }

    pub fn invalid_state(message: impl Into<String>) -> Self {
        DecisionError::InvalidState(message.into())
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        DecisionError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        DecisionError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            DecisionError::NotFound(_) => ErrorCode::DecisionNotFound,
            DecisionError::InvalidState(_) => ErrorCode::InvalidStateTransition,
            DecisionError::Validation { .. } => ErrorCode::ValidationFailed,
            DecisionError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            DecisionError::NotFound(id) => format!("Decision not found: {}", id),
            DecisionError::InvalidState(msg) => format!("Invalid state: {}", msg),
            DecisionError::Validation { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            DecisionError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for DecisionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for DecisionError {}

impl From<ValidationError> for DecisionError {
    fn from(err: ValidationError) -> Self {
        let field = match &err {
            ValidationError::EmptyField { field } => field.clone(),
            ValidationError::OutOfRange { field, .. } => field.clone(),
            ValidationError::InvalidFormat { field, .. } => field.clone(),
        };
        DecisionError::Validation {
            field,
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_decision_not_found_code() {
        let id = DecisionId::new();
        assert_eq!(
            DecisionError::not_found(id).code(),
            ErrorCode::DecisionNotFound
        );
    }

    #[test]
    fn invalid_state_maps_to_transition_code() {
        assert_eq!(
            DecisionError::invalid_state("already locked").code(),
            ErrorCode::InvalidStateTransition
        );
    }

    #[test]
    fn validation_error_converts_with_field_name() {
        let err: DecisionError = ValidationError::empty_field("title").into();
        match err {
            DecisionError::Validation { field, .. } => assert_eq!(field, "title"),
            other => panic!("Expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn display_includes_context() {
        let err = DecisionError::invalid_state("cannot edit a locked decision");
        assert_eq!(
            err.to_string(),
            "Invalid state: cannot edit a locked decision"
        );
    }
}
