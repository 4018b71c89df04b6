//! Application-level errors

use domain::ValidationFailure;
use thiserror::Error;

/// Errors that can occur in the application layer
///
/// Validation failures pass through unchanged so the boundary collaborator
/// sees the full field-by-field report; they are never retried and never
/// truncated.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Aggregated domain validation failure
    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    /// Entity not found
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    /// Storage collaborator failed
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ApplicationError {
    /// Create a not found error
    pub fn not_found(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_failure_passes_through_unchanged() {
        let mut failure = ValidationFailure::of("orientation", "must be a cardinal direction");
        failure.push("marker_color", "must be an allowed color");

        let error: ApplicationError = failure.clone().into();
        match error {
            ApplicationError::Validation(inner) => assert_eq!(inner, failure),
            other => unreachable!("expected Validation, got {other}"),
        }
    }

    #[test]
    fn not_found_error_message() {
        let error = ApplicationError::not_found("LearningComponent", "PRJ-0042");
        assert_eq!(error.to_string(), "LearningComponent not found: PRJ-0042");
    }

    #[test]
    fn storage_error_message() {
        let error = ApplicationError::Storage("connection refused".to_owned());
        assert_eq!(error.to_string(), "Storage error: connection refused");
    }
}
