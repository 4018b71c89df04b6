//! Validation errors for the facilities domain
//!
//! Validation never fails fast: every constituent field of a conversion is
//! checked, and all violations are reported together in one
//! [`ValidationFailure`].
//!
//! # Examples
//!
//! ```
//! use domain::ValidationFailure;
//!
//! let mut failure = ValidationFailure::new();
//! failure.push("width", "must be strictly positive");
//! failure.push("orientation", "must be a cardinal direction");
//!
//! assert_eq!(failure.len(), 2);
//! assert_eq!(failure.errors()[0].field(), "width");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single field-level validation violation
///
/// Always owned by a [`ValidationFailure`]; it has no lifecycle of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    /// Create a violation for the given logical field
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// The logical field (parameter) the violation refers to
    ///
    /// Empty for free-text failures that are not attributable to a field.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Human-readable description of the violation
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.field.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.field, self.message)
        }
    }
}

/// Aggregated validation failure
///
/// An ordered collection of [`ValidationError`]s gathered during one
/// conversion attempt. Errors keep insertion order, so repeated validation of
/// the same input produces the same list.
///
/// # Examples
///
/// ```
/// use domain::ValidationFailure;
///
/// let failure = ValidationFailure::of("marker_color", "must be an allowed color");
/// assert_eq!(failure.len(), 1);
/// assert_eq!(
///     failure.to_string(),
///     "validation failed: marker_color: must be an allowed color"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Error, Serialize, Deserialize)]
#[error("validation failed: {}", .errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))]
pub struct ValidationFailure {
    errors: Vec<ValidationError>,
}

impl ValidationFailure {
    /// Create an empty collector
    #[must_use]
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Create a failure carrying a single field violation
    #[must_use]
    pub fn of(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            errors: vec![ValidationError::new(field, message)],
        }
    }

    /// Create a failure from a free-text message not tied to any field
    ///
    /// The message becomes a one-element error list with an empty field name.
    #[must_use]
    pub fn from_message(message: impl Into<String>) -> Self {
        Self::of("", message)
    }

    /// Append a field violation, preserving insertion order
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ValidationError::new(field, message));
    }

    /// Append every error of another failure to this one
    ///
    /// Supports validation performed at more than one layer converging into a
    /// single report.
    pub fn merge(&mut self, other: Self) {
        self.errors.extend(other.errors);
    }

    /// Record an error if `value` is absent, then pass the value through
    ///
    /// This is the aggregation step of entity construction: each constituent
    /// value object is attempted independently, and the collector decides
    /// afterwards whether the conversion as a whole fails.
    pub fn check<T>(&mut self, field: &str, value: Option<T>, message: &str) -> Option<T> {
        if value.is_none() {
            self.push(field, message);
        }
        value
    }

    /// Whether any violation has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of recorded violations
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// The recorded violations, in validation order
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Consume the failure, yielding the owned error list
    #[must_use]
    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}

impl From<ValidationError> for ValidationFailure {
    fn from(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}
