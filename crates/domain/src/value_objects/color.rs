//! Marker color value object with a fixed allow-list
//!
//! # Examples
//!
//! ```
//! use domain::MarkerColor;
//!
//! // Input is trimmed, matched case-insensitively and canonicalized
//! let color = MarkerColor::new("  BLUE ").unwrap();
//! assert_eq!(color.as_str(), "blue");
//!
//! // Colors differing only by case are the same value
//! assert_eq!(MarkerColor::new("Red").unwrap(), MarkerColor::new("red").unwrap());
//!
//! // Anything off the allow-list is rejected
//! assert!(MarkerColor::try_new("chartreuse").is_none());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationFailure;

/// Colors a whiteboard marker may have
///
/// Fixed at process start; the list is never extended at runtime.
pub const ALLOWED_COLORS: [&str; 4] = ["black", "blue", "green", "red"];

/// A validated, canonically lowercase marker color
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarkerColor {
    value: String,
}

impl MarkerColor {
    /// Construct a color; `None` unless the input is on the allow-list
    ///
    /// Matching is trimmed and case-insensitive; the stored form is the
    /// lowercase canonical entry, so equality and hashing ignore input casing.
    #[must_use]
    pub fn try_new(raw: &str) -> Option<Self> {
        let canonical = raw.trim().to_lowercase();
        ALLOWED_COLORS
            .contains(&canonical.as_str())
            .then_some(Self { value: canonical })
    }

    /// Construct a color, failing with a field error on violation
    ///
    /// # Errors
    ///
    /// Returns a single-error [`ValidationFailure`] naming `marker_color`
    /// when the input is not an allowed color.
    pub fn new(raw: &str) -> Result<Self, ValidationFailure> {
        Self::try_new(raw).ok_or_else(|| ValidationFailure::of("marker_color", Self::REQUIREMENT))
    }

    /// Requirement text used in field errors
    pub const REQUIREMENT: &'static str = "must be one of: black, blue, green, red";

    /// Canonical lowercase form
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for MarkerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<&str> for MarkerColor {
    type Error = ValidationFailure;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allow_listed_colors_are_accepted() {
        for color in ALLOWED_COLORS {
            assert!(MarkerColor::try_new(color).is_some(), "{color} should parse");
        }
    }

    #[test]
    fn matching_is_case_insensitive() {
        let color = MarkerColor::try_new("GREEN").expect("allowed");
        assert_eq!(color.as_str(), "green");
    }

    #[test]
    fn input_is_trimmed() {
        let color = MarkerColor::try_new("  black ").expect("allowed");
        assert_eq!(color.as_str(), "black");
    }

    #[test]
    fn colors_differing_only_by_case_are_equal() {
        let upper = MarkerColor::new("Blue").expect("allowed");
        let lower = MarkerColor::new("blue").expect("allowed");
        assert_eq!(upper, lower);
    }

    #[test]
    fn hash_is_consistent_with_equality() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(MarkerColor::new("Red").expect("allowed"));
        set.insert(MarkerColor::new("RED").expect("allowed"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn unknown_color_is_rejected() {
        assert!(MarkerColor::try_new("chartreuse").is_none());
        assert!(MarkerColor::try_new("Chartreuse").is_none());
    }

    #[test]
    fn blank_input_is_rejected() {
        assert!(MarkerColor::try_new("").is_none());
        assert!(MarkerColor::try_new("   ").is_none());
    }

    #[test]
    fn new_reports_the_offending_field() {
        let failure = MarkerColor::new("magenta").unwrap_err();
        assert_eq!(failure.len(), 1);
        assert_eq!(failure.errors()[0].field(), "marker_color");
    }

    #[test]
    fn serialization_is_transparent() {
        let color = MarkerColor::new("green").expect("allowed");
        assert_eq!(serde_json::to_string(&color).expect("serialize"), "\"green\"");
    }
}
