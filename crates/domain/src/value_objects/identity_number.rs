//! Identity number value object - matriculation/staff number of an account

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationFailure;

/// Fixed-width identity pattern, compiled once at first use
static IDENTITY_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^\d{7}$").expect("identity number pattern is valid")
});

/// A validated seven-digit identity number
///
/// # Examples
///
/// ```
/// use domain::IdentityNumber;
///
/// let number = IdentityNumber::new(" 1234567 ").unwrap();
/// assert_eq!(number.as_str(), "1234567");
///
/// assert!(IdentityNumber::try_new("12345").is_none());
/// assert!(IdentityNumber::try_new("12345678").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdentityNumber {
    value: String,
}

impl IdentityNumber {
    /// Construct an identity number; `None` unless exactly seven digits
    #[must_use]
    pub fn try_new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        IDENTITY_NUMBER_RE.is_match(trimmed).then(|| Self {
            value: trimmed.to_owned(),
        })
    }

    /// Construct an identity number, failing with a field error on violation
    ///
    /// # Errors
    ///
    /// Returns a single-error [`ValidationFailure`] naming `identity_number`.
    pub fn new(raw: &str) -> Result<Self, ValidationFailure> {
        Self::try_new(raw)
            .ok_or_else(|| ValidationFailure::of("identity_number", Self::REQUIREMENT))
    }

    /// Requirement text used in field errors
    pub const REQUIREMENT: &'static str = "must be exactly 7 digits";

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for IdentityNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<&str> for IdentityNumber {
    type Error = ValidationFailure;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn exactly_seven_digits_always_parse(raw in "[0-9]{7}") {
            prop_assert!(IdentityNumber::try_new(&raw).is_some());
        }

        #[test]
        fn other_widths_never_parse(raw in "[0-9]{0,6}|[0-9]{8,12}") {
            prop_assert!(IdentityNumber::try_new(&raw).is_none());
        }
    }
}
