//! Orientation value object - cardinal direction of a facility component
//!
//! # Examples
//!
//! ```
//! use domain::Orientation;
//!
//! // Parsing is trimmed and case-insensitive
//! let orientation = Orientation::new("  NoRth ").unwrap();
//! assert_eq!(orientation, Orientation::North);
//! assert_eq!(orientation.as_str(), "north");
//!
//! // Anything outside the cardinal set is rejected
//! assert!(Orientation::try_new("north-west").is_none());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationFailure;

/// Cardinal direction a component faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    North,
    South,
    East,
    West,
}

impl Orientation {
    /// Parse a raw orientation string; `None` on any violation
    ///
    /// Input is trimmed and matched case-insensitively against the fixed
    /// cardinal set.
    #[must_use]
    pub fn try_new(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "north" => Some(Self::North),
            "south" => Some(Self::South),
            "east" => Some(Self::East),
            "west" => Some(Self::West),
            _ => None,
        }
    }

    /// Parse a raw orientation string, failing with a field error
    ///
    /// # Errors
    ///
    /// Returns a single-error [`ValidationFailure`] naming `orientation` when
    /// the input is not one of the four cardinal directions.
    pub fn new(raw: &str) -> Result<Self, ValidationFailure> {
        Self::try_new(raw)
            .ok_or_else(|| ValidationFailure::of("orientation", Self::REQUIREMENT))
    }

    /// Requirement text used in field errors
    pub const REQUIREMENT: &'static str = "must be one of: north, south, east, west";

    /// Canonical lowercase form
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        }
    }

    /// All orientations, in declaration order
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::North, Self::South, Self::East, Self::West]
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for Orientation {
    type Error = ValidationFailure;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_cardinal_directions_are_accepted() {
        assert_eq!(Orientation::try_new("north"), Some(Orientation::North));
        assert_eq!(Orientation::try_new("south"), Some(Orientation::South));
        assert_eq!(Orientation::try_new("east"), Some(Orientation::East));
        assert_eq!(Orientation::try_new("west"), Some(Orientation::West));
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!(Orientation::try_new("NORTH"), Some(Orientation::North));
        assert_eq!(Orientation::try_new("WeSt"), Some(Orientation::West));
    }

    #[test]
    fn parsing_trims_whitespace() {
        assert_eq!(Orientation::try_new("  east  "), Some(Orientation::East));
    }

    #[test]
    fn blank_input_is_rejected() {
        assert_eq!(Orientation::try_new(""), None);
        assert_eq!(Orientation::try_new("   "), None);
    }

    #[test]
    fn non_cardinal_input_is_rejected() {
        assert_eq!(Orientation::try_new("north-east"), None);
        assert_eq!(Orientation::try_new("up"), None);
    }

    #[test]
    fn new_reports_the_offending_field() {
        let failure = Orientation::new("sideways").unwrap_err();
        assert_eq!(failure.len(), 1);
        assert_eq!(failure.errors()[0].field(), "orientation");
    }

    #[test]
    fn canonical_form_round_trips() {
        for orientation in Orientation::all() {
            let reparsed = Orientation::new(orientation.as_str()).expect("canonical form parses");
            assert_eq!(orientation, reparsed);
        }
    }

    #[test]
    fn serializes_to_lowercase() {
        assert_eq!(
            serde_json::to_string(&Orientation::North).expect("serialize"),
            "\"north\""
        );
    }

    #[test]
    fn deserializes_from_lowercase() {
        let parsed: Orientation = serde_json::from_str("\"west\"").expect("deserialize");
        assert_eq!(parsed, Orientation::West);
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn accepted_iff_trimmed_lowercase_is_cardinal(s in "\\PC{0,12}") {
            let canonical = s.trim().to_lowercase();
            let expected = matches!(canonical.as_str(), "north" | "south" | "east" | "west");
            prop_assert_eq!(Orientation::try_new(&s).is_some(), expected);
        }

        #[test]
        fn canonical_form_always_reparses(
            orientation in prop::sample::select(Orientation::all().to_vec())
        ) {
            let reparsed = Orientation::try_new(orientation.as_str());
            prop_assert_eq!(reparsed, Some(orientation));
        }
    }
}
