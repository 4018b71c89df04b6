//! Position value object - placement of a component inside a learning space

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationFailure;

/// A point in the learning-space coordinate system
///
/// Coordinates are currently unconstrained: the domain has not fixed a
/// coordinate system yet, so `try_new` accepts every finite or non-finite
/// triple. Range validation is an open gap tracked in DESIGN.md; the type
/// still only exists once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    x: f64,
    y: f64,
    z: f64,
}

impl Position {
    /// Construct a position; currently always succeeds
    #[must_use]
    pub const fn try_new(x: f64, y: f64, z: f64) -> Option<Self> {
        Some(Self { x, y, z })
    }

    /// Construct a position, failing with a field error on violation
    ///
    /// # Errors
    ///
    /// Currently never fails; kept for symmetry with the other value objects
    /// so callers do not change when coordinate bounds arrive.
    pub fn new(x: f64, y: f64, z: f64) -> Result<Self, ValidationFailure> {
        Self::try_new(x, y, z)
            .ok_or_else(|| ValidationFailure::of("position", "coordinates are out of range"))
    }

    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub const fn z(&self) -> f64 {
        self.z
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_triple_is_accepted() {
        assert!(Position::try_new(0.0, 0.0, 0.0).is_some());
        assert!(Position::try_new(-3.5, 120.0, 2.25).is_some());
        assert!(Position::try_new(f64::MAX, f64::MIN, 0.0).is_some());
    }

    #[test]
    fn components_are_preserved() {
        let position = Position::new(1.5, 2.0, 0.75).expect("valid");
        assert!((position.x() - 1.5).abs() < f64::EPSILON);
        assert!((position.y() - 2.0).abs() < f64::EPSILON);
        assert!((position.z() - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn equality_is_component_wise() {
        let a = Position::new(1.0, 2.0, 3.0).expect("valid");
        let b = Position::new(1.0, 2.0, 3.0).expect("valid");
        let c = Position::new(1.0, 2.0, 4.0).expect("valid");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn display_format() {
        let position = Position::new(1.0, 2.5, 0.0).expect("valid");
        assert_eq!(position.to_string(), "(1, 2.5, 0)");
    }

    #[test]
    fn serialization_roundtrip() {
        let position = Position::new(4.0, 5.5, 6.25).expect("valid");
        let json = serde_json::to_string(&position).expect("serialize");
        let parsed: Position = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(position, parsed);
    }
}
