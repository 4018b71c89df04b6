//! Floor area value object - 2D footprint of a learning space

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationFailure;

/// Two-dimensional footprint (length x height) in meters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloorArea {
    length: f64,
    height: f64,
}

impl FloorArea {
    /// Construct a floor area; `None` unless both sides are strictly positive
    #[must_use]
    pub fn try_new(length: f64, height: f64) -> Option<Self> {
        if length > 0.0 && height > 0.0 {
            Some(Self { length, height })
        } else {
            None
        }
    }

    /// Construct a floor area, failing with a field error on violation
    ///
    /// # Errors
    ///
    /// Returns a single-error [`ValidationFailure`] naming `area` when either
    /// side is zero, negative or NaN.
    pub fn new(length: f64, height: f64) -> Result<Self, ValidationFailure> {
        Self::try_new(length, height).ok_or_else(|| ValidationFailure::of("area", Self::REQUIREMENT))
    }

    /// Requirement text used in field errors
    pub const REQUIREMENT: &'static str = "length and height must both be strictly positive";

    #[must_use]
    pub const fn length(&self) -> f64 {
        self.length
    }

    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Surface in square meters
    #[must_use]
    pub fn square_meters(&self) -> f64 {
        self.length * self.height
    }
}

impl fmt::Display for FloorArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.length, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_sides_are_accepted() {
        assert!(FloorArea::try_new(8.0, 6.5).is_some());
    }

    #[test]
    fn zero_or_negative_sides_are_rejected() {
        assert!(FloorArea::try_new(0.0, 6.5).is_none());
        assert!(FloorArea::try_new(8.0, 0.0).is_none());
        assert!(FloorArea::try_new(-8.0, 6.5).is_none());
    }

    #[test]
    fn nan_is_rejected() {
        assert!(FloorArea::try_new(f64::NAN, 6.5).is_none());
    }

    #[test]
    fn new_reports_the_offending_field() {
        let failure = FloorArea::new(0.0, 1.0).unwrap_err();
        assert_eq!(failure.errors()[0].field(), "area");
    }

    #[test]
    fn square_meters_is_the_product() {
        let area = FloorArea::new(8.0, 5.0).expect("valid");
        assert!((area.square_meters() - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn serialization_roundtrip() {
        let area = FloorArea::new(8.0, 6.5).expect("valid");
        let json = serde_json::to_string(&area).expect("serialize");
        let parsed: FloorArea = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(area, parsed);
    }
}
