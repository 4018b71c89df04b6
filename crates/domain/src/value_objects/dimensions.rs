//! Dimensions value object - physical extent of a learning component
//!
//! # Examples
//!
//! ```
//! use domain::Dimensions;
//!
//! let dimensions = Dimensions::new(1.2, 0.8, 2.0).unwrap();
//! assert!((dimensions.width() - 1.2).abs() < f64::EPSILON);
//!
//! // Every side must be strictly positive
//! assert!(Dimensions::try_new(0.0, 1.0, 1.0).is_none());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationFailure;

/// Width, length and height of a component in meters
///
/// All three sides are strictly positive; a zero side would describe a
/// component with no physical extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    width: f64,
    length: f64,
    height: f64,
}

impl Dimensions {
    /// Construct dimensions; `None` unless all sides are strictly positive
    ///
    /// NaN fails the strict comparison and is rejected with the rest.
    #[must_use]
    pub fn try_new(width: f64, length: f64, height: f64) -> Option<Self> {
        if width > 0.0 && length > 0.0 && height > 0.0 {
            Some(Self {
                width,
                length,
                height,
            })
        } else {
            None
        }
    }

    /// Construct dimensions, failing with a field error on violation
    ///
    /// # Errors
    ///
    /// Returns a single-error [`ValidationFailure`] naming `dimensions` when
    /// any side is zero, negative or NaN.
    pub fn new(width: f64, length: f64, height: f64) -> Result<Self, ValidationFailure> {
        Self::try_new(width, length, height)
            .ok_or_else(|| ValidationFailure::of("dimensions", Self::REQUIREMENT))
    }

    /// Requirement text used in field errors
    pub const REQUIREMENT: &'static str = "width, length and height must all be strictly positive";

    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub const fn length(&self) -> f64 {
        self.length
    }

    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.width, self.length, self.height)
    }
}
