//! Domain layer for the campus facilities system
//!
//! Contains the self-validating value objects, validated entities, aggregated
//! validation errors and the paginated result window. Everything here is a
//! pure, side-effect-free value computation: no I/O, no async, no shared
//! mutable state. The fixed lookup tables (allowed colors, orientations,
//! identifier patterns) are process-wide read-only statics.

pub mod entities;
pub mod errors;
pub mod pagination;
pub mod value_objects;

pub use entities::*;
pub use errors::{ValidationError, ValidationFailure};
pub use pagination::Page;
pub use value_objects::*;
