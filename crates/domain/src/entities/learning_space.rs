//! Learning space entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::ValidationFailure;
use crate::value_objects::FloorArea;

/// A bookable room on a campus floor
#[derive(Debug, Clone, PartialEq)]
pub struct LearningSpace {
    id: Uuid,
    name: String,
    area: FloorArea,
    capacity: u32,
    created_at: DateTime<Utc>,
}

impl LearningSpace {
    /// Create a new learning space with a fresh id
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationFailure`] naming `name` when the name is blank;
    /// the area is already validated by construction.
    pub fn new(
        name: impl Into<String>,
        area: FloorArea,
        capacity: u32,
    ) -> Result<Self, ValidationFailure> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationFailure::of("name", "must not be blank"));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            area,
            capacity,
            created_at: Utc::now(),
        })
    }

    /// Rehydrate a learning space from already validated parts
    #[must_use]
    pub const fn from_parts(
        id: Uuid,
        name: String,
        area: FloorArea,
        capacity: u32,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            area,
            capacity,
            created_at,
        }
    }

    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn area(&self) -> FloorArea {
        self.area
    }

    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_space_is_created() {
        let area = FloorArea::new(8.0, 6.0).expect("valid");
        let space = LearningSpace::new("Seminar Room 2", area, 24).expect("valid");
        assert_eq!(space.name(), "Seminar Room 2");
        assert_eq!(space.capacity(), 24);
    }

    #[test]
    fn blank_name_is_rejected() {
        let area = FloorArea::new(8.0, 6.0).expect("valid");
        let failure = LearningSpace::new("   ", area, 24).unwrap_err();
        assert_eq!(failure.errors()[0].field(), "name");
    }

    #[test]
    fn new_spaces_get_unique_ids() {
        let area = FloorArea::new(8.0, 6.0).expect("valid");
        let first = LearningSpace::new("A", area, 10).expect("valid");
        let second = LearningSpace::new("A", area, 10).expect("valid");
        assert_ne!(first.id(), second.id());
    }
}
