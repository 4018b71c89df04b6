//! Mapper for learning spaces

use chrono::{DateTime, Utc};
use domain::{FloorArea, LearningSpace, ValidationFailure};
use uuid::Uuid;

use crate::dto::LearningSpaceDto;

use super::EntityMapper;

/// Converts between [`LearningSpace`] and [`LearningSpaceDto`]
#[derive(Debug, Clone, Copy, Default)]
pub struct LearningSpaceMapper;

impl EntityMapper for LearningSpaceMapper {
    type Entity = LearningSpace;
    type Dto = LearningSpaceDto;

    fn to_dto(&self, entity: &Self::Entity) -> Self::Dto {
        LearningSpaceDto {
            id: entity.id().to_string(),
            name: entity.name().to_owned(),
            length: entity.area().length(),
            height: entity.area().height(),
            capacity: entity.capacity(),
            created_at: entity.created_at().to_rfc3339(),
        }
    }

    fn to_entity(&self, dto: &Self::Dto) -> Result<Self::Entity, ValidationFailure> {
        let mut failure = ValidationFailure::new();

        let id = failure.check(
            "id",
            Uuid::parse_str(dto.id.trim()).ok(),
            "must be a valid UUID",
        );
        let name = failure.check(
            "name",
            (!dto.name.trim().is_empty()).then(|| dto.name.clone()),
            "must not be blank",
        );
        let area = failure.check(
            "area",
            FloorArea::try_new(dto.length, dto.height),
            FloorArea::REQUIREMENT,
        );
        let created_at = failure.check(
            "created_at",
            DateTime::parse_from_rfc3339(dto.created_at.trim())
                .ok()
                .map(|timestamp| timestamp.with_timezone(&Utc)),
            "must be an RFC 3339 timestamp",
        );

        match (id, name, area, created_at) {
            (Some(id), Some(name), Some(area), Some(created_at)) => Ok(
                LearningSpace::from_parts(id, name, area, dto.capacity, created_at),
            ),
            _ => Err(failure),
        }
    }
}
