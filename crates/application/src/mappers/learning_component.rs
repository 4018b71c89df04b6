//! Mappers for the learning-component family

use domain::{
    ComponentId, ComponentKind, Dimensions, LearningComponent, MarkerColor, Orientation, Position,
    Projector, ValidationFailure, Whiteboard,
};

use crate::dto::{LearningComponentDto, ProjectorDto, WhiteboardDto};

use super::EntityMapper;

/// Converts between [`Projector`] and [`ProjectorDto`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectorMapper;

impl EntityMapper for ProjectorMapper {
    type Entity = Projector;
    type Dto = ProjectorDto;

    fn to_dto(&self, entity: &Self::Entity) -> Self::Dto {
        ProjectorDto {
            id: entity.id().as_str().to_owned(),
            orientation: entity.orientation().as_str().to_owned(),
            x: entity.position().x(),
            y: entity.position().y(),
            z: entity.position().z(),
            width: entity.dimensions().width(),
            length: entity.dimensions().length(),
            height: entity.dimensions().height(),
            projected_content: entity.projected_content().to_owned(),
            is_deleted: entity.is_deleted(),
        }
    }

    fn to_entity(&self, dto: &Self::Dto) -> Result<Self::Entity, ValidationFailure> {
        let mut failure = ValidationFailure::new();

        let id = failure.check(
            "id",
            ComponentId::try_new(ComponentKind::Projector, &dto.id),
            &format!(
                "must match the {} tag format",
                ComponentKind::Projector.tag_shape()
            ),
        );
        let orientation = failure.check(
            "orientation",
            Orientation::try_new(&dto.orientation),
            Orientation::REQUIREMENT,
        );
        let position = failure.check(
            "position",
            Position::try_new(dto.x, dto.y, dto.z),
            "coordinates are out of range",
        );
        let dimensions = failure.check(
            "dimensions",
            Dimensions::try_new(dto.width, dto.length, dto.height),
            Dimensions::REQUIREMENT,
        );

        match (id, orientation, position, dimensions) {
            (Some(id), Some(orientation), Some(position), Some(dimensions)) => {
                let mut projector = Projector::new(
                    id,
                    orientation,
                    position,
                    dimensions,
                    dto.projected_content.clone(),
                );
                if dto.is_deleted {
                    projector.soft_delete();
                }
                Ok(projector)
            }
            _ => Err(failure),
        }
    }
}

/// Converts between [`Whiteboard`] and [`WhiteboardDto`]
#[derive(Debug, Clone, Copy, Default)]
pub struct WhiteboardMapper;

impl EntityMapper for WhiteboardMapper {
    type Entity = Whiteboard;
    type Dto = WhiteboardDto;

    fn to_dto(&self, entity: &Self::Entity) -> Self::Dto {
        WhiteboardDto {
            id: entity.id().as_str().to_owned(),
            orientation: entity.orientation().as_str().to_owned(),
            x: entity.position().x(),
            y: entity.position().y(),
            z: entity.position().z(),
            width: entity.dimensions().width(),
            length: entity.dimensions().length(),
            height: entity.dimensions().height(),
            marker_color: entity.marker_color().as_str().to_owned(),
            is_deleted: entity.is_deleted(),
        }
    }

    fn to_entity(&self, dto: &Self::Dto) -> Result<Self::Entity, ValidationFailure> {
        let mut failure = ValidationFailure::new();

        let id = failure.check(
            "id",
            ComponentId::try_new(ComponentKind::Whiteboard, &dto.id),
            &format!(
                "must match the {} tag format",
                ComponentKind::Whiteboard.tag_shape()
            ),
        );
        let orientation = failure.check(
            "orientation",
            Orientation::try_new(&dto.orientation),
            Orientation::REQUIREMENT,
        );
        let position = failure.check(
            "position",
            Position::try_new(dto.x, dto.y, dto.z),
            "coordinates are out of range",
        );
        let dimensions = failure.check(
            "dimensions",
            Dimensions::try_new(dto.width, dto.length, dto.height),
            Dimensions::REQUIREMENT,
        );
        let marker_color = failure.check(
            "marker_color",
            MarkerColor::try_new(&dto.marker_color),
            MarkerColor::REQUIREMENT,
        );

        match (id, orientation, position, dimensions, marker_color) {
            (Some(id), Some(orientation), Some(position), Some(dimensions), Some(marker_color)) => {
                let mut whiteboard =
                    Whiteboard::new(id, orientation, position, dimensions, marker_color);
                if dto.is_deleted {
                    whiteboard.soft_delete();
                }
                Ok(whiteboard)
            }
            _ => Err(failure),
        }
    }
}

/// Outbound dispatch: resolve the mapper from the entity's variant tag
#[must_use]
pub fn component_to_dto(component: &LearningComponent) -> LearningComponentDto {
    match component {
        LearningComponent::Projector(projector) => {
            LearningComponentDto::Projector(ProjectorMapper.to_dto(projector))
        }
        LearningComponent::Whiteboard(whiteboard) => {
            LearningComponentDto::Whiteboard(WhiteboardMapper.to_dto(whiteboard))
        }
    }
}

/// Inbound dispatch: the tagged DTO names the intended variant
///
/// # Errors
///
/// Returns the aggregated [`ValidationFailure`] of the variant mapper.
pub fn component_to_entity(dto: &LearningComponentDto) -> Result<LearningComponent, ValidationFailure> {
    match dto {
        LearningComponentDto::Projector(inner) => ProjectorMapper
            .to_entity(inner)
            .map(LearningComponent::Projector),
        LearningComponentDto::Whiteboard(inner) => WhiteboardMapper
            .to_entity(inner)
            .map(LearningComponent::Whiteboard),
    }
}
