//! Entity/DTO mappers
//!
//! One [`EntityMapper`] implementation per entity variant. Outward conversion
//! (`to_dto`) is total: it repackages an already valid entity and cannot
//! fail. Inward conversion (`to_entity`) treats every DTO field as untrusted,
//! attempts each value object independently and reports all violations in one
//! aggregated [`domain::ValidationFailure`].
//!
//! Dispatch over the component family happens by exhaustive `match` on the
//! entity (outbound) or on the tagged DTO (inbound, where the caller supplied
//! the variant discriminator). Adding a variant means one new mapper and one
//! new match arm per dispatcher; the compiler rejects a missing arm.

mod account;
mod learning_component;
mod learning_space;

pub use account::AccountMapper;
pub use learning_component::{
    ProjectorMapper, WhiteboardMapper, component_to_dto, component_to_entity,
};
pub use learning_space::LearningSpaceMapper;

use domain::ValidationFailure;

/// Conversion contract between one entity variant and its transfer object
pub trait EntityMapper {
    type Entity;
    type Dto;

    /// Repackage a valid entity into its wire representation; never fails
    fn to_dto(&self, entity: &Self::Entity) -> Self::Dto;

    /// Re-validate an untrusted payload into a fresh entity
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationFailure`] carrying one error per invalid field,
    /// gathered after every field was attempted.
    fn to_entity(&self, dto: &Self::Dto) -> Result<Self::Entity, ValidationFailure>;
}
