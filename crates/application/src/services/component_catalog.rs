//! Catalog service for learning components
//!
//! Thin orchestration over the storage port: inbound payloads are validated
//! through the mappers, outbound entities are repackaged as DTOs. The service
//! adds no validation of its own.

use std::sync::Arc;

use domain::{ComponentId, ComponentKind, Page};
use tracing::{debug, instrument, warn};

use crate::{
    dto::LearningComponentDto,
    error::ApplicationError,
    mappers::{component_to_dto, component_to_entity},
    ports::ComponentStore,
};

/// Catalog of the learning components on campus
#[derive(Debug)]
pub struct ComponentCatalogService<S: ComponentStore> {
    store: Arc<S>,
}

impl<S: ComponentStore> Clone for ComponentCatalogService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: ComponentStore> ComponentCatalogService<S> {
    /// Create a new catalog service
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Validate an inbound payload, persist the entity and echo it back
    ///
    /// # Errors
    ///
    /// Propagates the aggregated validation failure unchanged, or a storage
    /// error from the collaborator.
    #[instrument(skip(self, dto), fields(id = dto.id()))]
    pub async fn create(
        &self,
        dto: &LearningComponentDto,
    ) -> Result<LearningComponentDto, ApplicationError> {
        let component = component_to_entity(dto).inspect_err(|failure| {
            warn!(errors = failure.len(), "rejected invalid component payload");
        })?;
        self.store.save(&component).await?;
        debug!(kind = %component.kind(), "component stored");
        Ok(component_to_dto(&component))
    }

    /// Fetch one component by kind and raw asset tag
    ///
    /// # Errors
    ///
    /// Fails with a validation failure for a malformed tag, `NotFound` when
    /// no component carries it.
    #[instrument(skip(self))]
    pub async fn get(
        &self,
        kind: ComponentKind,
        id: &str,
    ) -> Result<LearningComponentDto, ApplicationError> {
        let id = ComponentId::new(kind, id)?;
        let component = self
            .store
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("LearningComponent", id.as_str()))?;
        Ok(component_to_dto(&component))
    }

    /// List one page of components as DTOs, metadata preserved
    ///
    /// # Errors
    ///
    /// Propagates storage errors from the listing collaborator.
    #[instrument(skip(self))]
    pub async fn list_page(
        &self,
        page_index: u32,
        page_size: u32,
    ) -> Result<Page<LearningComponentDto>, ApplicationError> {
        let page = self.store.list(page_index, page_size).await?;
        debug!(
            returned = page.len(),
            total = page.total_count(),
            "listed components"
        );
        Ok(page.map(|component| component_to_dto(&component)))
    }

    /// Soft-delete a component, keeping its record
    ///
    /// # Errors
    ///
    /// Fails with a validation failure for a malformed tag, `NotFound` when
    /// no component carries it, or a storage error.
    #[instrument(skip(self))]
    pub async fn retire(&self, kind: ComponentKind, id: &str) -> Result<(), ApplicationError> {
        let id = ComponentId::new(kind, id)?;
        let mut component = self
            .store
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("LearningComponent", id.as_str()))?;
        component.soft_delete();
        self.store.save(&component).await
    }
}

#[cfg(test)]
mod tests {
    use domain::{Dimensions, LearningComponent, MarkerColor, Orientation, Position, Whiteboard};

    use super::*;
    use crate::dto::WhiteboardDto;
    use crate::ports::MockComponentStore;

    fn whiteboard_entity() -> LearningComponent {
        LearningComponent::Whiteboard(Whiteboard::new(
            ComponentId::new(ComponentKind::Whiteboard, "WHB-0001").expect("valid"),
            Orientation::North,
            Position::new(0.0, 1.0, 1.2).expect("valid"),
            Dimensions::new(2.0, 0.05, 1.2).expect("valid"),
            MarkerColor::new("blue").expect("allowed"),
        ))
    }

    fn whiteboard_dto() -> LearningComponentDto {
        LearningComponentDto::Whiteboard(WhiteboardDto {
            id: "WHB-0001".to_owned(),
            orientation: "north".to_owned(),
            x: 0.0,
            y: 1.0,
            z: 1.2,
            width: 2.0,
            length: 0.05,
            height: 1.2,
            marker_color: "blue".to_owned(),
            is_deleted: false,
        })
    }

    #[tokio::test]
    async fn create_validates_persists_and_echoes() {
        let mut store = MockComponentStore::new();
        store
            .expect_save()
            .withf(|component| component.id().as_str() == "WHB-0001")
            .once()
            .returning(|_| Ok(()));

        let service = ComponentCatalogService::new(Arc::new(store));
        let echoed = service.create(&whiteboard_dto()).await.expect("valid payload");
        assert_eq!(echoed, whiteboard_dto());
    }

    #[tokio::test]
    async fn create_rejects_invalid_payload_without_touching_the_store() {
        let store = MockComponentStore::new();
        let service = ComponentCatalogService::new(Arc::new(store));

        let dto = match whiteboard_dto() {
            LearningComponentDto::Whiteboard(mut inner) => {
                inner.marker_color = "chartreuse".to_owned();
                LearningComponentDto::Whiteboard(inner)
            }
            other => other,
        };

        let error = service.create(&dto).await.unwrap_err();
        match error {
            ApplicationError::Validation(failure) => {
                assert_eq!(failure.len(), 1);
                assert_eq!(failure.errors()[0].field(), "marker_color");
            }
            other => unreachable!("expected Validation, got {other}"),
        }
    }

    #[tokio::test]
    async fn get_returns_not_found_for_unknown_tag() {
        let mut store = MockComponentStore::new();
        store.expect_find_by_id().returning(|_| Ok(None));

        let service = ComponentCatalogService::new(Arc::new(store));
        let error = service
            .get(ComponentKind::Whiteboard, "WHB-9999")
            .await
            .unwrap_err();
        assert!(matches!(error, ApplicationError::NotFound { .. }));
    }

    #[tokio::test]
    async fn get_rejects_malformed_tags_before_hitting_the_store() {
        let store = MockComponentStore::new();
        let service = ComponentCatalogService::new(Arc::new(store));

        let error = service.get(ComponentKind::Whiteboard, "nope").await.unwrap_err();
        assert!(matches!(error, ApplicationError::Validation(_)));
    }

    #[tokio::test]
    async fn list_page_maps_entities_and_keeps_metadata() {
        let mut store = MockComponentStore::new();
        store.expect_list().returning(|_, _| {
            Ok(Page::new(vec![whiteboard_entity()], 7, 3, 2).expect("valid window"))
        });

        let service = ComponentCatalogService::new(Arc::new(store));
        let page = service.list_page(2, 3).await.expect("listing succeeds");
        assert_eq!(page.len(), 1);
        assert_eq!(page.total_pages(), 3);
        assert_eq!(page.items()[0].id(), "WHB-0001");
    }

    #[tokio::test]
    async fn retire_soft_deletes_and_saves() {
        let mut store = MockComponentStore::new();
        store
            .expect_find_by_id()
            .returning(|_| Ok(Some(whiteboard_entity())));
        store
            .expect_save()
            .withf(|component| component.is_deleted())
            .once()
            .returning(|_| Ok(()));

        let service = ComponentCatalogService::new(Arc::new(store));
        service
            .retire(ComponentKind::Whiteboard, "WHB-0001")
            .await
            .expect("retire succeeds");
    }
}
