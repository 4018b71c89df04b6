//! Learning-component storage port
//!
//! Defines the interface the persistence collaborator implements. The core
//! only ever hands fully validated entities across this boundary and receives
//! already-sliced pages back; querying, filtering and sorting live behind it.

use async_trait::async_trait;
use domain::{ComponentId, LearningComponent, Page};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for learning-component persistence operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ComponentStore: Send + Sync {
    /// Persist a component (insert or update)
    async fn save(&self, component: &LearningComponent) -> Result<(), ApplicationError>;

    /// Look up a component by its asset tag
    async fn find_by_id(
        &self,
        id: &ComponentId,
    ) -> Result<Option<LearningComponent>, ApplicationError>;

    /// List one page of components
    async fn list(
        &self,
        page_index: u32,
        page_size: u32,
    ) -> Result<Page<LearningComponent>, ApplicationError>;
}
