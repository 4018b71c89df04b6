//! Application services

mod component_catalog;

pub use component_catalog::ComponentCatalogService;
