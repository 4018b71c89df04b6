//! Ports - interfaces implemented by external collaborators

mod component_store;

pub use component_store::ComponentStore;

#[cfg(test)]
pub use component_store::MockComponentStore;
