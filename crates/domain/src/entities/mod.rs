//! Entities - domain objects with identity, built only from validated parts

mod account;
mod learning_component;
mod learning_space;

pub use account::Account;
pub use learning_component::{LearningComponent, Projector, Whiteboard};
pub use learning_space::LearningSpace;
