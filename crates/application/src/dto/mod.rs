//! Transfer objects - flat, validation-free boundary carriers

mod account;
mod learning_component;
mod learning_space;

pub use account::AccountDto;
pub use learning_component::{
    LearningComponentDto, NewProjectorDto, NewWhiteboardDto, ProjectorDto, WhiteboardDto,
};
pub use learning_space::LearningSpaceDto;
