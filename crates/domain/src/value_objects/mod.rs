//! Value Objects - Immutable, identity-less domain primitives
//!
//! Every type here is constructed through a `try_new`/`new` pair: `try_new`
//! never fails and returns `None` on any invariant violation, `new` wraps it
//! and fails with a single-error [`crate::ValidationFailure`] naming the
//! offending parameter. Once constructed a value object is valid for its
//! entire lifetime.

mod color;
mod component_id;
mod dimensions;
mod floor_area;
mod identity_number;
mod orientation;
mod position;
mod user_name;

pub use color::{ALLOWED_COLORS, MarkerColor};
pub use component_id::{ComponentId, ComponentKind};
pub use dimensions::Dimensions;
pub use floor_area::FloorArea;
pub use identity_number::IdentityNumber;
pub use orientation::Orientation;
pub use position::Position;
pub use user_name::UserName;

/// Marker trait for value objects
///
/// Equality is structural: two value objects of the same type are equal iff
/// their constituent fields are element-wise equal, which the `PartialEq`
/// derives on each type provide. Types whose fields permit it also derive
/// `Eq` and `Hash`, keeping hashing consistent with equality.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

impl ValueObject for MarkerColor {}
impl ValueObject for ComponentId {}
impl ValueObject for ComponentKind {}
impl ValueObject for Dimensions {}
impl ValueObject for FloorArea {}
impl ValueObject for IdentityNumber {}
impl ValueObject for Orientation {}
impl ValueObject for Position {}
impl ValueObject for UserName {}
