//! Learning component entity family
//!
//! A closed polymorphic family of classroom equipment. Each variant carries
//! the family-common fields (asset tag, orientation, position, dimensions,
//! soft-delete flag) plus its own: a projector knows what it projects, a
//! whiteboard knows its marker color.
//!
//! The family is a tagged enum so that every dispatch site matches
//! exhaustively; adding a variant will not compile until each match site
//! handles it. Constructors only take validated value objects, so there is no
//! public path to a component with an invalid field.

use crate::value_objects::{ComponentId, ComponentKind, Dimensions, MarkerColor, Orientation, Position};

/// A projector mounted in a learning space
#[derive(Debug, Clone, PartialEq)]
pub struct Projector {
    id: ComponentId,
    orientation: Orientation,
    position: Position,
    dimensions: Dimensions,
    projected_content: String,
    is_deleted: bool,
}

impl Projector {
    /// Create a projector from validated parts
    #[must_use]
    pub fn new(
        id: ComponentId,
        orientation: Orientation,
        position: Position,
        dimensions: Dimensions,
        projected_content: impl Into<String>,
    ) -> Self {
        Self {
            id,
            orientation,
            position,
            dimensions,
            projected_content: projected_content.into(),
            is_deleted: false,
        }
    }

    #[must_use]
    pub const fn id(&self) -> &ComponentId {
        &self.id
    }

    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub const fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Free-text description of what is currently projected
    #[must_use]
    pub fn projected_content(&self) -> &str {
        &self.projected_content
    }

    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    /// Mark the projector as removed without discarding its record
    pub fn soft_delete(&mut self) {
        self.is_deleted = true;
    }

    /// Undo a soft delete
    pub fn restore(&mut self) {
        self.is_deleted = false;
    }
}

/// A whiteboard mounted in a learning space
#[derive(Debug, Clone, PartialEq)]
pub struct Whiteboard {
    id: ComponentId,
    orientation: Orientation,
    position: Position,
    dimensions: Dimensions,
    marker_color: MarkerColor,
    is_deleted: bool,
}

impl Whiteboard {
    /// Create a whiteboard from validated parts
    #[must_use]
    pub fn new(
        id: ComponentId,
        orientation: Orientation,
        position: Position,
        dimensions: Dimensions,
        marker_color: MarkerColor,
    ) -> Self {
        Self {
            id,
            orientation,
            position,
            dimensions,
            marker_color,
            is_deleted: false,
        }
    }

    #[must_use]
    pub const fn id(&self) -> &ComponentId {
        &self.id
    }

    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub const fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    #[must_use]
    pub const fn marker_color(&self) -> &MarkerColor {
        &self.marker_color
    }

    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    /// Mark the whiteboard as removed without discarding its record
    pub fn soft_delete(&mut self) {
        self.is_deleted = true;
    }

    /// Undo a soft delete
    pub fn restore(&mut self) {
        self.is_deleted = false;
    }
}

/// The closed learning-component family
#[derive(Debug, Clone, PartialEq)]
pub enum LearningComponent {
    Projector(Projector),
    Whiteboard(Whiteboard),
}

impl LearningComponent {
    /// Runtime variant tag
    #[must_use]
    pub const fn kind(&self) -> ComponentKind {
        match self {
            Self::Projector(_) => ComponentKind::Projector,
            Self::Whiteboard(_) => ComponentKind::Whiteboard,
        }
    }

    #[must_use]
    pub const fn id(&self) -> &ComponentId {
        match self {
            Self::Projector(p) => p.id(),
            Self::Whiteboard(w) => w.id(),
        }
    }

    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        match self {
            Self::Projector(p) => p.orientation(),
            Self::Whiteboard(w) => w.orientation(),
        }
    }

    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Projector(p) => p.position(),
            Self::Whiteboard(w) => w.position(),
        }
    }

    #[must_use]
    pub const fn dimensions(&self) -> Dimensions {
        match self {
            Self::Projector(p) => p.dimensions(),
            Self::Whiteboard(w) => w.dimensions(),
        }
    }

    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        match self {
            Self::Projector(p) => p.is_deleted(),
            Self::Whiteboard(w) => w.is_deleted(),
        }
    }

    /// Mark the component as removed without discarding its record
    pub fn soft_delete(&mut self) {
        match self {
            Self::Projector(p) => p.soft_delete(),
            Self::Whiteboard(w) => w.soft_delete(),
        }
    }

    /// Undo a soft delete
    pub fn restore(&mut self) {
        match self {
            Self::Projector(p) => p.restore(),
            Self::Whiteboard(w) => w.restore(),
        }
    }
}

impl From<Projector> for LearningComponent {
    fn from(projector: Projector) -> Self {
        Self::Projector(projector)
    }
}

impl From<Whiteboard> for LearningComponent {
    fn from(whiteboard: Whiteboard) -> Self {
        Self::Whiteboard(whiteboard)
    }
}
