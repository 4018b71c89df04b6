//! Transfer objects for the learning-component family
//!
//! Flat, validation-free carriers with primitive fields only. These are the
//! boundary representation: inbound they are untrusted and re-validated by
//! the mappers, outbound they are a plain repackaging of an already valid
//! entity.

use serde::{Deserialize, Serialize};

/// Wire representation of a projector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectorDto {
    pub id: String,
    pub orientation: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub width: f64,
    pub length: f64,
    pub height: f64,
    pub projected_content: String,
    #[serde(default)]
    pub is_deleted: bool,
}

/// Wire representation of a whiteboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhiteboardDto {
    pub id: String,
    pub orientation: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub width: f64,
    pub length: f64,
    pub height: f64,
    pub marker_color: String,
    #[serde(default)]
    pub is_deleted: bool,
}

/// Id-less projector payload used by creation flows
///
/// The asset tag is assigned by the caller once known; `with_id` produces the
/// full transfer object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProjectorDto {
    pub orientation: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub width: f64,
    pub length: f64,
    pub height: f64,
    pub projected_content: String,
}

impl NewProjectorDto {
    /// Attach an asset tag, yielding a full [`ProjectorDto`]
    #[must_use]
    pub fn with_id(self, id: impl Into<String>) -> ProjectorDto {
        ProjectorDto {
            id: id.into(),
            orientation: self.orientation,
            x: self.x,
            y: self.y,
            z: self.z,
            width: self.width,
            length: self.length,
            height: self.height,
            projected_content: self.projected_content,
            is_deleted: false,
        }
    }
}

/// Id-less whiteboard payload used by creation flows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewWhiteboardDto {
    pub orientation: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub width: f64,
    pub length: f64,
    pub height: f64,
    pub marker_color: String,
}

impl NewWhiteboardDto {
    /// Attach an asset tag, yielding a full [`WhiteboardDto`]
    #[must_use]
    pub fn with_id(self, id: impl Into<String>) -> WhiteboardDto {
        WhiteboardDto {
            id: id.into(),
            orientation: self.orientation,
            x: self.x,
            y: self.y,
            z: self.z,
            width: self.width,
            length: self.length,
            height: self.height,
            marker_color: self.marker_color,
            is_deleted: false,
        }
    }
}

/// Tagged union over the component transfer objects
///
/// The `kind` tag is the externally supplied variant discriminator: an
/// inbound payload declares its target variant here, never inside the flat
/// DTO itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LearningComponentDto {
    Projector(ProjectorDto),
    Whiteboard(WhiteboardDto),
}

impl LearningComponentDto {
    /// The asset tag carried by the payload
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Projector(dto) => &dto.id,
            Self::Whiteboard(dto) => &dto.id,
        }
    }
}
