//! Component identifier value object
//!
//! Component ids are fixed-width asset tags whose pattern depends on the kind
//! of component: `PRJ-0042` tags a projector, `WHB-0042` a whiteboard. The
//! kind discriminator is supplied at construction time; an unrecognized kind
//! string is a rejection like any other invalid input, never a panic.
//!
//! # Examples
//!
//! ```
//! use domain::{ComponentId, ComponentKind};
//!
//! let id = ComponentId::new(ComponentKind::Projector, "PRJ-0042").unwrap();
//! assert_eq!(id.as_str(), "PRJ-0042");
//! assert_eq!(id.kind(), ComponentKind::Projector);
//!
//! // A whiteboard tag is not a projector tag
//! assert!(ComponentId::try_new(ComponentKind::Projector, "WHB-0042").is_none());
//!
//! // The discriminator itself may come in as a raw string
//! assert!(ComponentId::try_from_kind_str("beamer", "PRJ-0042").is_none());
//! ```

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationFailure;

static PROJECTOR_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^PRJ-\d{4}$").expect("projector id pattern is valid")
});

static WHITEBOARD_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^WHB-\d{4}$").expect("whiteboard id pattern is valid")
});

/// Kind discriminator for the learning-component family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Projector,
    Whiteboard,
}

impl ComponentKind {
    /// Parse a raw kind discriminator; `None` when unrecognized
    #[must_use]
    pub fn try_new(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "projector" => Some(Self::Projector),
            "whiteboard" => Some(Self::Whiteboard),
            _ => None,
        }
    }

    /// Parse a raw kind discriminator, failing with a field error
    ///
    /// # Errors
    ///
    /// Returns a single-error [`ValidationFailure`] naming `kind`.
    pub fn new(raw: &str) -> Result<Self, ValidationFailure> {
        Self::try_new(raw)
            .ok_or_else(|| ValidationFailure::of("kind", "must be one of: projector, whiteboard"))
    }

    /// Canonical lowercase form
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Projector => "projector",
            Self::Whiteboard => "whiteboard",
        }
    }

    /// Id pattern for this kind
    fn pattern(self) -> &'static Regex {
        match self {
            Self::Projector => &PROJECTOR_ID_RE,
            Self::Whiteboard => &WHITEBOARD_ID_RE,
        }
    }

    /// Tag shape expected for this kind, for error messages
    #[must_use]
    pub const fn tag_shape(&self) -> &'static str {
        match self {
            Self::Projector => "PRJ-0000",
            Self::Whiteboard => "WHB-0000",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A validated component asset tag, bound to its kind
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComponentId {
    kind: ComponentKind,
    value: String,
}

impl ComponentId {
    /// Construct an id for a known kind; `None` unless the tag matches
    /// the kind's fixed-width pattern
    #[must_use]
    pub fn try_new(kind: ComponentKind, raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        kind.pattern().is_match(trimmed).then(|| Self {
            kind,
            value: trimmed.to_owned(),
        })
    }

    /// Construct an id, resolving the kind from a raw discriminator string
    ///
    /// An unrecognized kind is a rejection, not a panic.
    #[must_use]
    pub fn try_from_kind_str(kind: &str, raw: &str) -> Option<Self> {
        Self::try_new(ComponentKind::try_new(kind)?, raw)
    }

    /// Construct an id, failing with a field error on violation
    ///
    /// # Errors
    ///
    /// Returns a single-error [`ValidationFailure`] naming `id`.
    pub fn new(kind: ComponentKind, raw: &str) -> Result<Self, ValidationFailure> {
        Self::try_new(kind, raw).ok_or_else(|| {
            ValidationFailure::of(
                "id",
                format!("must match the {} tag format", kind.tag_shape()),
            )
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub const fn kind(&self) -> ComponentKind {
        self.kind
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
