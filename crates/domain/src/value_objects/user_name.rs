//! User name value object

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationFailure;

/// Letter first, then 2-31 letters, digits, `.`, `_` or `-`
static USER_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^[A-Za-z][A-Za-z0-9._-]{2,31}$").expect("user name pattern is valid")
});

/// A validated account user name
///
/// # Examples
///
/// ```
/// use domain::UserName;
///
/// let name = UserName::new("jane.doe").unwrap();
/// assert_eq!(name.as_str(), "jane.doe");
///
/// assert!(UserName::try_new("1jane").is_none());
/// assert!(UserName::try_new("jd").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserName {
    value: String,
}

impl UserName {
    /// Construct a user name; `None` on any format violation
    #[must_use]
    pub fn try_new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        USER_NAME_RE.is_match(trimmed).then(|| Self {
            value: trimmed.to_owned(),
        })
    }

    /// Construct a user name, failing with a field error on violation
    ///
    /// # Errors
    ///
    /// Returns a single-error [`ValidationFailure`] naming `user_name`.
    pub fn new(raw: &str) -> Result<Self, ValidationFailure> {
        Self::try_new(raw).ok_or_else(|| ValidationFailure::of("user_name", Self::REQUIREMENT))
    }

    /// Requirement text used in field errors
    pub const REQUIREMENT: &'static str =
        "must start with a letter and contain 3 to 32 letters, digits, '.', '_' or '-'";

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<&str> for UserName {
    type Error = ValidationFailure;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
