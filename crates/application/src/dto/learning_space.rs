//! Transfer object for learning spaces

use serde::{Deserialize, Serialize};

/// Wire representation of a learning space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningSpaceDto {
    pub id: String,
    pub name: String,
    pub length: f64,
    pub height: f64,
    pub capacity: u32,
    /// RFC 3339 timestamp
    pub created_at: String,
}
