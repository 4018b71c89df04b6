//! Transfer object for accounts

use serde::{Deserialize, Serialize};

/// Wire representation of an account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountDto {
    pub id: String,
    pub user_name: String,
    pub identity_number: String,
    /// RFC 3339 timestamp
    pub created_at: String,
}
