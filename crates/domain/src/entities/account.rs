//! Account entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::value_objects::{IdentityNumber, UserName};

/// A user account in the facilities system
///
/// Built only from validated value objects; the identity number and user name
/// are guaranteed well-formed for the lifetime of the account.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    id: Uuid,
    user_name: UserName,
    identity_number: IdentityNumber,
    created_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account with a fresh id and the current timestamp
    #[must_use]
    pub fn new(user_name: UserName, identity_number: IdentityNumber) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_name,
            identity_number,
            created_at: Utc::now(),
        }
    }

    /// Rehydrate an account from already validated parts
    #[must_use]
    pub const fn from_parts(
        id: Uuid,
        user_name: UserName,
        identity_number: IdentityNumber,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_name,
            identity_number,
            created_at,
        }
    }

    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub const fn user_name(&self) -> &UserName {
        &self.user_name
    }

    #[must_use]
    pub const fn identity_number(&self) -> &IdentityNumber {
        &self.identity_number
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accounts_get_unique_ids() {
        let user_name = UserName::new("jane.doe").expect("valid");
        let number = IdentityNumber::new("1234567").expect("valid");
        let first = Account::new(user_name.clone(), number.clone());
        let second = Account::new(user_name, number);
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn from_parts_preserves_everything() {
        let id = Uuid::new_v4();
        let created_at = Utc::now();
        let account = Account::from_parts(
            id,
            UserName::new("jane.doe").expect("valid"),
            IdentityNumber::new("1234567").expect("valid"),
            created_at,
        );
        assert_eq!(account.id(), id);
        assert_eq!(account.user_name().as_str(), "jane.doe");
        assert_eq!(account.identity_number().as_str(), "1234567");
        assert_eq!(account.created_at(), created_at);
    }
}
