//! Mapper for accounts

use chrono::{DateTime, Utc};
use domain::{Account, IdentityNumber, UserName, ValidationFailure};
use uuid::Uuid;

use crate::dto::AccountDto;

use super::EntityMapper;

/// Converts between [`Account`] and [`AccountDto`]
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountMapper;

impl EntityMapper for AccountMapper {
    type Entity = Account;
    type Dto = AccountDto;

    fn to_dto(&self, entity: &Self::Entity) -> Self::Dto {
        AccountDto {
            id: entity.id().to_string(),
            user_name: entity.user_name().as_str().to_owned(),
            identity_number: entity.identity_number().as_str().to_owned(),
            created_at: entity.created_at().to_rfc3339(),
        }
    }

    fn to_entity(&self, dto: &Self::Dto) -> Result<Self::Entity, ValidationFailure> {
        let mut failure = ValidationFailure::new();

        let id = failure.check(
            "id",
            Uuid::parse_str(dto.id.trim()).ok(),
            "must be a valid UUID",
        );
        let user_name = failure.check(
            "user_name",
            UserName::try_new(&dto.user_name),
            UserName::REQUIREMENT,
        );
        let identity_number = failure.check(
            "identity_number",
            IdentityNumber::try_new(&dto.identity_number),
            IdentityNumber::REQUIREMENT,
        );
        let created_at = failure.check(
            "created_at",
            DateTime::parse_from_rfc3339(dto.created_at.trim())
                .ok()
                .map(|timestamp| timestamp.with_timezone(&Utc)),
            "must be an RFC 3339 timestamp",
        );

        match (id, user_name, identity_number, created_at) {
            (Some(id), Some(user_name), Some(identity_number), Some(created_at)) => {
                Ok(Account::from_parts(id, user_name, identity_number, created_at))
            }
            _ => Err(failure),
        }
    }
}
