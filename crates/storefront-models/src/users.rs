//! User domain models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use storefront_core::serde::deserialize_normalized_username;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A user row as stored, including the password hash.
///
/// Never serialized; convert to [`User`] before it leaves the service layer.
#[derive(Debug, Clone, FromRow)]
pub struct UserRecord {
    pub id: Uuid,
    pub name: String,
    pub username: String,
    pub password_hash: String,
    pub is_admin: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Fields written when a user is created. The store assigns id and timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUserRecord {
    pub name: String,
    pub username: String,
    pub password_hash: String,
    pub is_admin: bool,
}

/// Public view of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub username: String,
    pub is_admin: bool,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            username: record.username,
            is_admin: record.is_admin,
        }
    }
}

/// Registration request body.
///
/// The username is trimmed and lower-cased before the length rule runs.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewUserDto {
    pub name: String,
    #[serde(deserialize_with = "deserialize_normalized_username")]
    #[validate(length(min = 5, message = "Username must contain at least 5 character(s)"))]
    pub username: String,
    #[validate(length(min = 5, message = "Password must contain at least 5 character(s)"))]
    pub password: String,
    pub is_admin: bool,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub name: String,
}
