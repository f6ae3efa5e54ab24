//! Token payload and request identity.
//!
//! - [`TokenPayload`]: the user-identifying part of a signed token
//! - [`Claims`]: the full claim set as it is encoded, payload plus timestamps
//! - [`Identity`]: what the authentication middleware attaches to a request

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use storefront_core::{AppError, ValidationIssue};
use utoipa::ToSchema;

/// User reference carried inside a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPayload {
    pub username: String,
    pub name: String,
    /// Opaque user id, as assigned by the user store.
    pub id: String,
}

impl TokenPayload {
    /// Checks a verified claim set against the payload schema.
    ///
    /// `username`, `name` and `id` must all be present and be strings. Every
    /// violation is reported, not just the first one.
    pub fn from_claims(claims: &Map<String, Value>) -> Result<Self, AppError> {
        let mut issues = Vec::new();
        let mut string_field = |field: &str| match claims.get(field) {
            Some(Value::String(value)) => Some(value.clone()),
            None | Some(Value::Null) => {
                issues.push(ValidationIssue::required(field));
                None
            }
            Some(other) => {
                issues.push(ValidationIssue::new(
                    "invalid_type",
                    &[field],
                    format!("Expected string, received {}", json_type(other)),
                ));
                None
            }
        };

        let username = string_field("username");
        let name = string_field("name");
        let id = string_field("id");

        match (username, name, id) {
            (Some(username), Some(name), Some(id)) => Ok(Self { username, name, id }),
            _ => Err(AppError::Validation(issues)),
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Claim set as it is signed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    #[serde(flatten)]
    pub user: TokenPayload,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}

/// Identity of the caller, resolved from a verified token and the user store.
///
/// Lives in the request extensions for the duration of one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub username: String,
    pub name: String,
    pub id: String,
    pub is_admin: bool,
}
