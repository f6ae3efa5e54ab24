//! Application error type and its HTTP mapping.
//!
//! Every layer of the API (extractors, middleware, services, repositories)
//! reports failures as an [`AppError`] variant. The [`IntoResponse`] impl is
//! the only place a failure becomes a status code and a JSON body, and it is
//! a single exhaustive match, so adding a variant forces a decision about
//! how it is rendered.
//!
//! All error bodies share the shape `{"error": <string | issue list>}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Failure kind reported for every token verification error other than expiry.
pub const TOKEN_ERROR_KIND: &str = "JsonWebTokenError";

/// Error response body used in the OpenAPI docs.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// One schema violation in a request body or token payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ValidationIssue {
    /// Machine readable rule name, e.g. `invalid_type` or `length`.
    pub code: String,
    /// Field path the violation applies to. Empty for whole-document issues.
    pub path: Vec<String>,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(code: impl Into<String>, path: &[&str], message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            path: path.iter().map(|segment| segment.to_string()).collect(),
            message: message.into(),
        }
    }

    /// Issue for a required field that was not supplied.
    pub fn required(field: &str) -> Self {
        Self::new("invalid_type", &[field], "Required")
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Please provide authentication token with bearer scheme")]
    MissingBearer,

    #[error("User not found, re-login")]
    UserNotFound,

    #[error("Admin privileges required")]
    NotAdmin,

    #[error("Invalid username or password")]
    InvalidCredentials,

    /// A row was rejected by a constraint of the user store.
    #[error("{0}")]
    DbValidation(String),

    /// An identifier could not be converted to the store's id type.
    #[error("{0}")]
    Cast(String),

    #[error("{0}")]
    DuplicateKey(String),

    #[error("Validation failed")]
    Validation(Vec<ValidationIssue>),

    #[error("{kind}:{message}")]
    InvalidToken { kind: &'static str, message: String },

    #[error("Token expired, please re-login")]
    TokenExpired,

    #[error("{0}")]
    BadRequest(String),

    #[error("Unknown endpoint")]
    UnknownEndpoint,

    #[error("Request timed out")]
    Timeout,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn invalid_token(message: impl Into<String>) -> Self {
        Self::InvalidToken {
            kind: TOKEN_ERROR_KIND,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingBearer
            | AppError::UserNotFound
            | AppError::DbValidation(_)
            | AppError::Cast(_)
            | AppError::TokenExpired
            | AppError::BadRequest(_)
            | AppError::UnknownEndpoint => StatusCode::BAD_REQUEST,
            AppError::Validation(_)
            | AppError::InvalidToken { .. }
            | AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::NotAdmin => StatusCode::FORBIDDEN,
            AppError::Timeout => StatusCode::REQUEST_TIMEOUT,
            AppError::DuplicateKey(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            AppError::Validation(issues) => json!({ "error": issues }),
            AppError::DuplicateKey(message) => {
                json!({ "error": format!("Duplicate Key Error: {message}") })
            }
            AppError::Internal(err) => {
                tracing::error!(error = ?err, "Unhandled error");
                json!({ "error": "Internal Server Error" })
            }
            other => json!({ "error": other.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|(a, _), (b, _)| a.cmp(b));

        let issues = fields
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| ValidationIssue {
                    code: error.code.to_string(),
                    path: vec![field.to_string()],
                    message: error
                        .message
                        .as_ref()
                        .map(|msg| msg.to_string())
                        .unwrap_or_else(|| format!("{field} is invalid")),
                })
            })
            .collect();

        AppError::Validation(issues)
    }
}
