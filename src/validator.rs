//! JSON body extraction with schema validation.
//!
//! [`ValidatedJson`] replaces `axum::Json` on every endpoint that takes a
//! body. A body that parses as JSON but does not fit the target type, or
//! fails its `validator` rules, is rejected as [`AppError::Validation`] with
//! one issue per violation. Bodies that are not JSON at all are plain
//! `400 Bad Request`s.

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use storefront_core::{AppError, ValidationIssue};
use validator::Validate;

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(map_rejection)?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}

fn map_rejection(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            AppError::Validation(vec![issue_from_data_error(&err.body_text())])
        }
        JsonRejection::JsonSyntaxError(_) => {
            AppError::bad_request("Malformed JSON in request body")
        }
        JsonRejection::MissingJsonContentType(_) => {
            AppError::bad_request("Missing 'Content-Type: application/json' header")
        }
        _ => AppError::bad_request("Invalid request body"),
    }
}

/// Turns serde's description of a shape mismatch into a [`ValidationIssue`].
///
/// Handles `missing field `x`` and the `path: message` form produced for
/// errors below the document root. Anything else becomes a root-level issue.
fn issue_from_data_error(text: &str) -> ValidationIssue {
    let detail = text
        .split_once("target type: ")
        .map_or(text, |(_, rest)| rest);
    let detail = detail
        .rfind(" at line ")
        .map_or(detail, |pos| &detail[..pos]);

    if let Some(field) = detail
        .split("missing field `")
        .nth(1)
        .and_then(|rest| rest.split('`').next())
    {
        return ValidationIssue::required(field);
    }

    match detail.split_once(": ") {
        Some((path, message)) if !path.contains(' ') => {
            let segments: Vec<&str> = path.split('.').collect();
            ValidationIssue::new("invalid_type", &segments, message)
        }
        _ => ValidationIssue::new("invalid_type", &[], detail),
    }
}
