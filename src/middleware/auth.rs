use anyhow::anyhow;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header, request::Parts},
    middleware::Next,
    response::Response,
};
use storefront_auth::{Identity, verify_token};
use storefront_core::AppError;
use tracing::debug;

use crate::state::AppState;

const BEARER_PREFIX: &str = "Bearer ";

/// Resolves the caller's identity from the request headers.
///
/// Performs exactly one user store read, and only after the token has been
/// verified and its payload validated.
pub async fn resolve_identity(headers: &HeaderMap, state: &AppState) -> Result<Identity, AppError> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .ok_or(AppError::MissingBearer)?;

    let payload = verify_token(token, &state.jwt_config).inspect_err(|err| {
        debug!(error = %err, "Token rejected");
    })?;

    let user = state
        .users
        .find_by_id(&payload.id)
        .await?
        .ok_or(AppError::UserNotFound)?;

    Ok(Identity {
        username: user.username,
        name: user.name,
        id: user.id.to_string(),
        is_admin: user.is_admin,
    })
}

/// Middleware that authenticates the request and attaches its [`Identity`].
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let identity = resolve_identity(req.headers(), &state).await?;
    req.extensions_mut().insert(identity);
    Ok(next.run(req).await)
}

/// Extractor for the identity attached by [`require_auth`] or
/// [`require_admin`](crate::middleware::admin::require_admin).
///
/// Rejects with a 500 when used on a route without either middleware.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Identity);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                AppError::Internal(anyhow!(
                    "identity requested on a route without authentication middleware"
                ))
            })
    }
}
