use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use storefront_core::AppError;
use tracing::warn;

use crate::middleware::auth::resolve_identity;
use crate::state::AppState;

/// Middleware that admits only authenticated administrators.
///
/// Authentication runs first and its failures are reported unchanged; the
/// admin check only sees a fully resolved identity.
pub async fn require_admin(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let identity = resolve_identity(req.headers(), &state).await?;

    if !identity.is_admin {
        warn!(username = %identity.username, "Non-admin attempted admin route");
        return Err(AppError::NotAdmin);
    }

    req.extensions_mut().insert(identity);
    Ok(next.run(req).await)
}
