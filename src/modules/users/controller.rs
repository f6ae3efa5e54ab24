use axum::{Json, extract::State, http::StatusCode};
use storefront_auth::Identity;
use storefront_core::AppError;
use storefront_core::errors::ErrorResponse;
use storefront_models::{LoginCredentials, LoginResponse, NewUserDto, User};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = NewUserDto,
    responses(
        (status = 201, description = "User registered successfully", body = User),
        (status = 401, description = "Request body failed validation"),
        (status = 409, description = "Username already taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip_all)]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<NewUserDto>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let user = UserService::register_user(state.users.as_ref(), dto).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Login and receive a JWT
#[utoipa::path(
    post,
    path = "/api/users/login",
    request_body = LoginCredentials,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials or request body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip_all)]
pub async fn login_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginCredentials>,
) -> Result<Json<LoginResponse>, AppError> {
    let response = UserService::login_user(state.users.as_ref(), dto, &state.jwt_config).await?;
    Ok(Json(response))
}

/// Get the identity attached to the current request
#[utoipa::path(
    get,
    path = "/api/users/me",
    responses(
        (status = 200, description = "Authenticated identity", body = Identity),
        (status = 400, description = "Missing bearer token, expired token or unknown user", body = ErrorResponse),
        (status = 401, description = "Invalid token", body = ErrorResponse),
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
pub async fn get_current_user(AuthUser(identity): AuthUser) -> Json<Identity> {
    Json(identity)
}

/// List all users (admin only)
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "List of users", body = Vec<User>),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip_all)]
pub async fn get_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = UserService::get_users(state.users.as_ref()).await?;
    Ok(Json(users))
}
