use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::middleware::timeout::request_timeout;
use crate::modules::users::router::init_users_router;
use crate::state::AppState;
use storefront_core::AppError;

pub fn init_router(state: AppState) -> Router {
    let timeout = state.request_timeout;

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/ping", get(ping))
        .nest("/api/users", init_users_router(state.clone()))
        .fallback(unknown_endpoint)
        .method_not_allowed_fallback(unknown_endpoint)
        .with_state(state)
        .layer(middleware::from_fn_with_state(timeout, request_timeout))
        .layer(middleware::from_fn(logging_middleware))
}

async fn ping() -> &'static str {
    "pong"
}

async fn unknown_endpoint() -> AppError {
    AppError::UnknownEndpoint
}
