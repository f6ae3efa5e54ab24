use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::middleware::admin::require_admin;
use crate::middleware::auth::require_auth;
use crate::modules::users::controller::{get_current_user, get_users, login_user, register_user};
use crate::state::AppState;

pub fn init_users_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(get_users)
                .route_layer(middleware::from_fn_with_state(state.clone(), require_admin))
                .post(register_user),
        )
        .route("/login", post(login_user))
        .route(
            "/me",
            get(get_current_user)
                .route_layer(middleware::from_fn_with_state(state, require_auth)),
        )
}
