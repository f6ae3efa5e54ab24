//! Middleware for request processing.
//!
//! - [`auth`]: bearer token authentication and the [`auth::AuthUser`] extractor
//! - [`admin`]: admin authorization layered on top of authentication
//! - [`timeout`]: per-request time limit reported as a JSON error
//!
//! # Authentication Flow
//!
//! 1. Client sends request with `Authorization: Bearer <token>` header
//! 2. The token signature and expiry are verified against the configured secret
//! 3. The claim set is checked against the token payload schema
//! 4. The referenced user is loaded from the user store (one read)
//! 5. An [`storefront_auth::Identity`] is inserted into the request extensions
//! 6. The handler runs and reads it through [`auth::AuthUser`]
//!
//! Any failing step ends the request with the corresponding
//! [`storefront_core::AppError`] response; the handler never runs.
//!
//! # Example
//!
//! ```ignore
//! use axum::{Router, middleware, routing::get};
//! use crate::middleware::auth::{AuthUser, require_auth};
//!
//! async fn profile(AuthUser(identity): AuthUser) -> String {
//!     identity.username
//! }
//!
//! let routes = Router::new()
//!     .route("/profile", get(profile))
//!     .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));
//! ```

pub mod admin;
pub mod auth;
pub mod timeout;
