//! # Storefront Auth
//!
//! Token types and JWT utilities for the Storefront API.
//!
//! - [`claims`]: the signed token payload and the per-request [`Identity`]
//! - [`jwt`]: token creation and verification
//!
//! Verification reports failures as [`storefront_core::AppError`] variants so
//! the HTTP layer can tell an expired token from a forged or malformed one.

pub mod claims;
pub mod jwt;

pub use claims::{Claims, Identity, TokenPayload};
pub use jwt::{create_token, verify_token};
