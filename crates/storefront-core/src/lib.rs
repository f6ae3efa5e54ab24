//! # Storefront Core
//!
//! Core types, errors, and utilities for the Storefront API.
//!
//! - [`errors`]: the closed [`AppError`] type and its HTTP mapping
//! - [`password`]: bcrypt password hashing and verification
//! - [`serde`]: custom deserialization helpers for request DTOs
//!
//! # Example
//!
//! ```ignore
//! use storefront_core::{AppError, hash_password};
//!
//! let hash = hash_password("secure_password")?;
//! return Err(AppError::UserNotFound);
//! ```

pub mod errors;
pub mod password;
pub mod serde;

// Re-export commonly used types at crate root
pub use errors::{AppError, ValidationIssue};
pub use password::{hash_password, verify_password};
