//! # Storefront Config
//!
//! Configuration for the Storefront API, resolved once at process start.
//!
//! - [`app`]: process-wide settings (listen port, database, timeouts)
//! - [`jwt`]: token signing configuration
//!
//! # Environment Variables
//!
//! | Variable | Required | Default |
//! |----------|----------|---------|
//! | `PORT` | yes | |
//! | `MONGODB_URL` | yes | |
//! | `SECRET` | yes | |
//! | `TOKEN_EXPIRY` | no | `3600` |
//! | `REQUEST_TIMEOUT_SECS` | no | `30` |
//! | `DB_MAX_CONNECTIONS` | no | `5` |
//!
//! # Example
//!
//! ```ignore
//! use storefront_config::AppConfig;
//!
//! let config = AppConfig::from_env()?;
//! let jwt_config = config.jwt.clone();
//! ```

pub mod app;
pub mod jwt;

// Re-export commonly used types at crate root
pub use app::{AppConfig, ConfigError};
pub use jwt::JwtConfig;
