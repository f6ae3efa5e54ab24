//! # Storefront DB
//!
//! Database pool, migrations and error translation for the Storefront API.
//!
//! Repositories run their queries against the [`PgPool`] built here and pass
//! every `sqlx::Error` through [`map_db_err`], so constraint violations reach
//! the HTTP layer as client errors instead of opaque 500s.
//!
//! # Example
//!
//! ```ignore
//! use storefront_db::{init_db_pool, map_db_err, run_migrations};
//!
//! let pool = init_db_pool(&config).await?;
//! run_migrations(&pool).await?;
//!
//! sqlx::query("DELETE FROM users").execute(&pool).await.map_err(map_db_err)?;
//! ```

use sqlx::postgres::PgPoolOptions;
use sqlx::types::Uuid;
use storefront_config::AppConfig;
use storefront_core::AppError;
use tracing::{info, warn};

// Re-export PgPool for convenience
pub use sqlx::PgPool;

/// SQLSTATE codes with a client-facing meaning.
mod sqlstate {
    pub const UNIQUE_VIOLATION: &str = "23505";
    pub const CHECK_VIOLATION: &str = "23514";
    pub const NOT_NULL_VIOLATION: &str = "23502";
    pub const STRING_DATA_RIGHT_TRUNCATION: &str = "22001";
    pub const INVALID_TEXT_REPRESENTATION: &str = "22P02";
}

/// Connects a PostgreSQL pool using the configured URL and pool size.
pub async fn init_db_pool(config: &AppConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(&config.database_url)
        .await?;

    info!(
        max_connections = config.db_max_connections,
        "Connected to user store"
    );
    Ok(pool)
}

/// Applies the embedded migrations from the workspace `migrations/` directory.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}

/// Translates a driver error into an [`AppError`].
pub fn map_db_err(err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if let Some(mapped) = classify(db_err.code().as_deref(), db_err.message()) {
            warn!(
                code = db_err.code().as_deref().unwrap_or_default(),
                constraint = db_err.constraint().unwrap_or_default(),
                "Constraint violation"
            );
            return mapped;
        }
    }

    AppError::Internal(err.into())
}

/// Maps a SQLSTATE code to the client error it represents, if any.
pub fn classify(code: Option<&str>, message: &str) -> Option<AppError> {
    match code? {
        sqlstate::UNIQUE_VIOLATION => Some(AppError::DuplicateKey(message.to_string())),
        sqlstate::CHECK_VIOLATION
        | sqlstate::NOT_NULL_VIOLATION
        | sqlstate::STRING_DATA_RIGHT_TRUNCATION => Some(AppError::DbValidation(message.to_string())),
        sqlstate::INVALID_TEXT_REPRESENTATION => Some(AppError::Cast(message.to_string())),
        _ => None,
    }
}

/// Parses an opaque record id, failing the way a bad id cast does in the store.
pub fn parse_id(value: &str, path: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(value).map_err(|_| {
        AppError::Cast(format!(
            "Cast to Uuid failed for value \"{value}\" at path \"{path}\""
        ))
    })
}
