use std::env;
use std::time::Duration;

use thiserror::Error;

use crate::jwt::{DEFAULT_TOKEN_EXPIRY, JwtConfig};

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} not defined in environment")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Immutable process configuration.
///
/// Built once in `main` and handed to the pieces that need it; nothing reads
/// the environment after startup.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    /// Connection string for the user store. Read from `MONGODB_URL`.
    pub database_url: String,
    pub db_max_connections: u32,
    pub request_timeout: Duration,
    pub jwt: JwtConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolves the configuration against an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let port = parse("PORT", required("PORT")?)?;
        let database_url = required("MONGODB_URL")?;
        let secret = required("SECRET")?;

        let token_expiry = positive(&lookup, "TOKEN_EXPIRY", DEFAULT_TOKEN_EXPIRY)?;
        let timeout_secs = positive(&lookup, "REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?;
        let db_max_connections =
            positive(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?;

        Ok(Self {
            port,
            database_url,
            db_max_connections,
            request_timeout: Duration::from_secs(timeout_secs),
            jwt: JwtConfig {
                secret,
                token_expiry,
            },
        })
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { key, value })
}

/// Optional numeric setting that must be greater than zero when present.
fn positive<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + PartialOrd + Default,
{
    let Some(value) = lookup(key) else {
        return Ok(default);
    };

    let parsed: T = parse(key, value.clone())?;
    if parsed <= T::default() {
        return Err(ConfigError::Invalid { key, value });
    }
    Ok(parsed)
}
