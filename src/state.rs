use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use storefront_config::{AppConfig, JwtConfig};
use storefront_db::{init_db_pool, run_migrations};

use crate::modules::users::repository::{PgUserRepository, UserRepository};

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub jwt_config: JwtConfig,
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(users: Arc<dyn UserRepository>, config: &AppConfig) -> Self {
        Self {
            users,
            jwt_config: config.jwt.clone(),
            request_timeout: config.request_timeout,
        }
    }
}

/// Connects to the user store, applies migrations and builds the state.
pub async fn init_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let pool = init_db_pool(config)
        .await
        .context("failed to connect to the user store")?;
    run_migrations(&pool)
        .await
        .context("failed to apply migrations")?;

    Ok(AppState::new(Arc::new(PgUserRepository::new(pool)), config))
}
