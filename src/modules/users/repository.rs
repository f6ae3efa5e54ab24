//! User persistence.
//!
//! [`UserRepository`] is the seam between the HTTP layer and the user store.
//! [`PgUserRepository`] is the production implementation; every driver error
//! goes through [`map_db_err`] so constraint violations keep their meaning.

use async_trait::async_trait;
use storefront_core::AppError;
use storefront_db::{PgPool, map_db_err, parse_id};
use storefront_models::{NewUserRecord, UserRecord};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Looks a user up by its opaque id.
    ///
    /// An id that is not a valid store id fails with [`AppError::Cast`].
    async fn find_by_id(&self, id: &str) -> Result<Option<UserRecord>, AppError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, AppError>;
    async fn create(&self, user: NewUserRecord) -> Result<UserRecord, AppError>;
    async fn list(&self) -> Result<Vec<UserRecord>, AppError>;
}

pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<UserRecord>, AppError> {
        let id = parse_id(id, "id")?;

        sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, name, username, password_hash, is_admin, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_err)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, AppError> {
        sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, name, username, password_hash, is_admin, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_err)
    }

    async fn create(&self, user: NewUserRecord) -> Result<UserRecord, AppError> {
        sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (name, username, password_hash, is_admin)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, username, password_hash, is_admin, created_at
            "#,
        )
        .bind(&user.name)
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(user.is_admin)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_err)
    }

    async fn list(&self) -> Result<Vec<UserRecord>, AppError> {
        sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, name, username, password_hash, is_admin, created_at
            FROM users
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_err)
    }
}
