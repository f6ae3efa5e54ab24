use storefront_auth::{TokenPayload, create_token};
use storefront_config::JwtConfig;
use storefront_core::{AppError, hash_password, verify_password};
use storefront_models::{LoginCredentials, LoginResponse, NewUserDto, NewUserRecord, User};
use tracing::{info, instrument, warn};

use super::repository::UserRepository;

pub struct UserService;

impl UserService {
    /// Hashes the password and stores the user. Uniqueness of the username is
    /// enforced by the store and surfaces as [`AppError::DuplicateKey`].
    #[instrument(skip_all, fields(username = %dto.username))]
    pub async fn register_user(
        users: &dyn UserRepository,
        dto: NewUserDto,
    ) -> Result<User, AppError> {
        let password_hash = hash_password(&dto.password)?;

        let record = users
            .create(NewUserRecord {
                name: dto.name,
                username: dto.username,
                password_hash,
                is_admin: dto.is_admin,
            })
            .await?;

        info!(user_id = %record.id, "User registered");
        Ok(record.into())
    }

    #[instrument(skip_all, fields(username = %dto.username))]
    pub async fn login_user(
        users: &dyn UserRepository,
        dto: LoginCredentials,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        let Some(record) = users.find_by_username(&dto.username).await? else {
            warn!("Login for unknown username");
            return Err(AppError::InvalidCredentials);
        };

        if !verify_password(&dto.password, &record.password_hash)? {
            warn!(user_id = %record.id, "Login with wrong password");
            return Err(AppError::InvalidCredentials);
        }

        let token = create_token(
            &TokenPayload {
                username: record.username.clone(),
                name: record.name.clone(),
                id: record.id.to_string(),
            },
            jwt_config,
        )?;

        Ok(LoginResponse {
            token,
            username: record.username,
            name: record.name,
        })
    }

    pub async fn get_users(users: &dyn UserRepository) -> Result<Vec<User>, AppError> {
        let records = users.list().await?;
        Ok(records.into_iter().map(User::from).collect())
    }
}
