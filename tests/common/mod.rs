#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use storefront::modules::users::repository::UserRepository;
use storefront::router::init_router;
use storefront::state::AppState;
use storefront_config::JwtConfig;
use storefront_core::{AppError, hash_password};
use storefront_db::parse_id;
use storefront_models::{NewUserRecord, UserRecord};
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_SECRET: &str = "integration-test-secret";

/// User store kept in memory, with the same id and uniqueness rules as the
/// PostgreSQL store.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<UserRecord>>,
}

impl InMemoryUserRepository {
    pub fn insert(&self, name: &str, username: &str, password: &str, is_admin: bool) -> UserRecord {
        let record = UserRecord {
            id: Uuid::new_v4(),
            name: name.to_string(),
            username: username.to_string(),
            password_hash: hash_password(password).unwrap(),
            is_admin,
            created_at: chrono::Utc::now(),
        };
        self.users.lock().unwrap().push(record.clone());
        record
    }

    pub fn remove(&self, id: Uuid) {
        self.users.lock().unwrap().retain(|user| user.id != id);
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<UserRecord>, AppError> {
        let id = parse_id(id, "id")?;
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.id == id)
            .cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>, AppError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.username == username)
            .cloned())
    }

    async fn create(&self, user: NewUserRecord) -> Result<UserRecord, AppError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|existing| existing.username == user.username) {
            return Err(AppError::DuplicateKey(
                "duplicate key value violates unique constraint \"users_username_key\"".into(),
            ));
        }

        let record = UserRecord {
            id: Uuid::new_v4(),
            name: user.name,
            username: user.username,
            password_hash: user.password_hash,
            is_admin: user.is_admin,
            created_at: chrono::Utc::now(),
        };
        users.push(record.clone());
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<UserRecord>, AppError> {
        Ok(self.users.lock().unwrap().clone())
    }
}

pub struct TestApp {
    pub router: Router,
    pub users: Arc<InMemoryUserRepository>,
    pub jwt_config: JwtConfig,
}

pub fn setup_test_app() -> TestApp {
    let users = Arc::new(InMemoryUserRepository::default());
    let jwt_config = JwtConfig::new(TEST_SECRET);
    let state = AppState {
        users: users.clone(),
        jwt_config: jwt_config.clone(),
        request_timeout: Duration::from_secs(10),
    };

    TestApp {
        router: init_router(state),
        users,
        jwt_config,
    }
}

pub fn generate_unique_username() -> String {
    format!("user_{}", &Uuid::new_v4().simple().to_string()[..12])
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let body = match body {
        Some(json) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    (status, value)
}

/// Logs in through the API and returns the issued token.
pub async fn login(app: &Router, username: &str, password: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/api/users/login",
        None,
        Some(serde_json::json!({ "username": username, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {body}");
    body["token"].as_str().unwrap().to_string()
}
