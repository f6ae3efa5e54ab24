//! JWT creation and verification.
//!
//! Tokens are HS256-signed with the configured secret and always carry an
//! `exp` claim. Verification distinguishes three outcomes the HTTP layer
//! renders differently:
//!
//! - expired signature → [`AppError::TokenExpired`]
//! - any other signature or format problem → [`AppError::InvalidToken`]
//! - a valid signature over a payload of the wrong shape →
//!   [`AppError::Validation`]
//!
//! # Example
//!
//! ```ignore
//! use storefront_auth::{create_token, verify_token, TokenPayload};
//!
//! let token = create_token(&payload, &jwt_config)?;
//! let payload = verify_token(&token, &jwt_config)?;
//! ```

use anyhow::anyhow;
use chrono::Utc;
use jsonwebtoken::errors::{Error as JwtError, ErrorKind};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde_json::{Map, Value};

use storefront_config::JwtConfig;
use storefront_core::AppError;

use crate::claims::{Claims, TokenPayload};

pub fn create_token(payload: &TokenPayload, jwt_config: &JwtConfig) -> Result<String, AppError> {
    let now = Utc::now().timestamp();

    let claims = Claims {
        user: payload.clone(),
        exp: (now + jwt_config.token_expiry).max(0) as usize,
        iat: now as usize,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow!("Failed to create token: {e}")))
}

/// Verifies the signature and expiry of `token`, then checks its payload shape.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<TokenPayload, AppError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    let data = decode::<Map<String, Value>>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map_err(map_jwt_error)?;

    TokenPayload::from_claims(&data.claims)
}

fn map_jwt_error(err: JwtError) -> AppError {
    match err.kind() {
        ErrorKind::ExpiredSignature => AppError::TokenExpired,
        ErrorKind::InvalidSignature => AppError::invalid_token("invalid signature"),
        ErrorKind::InvalidToken | ErrorKind::Base64(_) | ErrorKind::Json(_) | ErrorKind::Utf8(_) => {
            AppError::invalid_token("jwt malformed")
        }
        ErrorKind::InvalidAlgorithm => AppError::invalid_token("invalid algorithm"),
        ErrorKind::ImmatureSignature => AppError::invalid_token("jwt not active"),
        ErrorKind::MissingRequiredClaim(claim) => {
            AppError::invalid_token(format!("jwt missing required claim: {claim}"))
        }
        _ => AppError::invalid_token(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config() -> JwtConfig {
        JwtConfig::new("test_secret_key_for_testing_purposes")
    }

    fn payload() -> TokenPayload {
        TokenPayload {
            username: "alice".into(),
            name: "Alice".into(),
            id: "7d4f0f54-3b0c-4a0c-9a59-5d1d2b6f8c11".into(),
        }
    }

    fn sign(claims: &Value, secret: &str) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn issued_token_verifies() {
        let token = create_token(&payload(), &config()).unwrap();
        assert_eq!(verify_token(&token, &config()).unwrap(), payload());
    }

    #[test]
    fn wrong_secret_is_invalid_signature() {
        let token = create_token(&payload(), &JwtConfig::new("another-secret")).unwrap();
        let err = verify_token(&token, &config()).unwrap_err();
        assert_eq!(err.to_string(), "JsonWebTokenError:invalid signature");
    }

    #[test]
    fn garbage_is_malformed() {
        let err = verify_token("not-a-token", &config()).unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidToken { message, .. } if message == "jwt malformed"
        ));
    }

    #[test]
    fn expired_token_is_reported_as_expiry() {
        let past = Utc::now().timestamp() - 3600;
        let token = sign(
            &json!({ "username": "alice", "name": "Alice", "id": "abc", "iat": past - 60, "exp": past }),
            &config().secret,
        );
        assert!(matches!(
            verify_token(&token, &config()),
            Err(AppError::TokenExpired)
        ));
    }

    #[test]
    fn recently_expired_token_is_not_tolerated() {
        let now = Utc::now().timestamp();
        let token = sign(
            &json!({ "username": "alice", "name": "Alice", "id": "abc", "iat": now - 65, "exp": now - 5 }),
            &config().secret,
        );
        assert!(matches!(
            verify_token(&token, &config()),
            Err(AppError::TokenExpired)
        ));
    }

    #[test]
    fn signed_payload_of_wrong_shape_is_validation_error() {
        let exp = Utc::now().timestamp() + 3600;
        let token = sign(&json!({ "username": "alice", "exp": exp }), &config().secret);
        let AppError::Validation(issues) = verify_token(&token, &config()).unwrap_err() else {
            panic!("expected validation error");
        };
        assert_eq!(issues.len(), 2);
    }

    #[test]
    fn token_without_expiry_is_rejected() {
        let token = sign(
            &json!({ "username": "alice", "name": "Alice", "id": "abc" }),
            &config().secret,
        );
        assert!(matches!(
            verify_token(&token, &config()),
            Err(AppError::InvalidToken { .. })
        ));
    }
}
