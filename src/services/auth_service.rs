//! Authentication service - registration, login and token handling.
//!
//! Password hashing lives in the domain `Password` value object;
//! this service owns token issuance and verification.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::{Config, SECONDS_PER_HOUR, TOKEN_TYPE_BEARER};
use crate::domain::{Password, User, UserRole};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// JWT claims payload
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// Token response returned after successful authentication
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,
    /// Token type (always "Bearer")
    #[schema(example = "Bearer")]
    pub token_type: String,
    /// Token expiration time in seconds
    #[schema(example = 86400)]
    pub expires_in: i64,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user; `role` may be "user" or "vendor"
    async fn register(
        &self,
        email: String,
        password: String,
        name: String,
        role: Option<String>,
    ) -> AppResult<User>;

    /// Login and return JWT token
    async fn login(&self, email: String, password: String) -> AppResult<TokenResponse>;

    /// Verify JWT token and extract claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// Generate JWT token for a user (shared helper to avoid duplication)
fn generate_token(user: &User, config: &Config) -> AppResult<TokenResponse> {
    let now = Utc::now();
    let expires_at = now + Duration::hours(config.jwt_expiration_hours);

    let claims = Claims {
        sub: user.id,
        email: user.email.clone(),
        role: user.role.to_string(),
        exp: expires_at.timestamp(),
        iat: now.timestamp(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret_bytes()),
    )?;

    Ok(TokenResponse {
        access_token: token,
        token_type: TOKEN_TYPE_BEARER.to_string(),
        expires_in: config.jwt_expiration_hours * SECONDS_PER_HOUR,
    })
}

/// Verify JWT token and extract claims (shared helper)
fn verify_token_internal(token: &str, config: &Config) -> AppResult<Claims> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret_bytes()),
        &Validation::default(),
    )?;

    Ok(token_data.claims)
}

/// Resolve the requested registration role.
///
/// Only "user" and "vendor" are self-assignable; anything else,
/// including "admin", is rejected.
fn registration_role(role: Option<String>) -> AppResult<UserRole> {
    match role.as_deref() {
        None => Ok(UserRole::User),
        Some("user") => Ok(UserRole::User),
        Some("vendor") => Ok(UserRole::Vendor),
        Some(other) => Err(AppError::BadRequest(format!(
            "Role '{}' cannot be chosen at registration",
            other
        ))),
    }
}

/// Concrete implementation of AuthService using Unit of Work.
pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
    config: Config,
}

impl<U: UnitOfWork> Authenticator<U> {
    /// Create new auth service instance with Unit of Work
    pub fn new(uow: Arc<U>, config: Config) -> Self {
        Self { uow, config }
    }
}

#[async_trait]
impl<U: UnitOfWork> AuthService for Authenticator<U> {
    async fn register(
        &self,
        email: String,
        password: String,
        name: String,
        role: Option<String>,
    ) -> AppResult<User> {
        let role = registration_role(role)?;

        // Email format is validated by the handler's ValidatedJson extractor.
        // Check existing accounts including soft-deleted ones so a deleted
        // account's address cannot be re-registered.
        if self
            .uow
            .users()
            .find_by_email_with_deleted(&email)
            .await?
            .is_some()
        {
            return Err(AppError::conflict("An account with this email already exists"));
        }

        let password_hash = Password::new(&password)?.into_string();
        self.uow.users().create(email, password_hash, name, role).await
    }

    async fn login(&self, email: String, password: String) -> AppResult<TokenResponse> {
        let user_result = self.uow.users().find_by_email(&email).await?;

        // SECURITY: Perform password verification even if user doesn't exist
        // to prevent timing attacks that could enumerate valid emails.
        // We use a dummy hash that will always fail verification.
        let dummy_hash =
            "$argon2id$v=19$m=19456,t=2,p=1$dummysalt123456$dummyhash1234567890123456789012";

        let (password_hash, user_exists) = match &user_result {
            Some(user) => (user.password_hash.as_str(), true),
            None => (dummy_hash, false),
        };

        let stored_password = Password::from_hash(password_hash.to_string());
        let password_valid = stored_password.verify(&password);

        // Only succeed if both user exists AND password is valid
        if !user_exists || !password_valid {
            return Err(AppError::InvalidCredentials);
        }

        // Safe to unwrap since we verified user_exists is true
        generate_token(user_result.as_ref().unwrap(), &self.config)
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        verify_token_internal(token, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_role_defaults_to_user() {
        assert_eq!(registration_role(None).unwrap(), UserRole::User);
        assert_eq!(
            registration_role(Some("user".to_string())).unwrap(),
            UserRole::User
        );
        assert_eq!(
            registration_role(Some("vendor".to_string())).unwrap(),
            UserRole::Vendor
        );
    }

    #[test]
    fn test_admin_is_not_self_assignable() {
        assert!(registration_role(Some("admin".to_string())).is_err());
        assert!(registration_role(Some("root".to_string())).is_err());
    }

    #[test]
    fn test_token_round_trip() {
        let config = Config::for_tests();
        let user = User {
            id: Uuid::new_v4(),
            email: "jwt@example.com".to_string(),
            password_hash: "hash".to_string(),
            name: "Jwt Tester".to_string(),
            role: UserRole::Vendor,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
        };

        let token = generate_token(&user, &config).unwrap();
        assert_eq!(token.token_type, "Bearer");
        assert_eq!(token.expires_in, config.jwt_expiration_hours * 3600);

        let claims = verify_token_internal(&token.access_token, &config).unwrap();
        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.email, user.email);
        assert_eq!(claims.role, "vendor");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let config = Config::for_tests();
        let user = User {
            id: Uuid::new_v4(),
            email: "jwt@example.com".to_string(),
            password_hash: "hash".to_string(),
            name: "Jwt Tester".to_string(),
            role: UserRole::User,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
        };

        let token = generate_token(&user, &config).unwrap();
        let mut tampered = token.access_token.clone();
        tampered.pop();
        tampered.push('x');

        assert!(verify_token_internal(&tampered, &config).is_err());
        assert!(verify_token_internal("not-a-token", &config).is_err());
    }
}
