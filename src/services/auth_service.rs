//! Authentication service - admin login and session token handling.
//!
//! Sessions are JWTs carried in an httpOnly cookie; the service only
//! mints and verifies tokens, cookie plumbing lives in the handlers.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::config::Config;
use crate::domain::{Admin, AdminProfile, Password};
use crate::errors::{AppError, AppResult};
use crate::infra::Repositories;

/// JWT claims payload
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub name: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Verify credentials and return the admin profile plus a session token
    async fn login(&self, email: String, password: String) -> AppResult<(AdminProfile, String)>;

    /// Verify a session token and extract claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// Mint a session token for an admin (shared helper)
fn generate_token(admin: &Admin, config: &Config) -> AppResult<String> {
    let now = Utc::now();
    let expires_at = now + Duration::days(config.session_ttl_days);

    let claims = Claims {
        sub: admin.id,
        email: admin.email.clone(),
        name: admin.name.clone(),
        role: admin.role.clone(),
        exp: expires_at.timestamp(),
        iat: now.timestamp(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret_bytes()),
    )?;

    Ok(token)
}

fn verify_token_internal(token: &str, config: &Config) -> AppResult<Claims> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret_bytes()),
        &Validation::default(),
    )?;

    Ok(token_data.claims)
}

/// Concrete implementation of AuthService backed by the admin repository.
pub struct Authenticator<R: Repositories> {
    repos: Arc<R>,
    config: Config,
}

impl<R: Repositories> Authenticator<R> {
    pub fn new(repos: Arc<R>, config: Config) -> Self {
        Self { repos, config }
    }
}

#[async_trait]
impl<R: Repositories> AuthService for Authenticator<R> {
    async fn login(&self, email: String, password: String) -> AppResult<(AdminProfile, String)> {
        let admin_result = self.repos.admins().find_by_email(&email).await?;

        // SECURITY: Perform password verification even if the admin doesn't
        // exist, so a missing email and a wrong password take the same time.
        let (stored_password, admin_exists) = match &admin_result {
            Some(admin) => (Password::from_hash(admin.password_hash.clone()), true),
            None => (Password::dummy(), false),
        };

        let password_valid = stored_password.verify(&password);

        if !admin_exists || !password_valid {
            return Err(AppError::InvalidCredentials);
        }

        // Safe to unwrap since we verified admin_exists is true
        let admin = admin_result.unwrap();
        let token = generate_token(&admin, &self.config)?;

        Ok((admin.profile(), token))
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        verify_token_internal(token, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Admin;

    fn test_admin() -> Admin {
        Admin {
            id: Uuid::new_v4(),
            email: "admin@rs.com".to_string(),
            password_hash: Password::new("admin123").unwrap().into_string(),
            name: "Administrator".to_string(),
            role: "admin".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn token_round_trip() {
        let config = Config::with_secret("test-secret-that-is-long-enough-123456");
        let admin = test_admin();

        let token = generate_token(&admin, &config).unwrap();
        let claims = verify_token_internal(&token, &config).unwrap();

        assert_eq!(claims.sub, admin.id);
        assert_eq!(claims.email, "admin@rs.com");
        assert_eq!(claims.role, "admin");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn tampered_token_is_rejected() {
        let config = Config::with_secret("test-secret-that-is-long-enough-123456");
        let other = Config::with_secret("another-secret-that-is-long-enough-99");
        let admin = test_admin();

        let token = generate_token(&admin, &config).unwrap();
        assert!(verify_token_internal(&token, &other).is_err());
    }
}
