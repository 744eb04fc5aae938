//! Application settings loaded from environment variables.
//!
//! The bind address is owned by the CLI (`serve` args); everything the
//! services need at runtime lives here.

use std::env;

use super::constants::{
    DEFAULT_DATABASE_URL, DEFAULT_SNAPSHOT_DIR, MIN_JWT_SECRET_LENGTH, SESSION_TTL_DAYS,
};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    jwt_secret: String,
    pub session_ttl_days: i64,
    pub snapshot_dir: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("jwt_secret", &"[REDACTED]")
            .field("session_ttl_days", &self.session_ttl_days)
            .field("snapshot_dir", &self.snapshot_dir)
            .finish()
    }
}

fn env_or(key: &str, fallback: &str) -> String {
    env::var(key).unwrap_or_else(|_| fallback.to_string())
}

impl Config {
    /// Load configuration from the environment, reading `.env` first.
    ///
    /// # Panics
    /// Panics when `JWT_SECRET` is missing in a release build, or set but
    /// shorter than the minimum length.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let jwt_secret = match env::var("JWT_SECRET") {
            Ok(secret) => secret,
            Err(_) if cfg!(debug_assertions) => {
                tracing::warn!("JWT_SECRET not set, using insecure default for development");
                "dev-secret-key-minimum-32-chars!!".to_string()
            }
            Err(_) => panic!("JWT_SECRET environment variable must be set in production"),
        };
        assert!(
            jwt_secret.len() >= MIN_JWT_SECRET_LENGTH,
            "JWT_SECRET must be at least {} characters long",
            MIN_JWT_SECRET_LENGTH
        );

        let session_ttl_days = env::var("SESSION_TTL_DAYS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(SESSION_TTL_DAYS);

        Self {
            database_url: env_or("DATABASE_URL", DEFAULT_DATABASE_URL),
            jwt_secret,
            session_ttl_days,
            snapshot_dir: env_or("SNAPSHOT_DIR", DEFAULT_SNAPSHOT_DIR),
        }
    }

    /// Build a config with an explicit secret (used by tests).
    pub fn with_secret(jwt_secret: impl Into<String>) -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            jwt_secret: jwt_secret.into(),
            session_ttl_days: SESSION_TTL_DAYS,
            snapshot_dir: DEFAULT_SNAPSHOT_DIR.to_string(),
        }
    }

    /// JWT secret bytes for token signing and verification.
    pub fn jwt_secret_bytes(&self) -> &[u8] {
        self.jwt_secret.as_bytes()
    }
}
