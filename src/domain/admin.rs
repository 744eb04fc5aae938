//! Admin domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Back-office administrator account
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub name: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl Admin {
    /// Public view of this admin (safe to return to clients)
    pub fn profile(&self) -> AdminProfile {
        AdminProfile {
            id: self.id,
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role.clone(),
        }
    }
}

/// Admin view returned by the login endpoint (never includes the hash)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminProfile {
    pub id: Uuid,
    /// Admin email address
    #[schema(example = "admin@rs.com")]
    pub email: String,
    /// Display name
    #[schema(example = "Admin RS")]
    pub name: String,
    /// Role label carried into session claims
    #[schema(example = "admin")]
    pub role: String,
}
