//! Admin account repository.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use super::entities::admin::{self, Entity as AdminEntity};
use crate::domain::Admin;
use crate::errors::{AppError, AppResult};

/// Admin repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AdminRepository: Send + Sync {
    /// Find admin by email
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Admin>>;

    /// Create the admin if the email is unused, otherwise return the
    /// existing record (used by the seed command).
    async fn upsert(
        &self,
        email: String,
        password_hash: String,
        name: String,
        role: String,
    ) -> AppResult<Admin>;
}

/// SeaORM-backed admin repository
pub struct AdminStore {
    db: DatabaseConnection,
}

impl AdminStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AdminRepository for AdminStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Admin>> {
        let result = AdminEntity::find()
            .filter(admin::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Admin::from))
    }

    async fn upsert(
        &self,
        email: String,
        password_hash: String,
        name: String,
        role: String,
    ) -> AppResult<Admin> {
        if let Some(existing) = self.find_by_email(&email).await? {
            return Ok(existing);
        }

        let active_model = admin::ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(email),
            password_hash: Set(password_hash),
            name: Set(name),
            role: Set(role),
            created_at: Set(Utc::now()),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Admin::from(model))
    }
}
