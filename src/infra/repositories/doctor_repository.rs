//! Doctor repository.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use uuid::Uuid;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use super::entities::doctor::{self, Entity as DoctorEntity};
use crate::domain::{Doctor, DoctorPatch, NewDoctor};
use crate::errors::{AppError, AppResult};

/// Result ordering for doctor listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DoctorOrder {
    /// Newest first (admin view)
    #[default]
    Newest,
    /// Alphabetical by name (public view)
    Name,
}

/// Listing filter; `None` fields apply no predicate
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DoctorFilter {
    pub specialty: Option<String>,
    pub search: Option<String>,
    pub is_active: Option<bool>,
    pub order: DoctorOrder,
}

/// Doctor repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait DoctorRepository: Send + Sync {
    async fn list(&self, filter: DoctorFilter) -> AppResult<Vec<Doctor>>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Doctor>>;

    async fn create(&self, data: NewDoctor) -> AppResult<Doctor>;

    /// Apply a partial update; fields set to `None` are left unchanged
    async fn update(&self, id: Uuid, patch: DoctorPatch) -> AppResult<Doctor>;

    /// Hard delete by id
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// SeaORM-backed doctor repository
pub struct DoctorStore {
    db: DatabaseConnection,
}

impl DoctorStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn condition(filter: &DoctorFilter) -> Condition {
        let mut condition = Condition::all();

        if let Some(specialty) = &filter.specialty {
            condition = condition.add(doctor::Column::Specialty.eq(specialty.clone()));
        }
        if let Some(search) = &filter.search {
            condition = condition.add(
                Condition::any()
                    .add(doctor::Column::Name.contains(search))
                    .add(doctor::Column::Specialty.contains(search)),
            );
        }
        if let Some(is_active) = filter.is_active {
            condition = condition.add(doctor::Column::IsActive.eq(is_active));
        }

        condition
    }
}

#[async_trait]
impl DoctorRepository for DoctorStore {
    async fn list(&self, filter: DoctorFilter) -> AppResult<Vec<Doctor>> {
        let query = DoctorEntity::find().filter(Self::condition(&filter));
        let query = match filter.order {
            DoctorOrder::Newest => query.order_by_desc(doctor::Column::CreatedAt),
            DoctorOrder::Name => query.order_by_asc(doctor::Column::Name),
        };

        let models = query.all(&self.db).await.map_err(AppError::from)?;
        Ok(models.into_iter().map(Doctor::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Doctor>> {
        let result = DoctorEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Doctor::from))
    }

    async fn create(&self, data: NewDoctor) -> AppResult<Doctor> {
        let now = Utc::now();
        let active_model = doctor::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            specialty: Set(data.specialty),
            phone: Set(data.phone),
            bio: Set(data.bio),
            photo: Set(data.photo),
            is_active: Set(data.is_active),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Doctor::from(model))
    }

    async fn update(&self, id: Uuid, patch: DoctorPatch) -> AppResult<Doctor> {
        let model = DoctorEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound("Doctor"))?;

        let mut active: doctor::ActiveModel = model.into();

        if let Some(name) = patch.name {
            active.name = Set(name);
        }
        if let Some(specialty) = patch.specialty {
            active.specialty = Set(specialty);
        }
        if let Some(phone) = patch.phone {
            active.phone = Set(phone);
        }
        if let Some(bio) = patch.bio {
            active.bio = Set(bio);
        }
        if let Some(photo) = patch.photo {
            active.photo = Set(photo);
        }
        if let Some(is_active) = patch.is_active {
            active.is_active = Set(is_active);
        }
        active.updated_at = Set(Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Doctor::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = DoctorEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Doctor"));
        }

        Ok(())
    }
}
