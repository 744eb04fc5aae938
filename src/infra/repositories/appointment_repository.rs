//! Appointment repository.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use super::entities::appointment::{self, Entity as AppointmentEntity};
use super::entities::doctor;
use crate::domain::{
    Appointment, AppointmentStatus, AppointmentWithDoctor, DoctorRef, NewAppointment,
};
use crate::errors::{AppError, AppResult};

/// Listing filter; `None` fields apply no predicate
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppointmentFilter {
    pub status: Option<AppointmentStatus>,
    pub doctor_id: Option<Uuid>,
    pub search: Option<String>,
}

/// Appointment repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// List appointments with the doctor's summary, newest first
    async fn list(&self, filter: AppointmentFilter) -> AppResult<Vec<AppointmentWithDoctor>>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Appointment>>;

    async fn find_with_doctor(&self, id: Uuid) -> AppResult<Option<AppointmentWithDoctor>>;

    /// Insert with status pending
    async fn create(&self, data: NewAppointment) -> AppResult<Appointment>;

    async fn set_status(&self, id: Uuid, status: AppointmentStatus) -> AppResult<Appointment>;

    /// Hard delete by id
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// Number of appointments referencing a doctor
    async fn count_for_doctor(&self, doctor_id: Uuid) -> AppResult<u64>;
}

/// SeaORM-backed appointment repository
pub struct AppointmentStore {
    db: DatabaseConnection,
}

impl AppointmentStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn condition(filter: &AppointmentFilter) -> Condition {
        let mut condition = Condition::all();

        if let Some(status) = filter.status {
            condition = condition.add(appointment::Column::Status.eq(status.as_str()));
        }
        if let Some(doctor_id) = filter.doctor_id {
            condition = condition.add(appointment::Column::DoctorId.eq(doctor_id));
        }
        if let Some(search) = &filter.search {
            condition = condition.add(
                Condition::any()
                    .add(appointment::Column::PatientName.contains(search))
                    .add(appointment::Column::Phone.contains(search)),
            );
        }

        condition
    }

    fn with_doctor(
        (model, doctor): (appointment::Model, Option<doctor::Model>),
    ) -> AppResult<AppointmentWithDoctor> {
        Ok(AppointmentWithDoctor {
            appointment: Appointment::try_from(model)?,
            doctor: doctor.map(|d| DoctorRef {
                id: d.id,
                name: d.name,
                specialty: d.specialty,
            }),
        })
    }
}

#[async_trait]
impl AppointmentRepository for AppointmentStore {
    async fn list(&self, filter: AppointmentFilter) -> AppResult<Vec<AppointmentWithDoctor>> {
        let rows = AppointmentEntity::find()
            .find_also_related(doctor::Entity)
            .filter(Self::condition(&filter))
            .order_by_desc(appointment::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        rows.into_iter().map(Self::with_doctor).collect()
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Appointment>> {
        let result = AppointmentEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        result.map(Appointment::try_from).transpose()
    }

    async fn find_with_doctor(&self, id: Uuid) -> AppResult<Option<AppointmentWithDoctor>> {
        let row = AppointmentEntity::find_by_id(id)
            .find_also_related(doctor::Entity)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        row.map(Self::with_doctor).transpose()
    }

    async fn create(&self, data: NewAppointment) -> AppResult<Appointment> {
        let now = Utc::now();
        let active_model = appointment::ActiveModel {
            id: Set(Uuid::new_v4()),
            patient_name: Set(data.patient_name),
            phone: Set(data.phone),
            doctor_id: Set(data.doctor_id),
            visit_date: Set(data.visit_date),
            notes: Set(data.notes),
            status: Set(AppointmentStatus::Pending.as_str().to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Appointment::try_from(model)
    }

    async fn set_status(&self, id: Uuid, status: AppointmentStatus) -> AppResult<Appointment> {
        let model = AppointmentEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound("Appointment"))?;

        let mut active: appointment::ActiveModel = model.into();
        active.status = Set(status.as_str().to_string());
        active.updated_at = Set(Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Appointment::try_from(model)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = AppointmentEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Appointment"));
        }

        Ok(())
    }

    async fn count_for_doctor(&self, doctor_id: Uuid) -> AppResult<u64> {
        AppointmentEntity::find()
            .filter(appointment::Column::DoctorId.eq(doctor_id))
            .count(&self.db)
            .await
            .map_err(AppError::from)
    }
}
