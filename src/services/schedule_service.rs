//! Schedule service - practice-hours CRUD for the admin back office.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{NewSchedule, Schedule, SchedulePatch, ScheduleWithDoctor};
use crate::errors::{AppError, AppResult};
use crate::infra::{Repositories, ScheduleFilter};
use crate::snapshot::SnapshotStore;

/// Schedule service trait for dependency injection.
#[async_trait]
pub trait ScheduleService: Send + Sync {
    /// Admin listing joined with the doctor's summary
    async fn list_schedules(&self, filter: ScheduleFilter) -> AppResult<Vec<ScheduleWithDoctor>>;

    async fn get_schedule(&self, id: Uuid) -> AppResult<ScheduleWithDoctor>;

    /// Create a schedule; the referenced doctor must exist
    async fn create_schedule(&self, data: NewSchedule) -> AppResult<Schedule>;

    /// Apply a partial update; absent fields stay unchanged
    async fn update_schedule(&self, id: Uuid, patch: SchedulePatch) -> AppResult<Schedule>;

    async fn delete_schedule(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of ScheduleService.
///
/// Mutations are mirrored into the local snapshot.
pub struct ScheduleManager<R: Repositories> {
    repos: Arc<R>,
    snapshot: Arc<SnapshotStore>,
}

impl<R: Repositories> ScheduleManager<R> {
    pub fn new(repos: Arc<R>, snapshot: Arc<SnapshotStore>) -> Self {
        Self { repos, snapshot }
    }

    async fn ensure_doctor_exists(&self, doctor_id: Uuid) -> AppResult<()> {
        self.repos
            .doctors()
            .find_by_id(doctor_id)
            .await?
            .ok_or(AppError::NotFound("Doctor"))?;
        Ok(())
    }
}

#[async_trait]
impl<R: Repositories> ScheduleService for ScheduleManager<R> {
    async fn list_schedules(&self, filter: ScheduleFilter) -> AppResult<Vec<ScheduleWithDoctor>> {
        self.repos.schedules().list(filter).await
    }

    async fn get_schedule(&self, id: Uuid) -> AppResult<ScheduleWithDoctor> {
        self.repos
            .schedules()
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound("Schedule"))
    }

    async fn create_schedule(&self, data: NewSchedule) -> AppResult<Schedule> {
        self.ensure_doctor_exists(data.doctor_id).await?;
        let schedule = self.repos.schedules().create(data).await?;
        self.snapshot.upsert_schedule(schedule.clone());
        Ok(schedule)
    }

    async fn update_schedule(&self, id: Uuid, patch: SchedulePatch) -> AppResult<Schedule> {
        if let Some(doctor_id) = patch.doctor_id {
            self.ensure_doctor_exists(doctor_id).await?;
        }
        let schedule = self.repos.schedules().update(id, patch).await?;
        self.snapshot.upsert_schedule(schedule.clone());
        Ok(schedule)
    }

    async fn delete_schedule(&self, id: Uuid) -> AppResult<()> {
        self.repos.schedules().delete(id).await?;
        self.snapshot.remove_schedule(id);
        Ok(())
    }
}
