//! Doctor service - admin CRUD and the public doctor directory.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{DayOfWeek, Doctor, DoctorPatch, DoctorWithSchedules, NewDoctor, Schedule};
use crate::errors::{AppError, AppResult};
use crate::infra::{DoctorFilter, DoctorOrder, Repositories};
use crate::snapshot::SnapshotStore;

/// Doctor service trait for dependency injection.
#[async_trait]
pub trait DoctorService: Send + Sync {
    /// Admin listing, newest first
    async fn list_doctors(&self, filter: DoctorFilter) -> AppResult<Vec<Doctor>>;

    async fn get_doctor(&self, id: Uuid) -> AppResult<Doctor>;

    async fn create_doctor(&self, data: NewDoctor) -> AppResult<Doctor>;

    /// Apply a partial update; absent fields stay unchanged
    async fn update_doctor(&self, id: Uuid, patch: DoctorPatch) -> AppResult<Doctor>;

    /// Delete a doctor and cascade its schedules. Doctors with existing
    /// appointments cannot be deleted.
    async fn delete_doctor(&self, id: Uuid) -> AppResult<()>;

    /// Public directory: active doctors ordered by name with their active
    /// schedules embedded, optionally narrowed to one day
    async fn list_public_doctors(
        &self,
        specialty: Option<String>,
        day: Option<DayOfWeek>,
    ) -> AppResult<Vec<DoctorWithSchedules>>;
}

/// Concrete implementation of DoctorService.
///
/// Mutations are mirrored into the local snapshot so the public site keeps
/// its last known state.
pub struct DoctorManager<R: Repositories> {
    repos: Arc<R>,
    snapshot: Arc<SnapshotStore>,
}

impl<R: Repositories> DoctorManager<R> {
    pub fn new(repos: Arc<R>, snapshot: Arc<SnapshotStore>) -> Self {
        Self { repos, snapshot }
    }
}

#[async_trait]
impl<R: Repositories> DoctorService for DoctorManager<R> {
    async fn list_doctors(&self, filter: DoctorFilter) -> AppResult<Vec<Doctor>> {
        self.repos.doctors().list(filter).await
    }

    async fn get_doctor(&self, id: Uuid) -> AppResult<Doctor> {
        self.repos
            .doctors()
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound("Doctor"))
    }

    async fn create_doctor(&self, data: NewDoctor) -> AppResult<Doctor> {
        let doctor = self.repos.doctors().create(data).await?;
        self.snapshot.upsert_doctor(doctor.clone());
        Ok(doctor)
    }

    async fn update_doctor(&self, id: Uuid, patch: DoctorPatch) -> AppResult<Doctor> {
        let doctor = self.repos.doctors().update(id, patch).await?;
        self.snapshot.upsert_doctor(doctor.clone());
        Ok(doctor)
    }

    async fn delete_doctor(&self, id: Uuid) -> AppResult<()> {
        let appointment_count = self.repos.appointments().count_for_doctor(id).await?;
        if appointment_count > 0 {
            return Err(AppError::conflict(
                "Doctor has existing appointments and cannot be deleted",
            ));
        }

        // Schedules go with the doctor via the FK cascade
        self.repos.doctors().delete(id).await?;
        self.snapshot.remove_doctor(id);
        Ok(())
    }

    async fn list_public_doctors(
        &self,
        specialty: Option<String>,
        day: Option<DayOfWeek>,
    ) -> AppResult<Vec<DoctorWithSchedules>> {
        let doctors = self
            .repos
            .doctors()
            .list(DoctorFilter {
                specialty,
                search: None,
                is_active: Some(true),
                order: DoctorOrder::Name,
            })
            .await?;

        let doctor_ids: Vec<Uuid> = doctors.iter().map(|d| d.id).collect();
        let schedules = self
            .repos
            .schedules()
            .list_for_doctors(doctor_ids, day)
            .await?;

        let mut by_doctor: HashMap<Uuid, Vec<Schedule>> = HashMap::new();
        for schedule in schedules {
            by_doctor.entry(schedule.doctor_id).or_default().push(schedule);
        }

        Ok(doctors
            .into_iter()
            .map(|doctor| {
                let schedules = by_doctor.remove(&doctor.id).unwrap_or_default();
                DoctorWithSchedules { doctor, schedules }
            })
            .collect())
    }
}
