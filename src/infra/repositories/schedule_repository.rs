//! Doctor schedule repository.
//!
//! Admin reads join the doctor's summary at read time; day ordering uses
//! the calendar position of the label, so sorting happens in memory after
//! the query.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use super::entities::doctor;
use super::entities::doctor_schedule::{self, Entity as ScheduleEntity};
use crate::domain::{
    schedule::sort_by_day_and_time, DayOfWeek, DoctorRef, NewSchedule, Schedule, SchedulePatch,
    ScheduleWithDoctor,
};
use crate::errors::{AppError, AppResult};

/// Listing filter; `None` fields apply no predicate
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleFilter {
    pub doctor_id: Option<Uuid>,
    pub day_of_week: Option<DayOfWeek>,
    pub poli: Option<String>,
    pub is_active: Option<bool>,
}

/// Schedule repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    /// List schedules with the owning doctor's summary, ordered by day
    /// then start time
    async fn list(&self, filter: ScheduleFilter) -> AppResult<Vec<ScheduleWithDoctor>>;

    /// Active-schedule lookup for a set of doctors (public listing)
    async fn list_for_doctors(
        &self,
        doctor_ids: Vec<Uuid>,
        day: Option<DayOfWeek>,
    ) -> AppResult<Vec<Schedule>>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<ScheduleWithDoctor>>;

    async fn create(&self, data: NewSchedule) -> AppResult<Schedule>;

    /// Apply a partial update; fields set to `None` are left unchanged
    async fn update(&self, id: Uuid, patch: SchedulePatch) -> AppResult<Schedule>;

    /// Hard delete by id
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// SeaORM-backed schedule repository
pub struct ScheduleStore {
    db: DatabaseConnection,
}

impl ScheduleStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn condition(filter: &ScheduleFilter) -> Condition {
        let mut condition = Condition::all();

        if let Some(doctor_id) = filter.doctor_id {
            condition = condition.add(doctor_schedule::Column::DoctorId.eq(doctor_id));
        }
        if let Some(day) = filter.day_of_week {
            condition = condition.add(doctor_schedule::Column::DayOfWeek.eq(day.as_str()));
        }
        if let Some(poli) = &filter.poli {
            condition = condition.add(doctor_schedule::Column::Poli.eq(poli.clone()));
        }
        if let Some(is_active) = filter.is_active {
            condition = condition.add(doctor_schedule::Column::IsActive.eq(is_active));
        }

        condition
    }
}

#[async_trait]
impl ScheduleRepository for ScheduleStore {
    async fn list(&self, filter: ScheduleFilter) -> AppResult<Vec<ScheduleWithDoctor>> {
        let rows = ScheduleEntity::find()
            .find_also_related(doctor::Entity)
            .filter(Self::condition(&filter))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        let mut schedules = rows
            .into_iter()
            .map(|(model, doctor)| {
                Ok(ScheduleWithDoctor {
                    schedule: Schedule::try_from(model)?,
                    doctor: doctor.map(|d| DoctorRef {
                        id: d.id,
                        name: d.name,
                        specialty: d.specialty,
                    }),
                })
            })
            .collect::<AppResult<Vec<_>>>()?;

        schedules.sort_by(|a, b| {
            a.schedule
                .day_of_week
                .ordinal()
                .cmp(&b.schedule.day_of_week.ordinal())
                .then_with(|| a.schedule.start_time.cmp(&b.schedule.start_time))
        });

        Ok(schedules)
    }

    async fn list_for_doctors(
        &self,
        doctor_ids: Vec<Uuid>,
        day: Option<DayOfWeek>,
    ) -> AppResult<Vec<Schedule>> {
        if doctor_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut condition = Condition::all()
            .add(doctor_schedule::Column::DoctorId.is_in(doctor_ids))
            .add(doctor_schedule::Column::IsActive.eq(true));
        if let Some(day) = day {
            condition = condition.add(doctor_schedule::Column::DayOfWeek.eq(day.as_str()));
        }

        let models = ScheduleEntity::find()
            .filter(condition)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        let mut schedules = models
            .into_iter()
            .map(Schedule::try_from)
            .collect::<AppResult<Vec<_>>>()?;
        sort_by_day_and_time(&mut schedules);

        Ok(schedules)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<ScheduleWithDoctor>> {
        let row = ScheduleEntity::find_by_id(id)
            .find_also_related(doctor::Entity)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        row.map(|(model, doctor)| {
            Ok(ScheduleWithDoctor {
                schedule: Schedule::try_from(model)?,
                doctor: doctor.map(|d| DoctorRef {
                    id: d.id,
                    name: d.name,
                    specialty: d.specialty,
                }),
            })
        })
        .transpose()
    }

    async fn create(&self, data: NewSchedule) -> AppResult<Schedule> {
        let now = Utc::now();
        let active_model = doctor_schedule::ActiveModel {
            id: Set(Uuid::new_v4()),
            doctor_id: Set(data.doctor_id),
            day_of_week: Set(data.day_of_week.as_str().to_string()),
            start_time: Set(data.start_time),
            end_time: Set(data.end_time),
            poli: Set(data.poli),
            is_active: Set(data.is_active),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Schedule::try_from(model)
    }

    async fn update(&self, id: Uuid, patch: SchedulePatch) -> AppResult<Schedule> {
        let model = ScheduleEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound("Schedule"))?;

        let mut active: doctor_schedule::ActiveModel = model.into();

        if let Some(doctor_id) = patch.doctor_id {
            active.doctor_id = Set(doctor_id);
        }
        if let Some(day) = patch.day_of_week {
            active.day_of_week = Set(day.as_str().to_string());
        }
        if let Some(start_time) = patch.start_time {
            active.start_time = Set(start_time);
        }
        if let Some(end_time) = patch.end_time {
            active.end_time = Set(end_time);
        }
        if let Some(poli) = patch.poli {
            active.poli = Set(poli);
        }
        if let Some(is_active) = patch.is_active {
            active.is_active = Set(is_active);
        }
        active.updated_at = Set(Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Schedule::try_from(model)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = ScheduleEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Schedule"));
        }

        Ok(())
    }
}
