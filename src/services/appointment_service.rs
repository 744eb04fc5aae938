//! Appointment service - public booking and back-office status handling.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Appointment, AppointmentStatus, AppointmentWithDoctor, NewAppointment};
use crate::errors::{AppError, AppResult};
use crate::infra::{AppointmentFilter, Repositories};

/// Appointment service trait for dependency injection.
#[async_trait]
pub trait AppointmentService: Send + Sync {
    /// Admin listing joined with the doctor's summary, newest first
    async fn list_appointments(
        &self,
        filter: AppointmentFilter,
    ) -> AppResult<Vec<AppointmentWithDoctor>>;

    async fn get_appointment(&self, id: Uuid) -> AppResult<AppointmentWithDoctor>;

    /// Book an appointment. The doctor must exist and be taking patients;
    /// status always starts pending.
    async fn create_appointment(&self, data: NewAppointment) -> AppResult<Appointment>;

    /// Move an appointment to a new status, enforcing the lifecycle
    /// (pending -> confirmed/cancelled, confirmed -> completed/cancelled).
    async fn update_status(&self, id: Uuid, status: AppointmentStatus) -> AppResult<Appointment>;

    async fn delete_appointment(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of AppointmentService.
pub struct AppointmentManager<R: Repositories> {
    repos: Arc<R>,
}

impl<R: Repositories> AppointmentManager<R> {
    pub fn new(repos: Arc<R>) -> Self {
        Self { repos }
    }
}

#[async_trait]
impl<R: Repositories> AppointmentService for AppointmentManager<R> {
    async fn list_appointments(
        &self,
        filter: AppointmentFilter,
    ) -> AppResult<Vec<AppointmentWithDoctor>> {
        self.repos.appointments().list(filter).await
    }

    async fn get_appointment(&self, id: Uuid) -> AppResult<AppointmentWithDoctor> {
        self.repos
            .appointments()
            .find_with_doctor(id)
            .await?
            .ok_or(AppError::NotFound("Appointment"))
    }

    async fn create_appointment(&self, data: NewAppointment) -> AppResult<Appointment> {
        let doctor = self
            .repos
            .doctors()
            .find_by_id(data.doctor_id)
            .await?
            .ok_or(AppError::NotFound("Doctor"))?;

        if !doctor.is_active {
            return Err(AppError::bad_request("Doctor is not active"));
        }

        self.repos.appointments().create(data).await
    }

    async fn update_status(&self, id: Uuid, status: AppointmentStatus) -> AppResult<Appointment> {
        let current = self
            .repos
            .appointments()
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound("Appointment"))?;

        if !current.status.can_transition_to(status) {
            return Err(AppError::bad_request(format!(
                "Cannot change status from {} to {}",
                current.status, status
            )));
        }

        self.repos.appointments().set_status(id, status).await
    }

    async fn delete_appointment(&self, id: Uuid) -> AppResult<()> {
        self.repos.appointments().delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Doctor;
    use crate::infra::{
        MockAdminRepository, MockAppointmentRepository, MockContentRepository,
        MockDoctorRepository, MockScheduleRepository,
    };
    use chrono::{NaiveDate, Utc};

    struct TestRepos {
        doctors: Arc<MockDoctorRepository>,
        appointments: Arc<MockAppointmentRepository>,
    }

    impl Repositories for TestRepos {
        fn admins(&self) -> Arc<dyn crate::infra::AdminRepository> {
            Arc::new(MockAdminRepository::new())
        }
        fn doctors(&self) -> Arc<dyn crate::infra::DoctorRepository> {
            self.doctors.clone()
        }
        fn schedules(&self) -> Arc<dyn crate::infra::ScheduleRepository> {
            Arc::new(MockScheduleRepository::new())
        }
        fn appointments(&self) -> Arc<dyn crate::infra::AppointmentRepository> {
            self.appointments.clone()
        }
        fn content(&self) -> Arc<dyn crate::infra::ContentRepository> {
            Arc::new(MockContentRepository::new())
        }
    }

    fn doctor(is_active: bool) -> Doctor {
        let now = Utc::now();
        Doctor {
            id: Uuid::new_v4(),
            name: "Dr. Ahmad Santoso, Sp.PD".into(),
            specialty: "Penyakit Dalam".into(),
            phone: "081234567890".into(),
            bio: None,
            photo: None,
            is_active,
            created_at: now,
            updated_at: now,
        }
    }

    fn booking(doctor_id: Uuid) -> NewAppointment {
        NewAppointment {
            patient_name: "Budi Hartono".into(),
            phone: "081298765432".into(),
            doctor_id,
            visit_date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            notes: None,
        }
    }

    fn appointment(status: AppointmentStatus) -> Appointment {
        let now = Utc::now();
        Appointment {
            id: Uuid::new_v4(),
            patient_name: "Budi Hartono".into(),
            phone: "081298765432".into(),
            doctor_id: Uuid::new_v4(),
            visit_date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            notes: None,
            status,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn booking_with_inactive_doctor_is_rejected() {
        let d = doctor(false);
        let doctor_id = d.id;

        let mut doctors = MockDoctorRepository::new();
        doctors
            .expect_find_by_id()
            .returning(move |_| Ok(Some(d.clone())));

        let repos = Arc::new(TestRepos {
            doctors: Arc::new(doctors),
            appointments: Arc::new(MockAppointmentRepository::new()),
        });
        let service = AppointmentManager::new(repos);

        let err = service
            .create_appointment(booking(doctor_id))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn booking_with_unknown_doctor_is_not_found() {
        let mut doctors = MockDoctorRepository::new();
        doctors.expect_find_by_id().returning(|_| Ok(None));

        let repos = Arc::new(TestRepos {
            doctors: Arc::new(doctors),
            appointments: Arc::new(MockAppointmentRepository::new()),
        });
        let service = AppointmentManager::new(repos);

        let err = service
            .create_appointment(booking(Uuid::new_v4()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound("Doctor")));
    }

    #[tokio::test]
    async fn completed_appointment_cannot_be_reopened() {
        let mut appointments = MockAppointmentRepository::new();
        appointments
            .expect_find_by_id()
            .returning(|_| Ok(Some(appointment(AppointmentStatus::Completed))));

        let repos = Arc::new(TestRepos {
            doctors: Arc::new(MockDoctorRepository::new()),
            appointments: Arc::new(appointments),
        });
        let service = AppointmentManager::new(repos);

        let err = service
            .update_status(Uuid::new_v4(), AppointmentStatus::Pending)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn pending_appointment_can_be_confirmed() {
        let mut appointments = MockAppointmentRepository::new();
        appointments
            .expect_find_by_id()
            .returning(|_| Ok(Some(appointment(AppointmentStatus::Pending))));
        appointments.expect_set_status().returning(|_, status| {
            let mut updated = appointment(status);
            updated.status = status;
            Ok(updated)
        });

        let repos = Arc::new(TestRepos {
            doctors: Arc::new(MockDoctorRepository::new()),
            appointments: Arc::new(appointments),
        });
        let service = AppointmentManager::new(repos);

        let updated = service
            .update_status(Uuid::new_v4(), AppointmentStatus::Confirmed)
            .await
            .unwrap();
        assert_eq!(updated.status, AppointmentStatus::Confirmed);
    }
}
