//! Service container - centralized service access.

use std::sync::Arc;

use super::{
    AppointmentManager, AppointmentService, Authenticator, AuthService, ContentManager,
    ContentService, DoctorManager, DoctorService, ScheduleManager, ScheduleService,
};
use crate::config::Config;
use crate::infra::Persistence;
use crate::snapshot::SnapshotStore;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    fn auth(&self) -> Arc<dyn AuthService>;
    fn doctors(&self) -> Arc<dyn DoctorService>;
    fn schedules(&self) -> Arc<dyn ScheduleService>;
    fn appointments(&self) -> Arc<dyn AppointmentService>;
    fn content(&self) -> Arc<dyn ContentService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    doctor_service: Arc<dyn DoctorService>,
    schedule_service: Arc<dyn ScheduleService>,
    appointment_service: Arc<dyn AppointmentService>,
    content_service: Arc<dyn ContentService>,
}

impl Services {
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        doctor_service: Arc<dyn DoctorService>,
        schedule_service: Arc<dyn ScheduleService>,
        appointment_service: Arc<dyn AppointmentService>,
        content_service: Arc<dyn ContentService>,
    ) -> Self {
        Self {
            auth_service,
            doctor_service,
            schedule_service,
            appointment_service,
            content_service,
        }
    }

    /// Build the full service stack from a database connection and config
    pub fn from_connection(
        db: sea_orm::DatabaseConnection,
        config: Config,
        snapshot: Arc<SnapshotStore>,
    ) -> Self {
        let repos = Arc::new(Persistence::new(db));

        Self {
            auth_service: Arc::new(Authenticator::new(repos.clone(), config)),
            doctor_service: Arc::new(DoctorManager::new(repos.clone(), snapshot.clone())),
            schedule_service: Arc::new(ScheduleManager::new(repos.clone(), snapshot.clone())),
            appointment_service: Arc::new(AppointmentManager::new(repos.clone())),
            content_service: Arc::new(ContentManager::new(repos, snapshot)),
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn doctors(&self) -> Arc<dyn DoctorService> {
        self.doctor_service.clone()
    }

    fn schedules(&self) -> Arc<dyn ScheduleService> {
        self.schedule_service.clone()
    }

    fn appointments(&self) -> Arc<dyn AppointmentService> {
        self.appointment_service.clone()
    }

    fn content(&self) -> Arc<dyn ContentService> {
        self.content_service.clone()
    }
}
