//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{
    AppointmentService, AuthService, ContentService, DoctorService, ScheduleService, Services,
    ServiceContainer,
};
use crate::snapshot::SnapshotStore;

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub doctor_service: Arc<dyn DoctorService>,
    pub schedule_service: Arc<dyn ScheduleService>,
    pub appointment_service: Arc<dyn AppointmentService>,
    pub content_service: Arc<dyn ContentService>,
    /// Session lifetime in days, shared by the JWT expiry and cookie max-age
    pub session_ttl_days: i64,
    /// Database handle for health checks; absent in handler tests
    pub database: Option<Arc<Database>>,
}

impl AppState {
    /// Create application state from database connection and config.
    pub fn from_config(
        database: Arc<Database>,
        config: crate::config::Config,
        snapshot: Arc<SnapshotStore>,
    ) -> Self {
        let session_ttl_days = config.session_ttl_days;
        let container = Arc::new(Services::from_connection(
            database.get_connection(),
            config,
            snapshot,
        ));

        Self {
            auth_service: container.auth(),
            doctor_service: container.doctors(),
            schedule_service: container.schedules(),
            appointment_service: container.appointments(),
            content_service: container.content(),
            session_ttl_days,
            database: Some(database),
        }
    }

    /// Create application state with manually injected services (tests).
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
            session_ttl_days: crate::config::SESSION_TTL_DAYS,
            database: None,
        }
    }
}
