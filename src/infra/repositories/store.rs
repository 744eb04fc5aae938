//! Repository access point.
//!
//! `Repositories` groups all repository traits behind one handle so the
//! service layer can be constructed against a single abstraction (and a
//! single mock in tests).

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{
    AdminRepository, AdminStore, AppointmentRepository, AppointmentStore, ContentRepository,
    ContentStore, DoctorRepository, DoctorStore, ScheduleRepository, ScheduleStore,
};

/// Access to all repositories
pub trait Repositories: Send + Sync {
    fn admins(&self) -> Arc<dyn AdminRepository>;
    fn doctors(&self) -> Arc<dyn DoctorRepository>;
    fn schedules(&self) -> Arc<dyn ScheduleRepository>;
    fn appointments(&self) -> Arc<dyn AppointmentRepository>;
    fn content(&self) -> Arc<dyn ContentRepository>;
}

/// Database-backed repository set
pub struct Persistence {
    admins: Arc<AdminStore>,
    doctors: Arc<DoctorStore>,
    schedules: Arc<ScheduleStore>,
    appointments: Arc<AppointmentStore>,
    content: Arc<ContentStore>,
}

impl Persistence {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            admins: Arc::new(AdminStore::new(db.clone())),
            doctors: Arc::new(DoctorStore::new(db.clone())),
            schedules: Arc::new(ScheduleStore::new(db.clone())),
            appointments: Arc::new(AppointmentStore::new(db.clone())),
            content: Arc::new(ContentStore::new(db)),
        }
    }
}

impl Repositories for Persistence {
    fn admins(&self) -> Arc<dyn AdminRepository> {
        self.admins.clone()
    }

    fn doctors(&self) -> Arc<dyn DoctorRepository> {
        self.doctors.clone()
    }

    fn schedules(&self) -> Arc<dyn ScheduleRepository> {
        self.schedules.clone()
    }

    fn appointments(&self) -> Arc<dyn AppointmentRepository> {
        self.appointments.clone()
    }

    fn content(&self) -> Arc<dyn ContentRepository> {
        self.content.clone()
    }
}
