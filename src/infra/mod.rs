//! Infrastructure layer - Database and persistence
//!
//! Wraps the database connection, migrations, and the SeaORM-backed
//! repository implementations.

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{
    AdminRepository, AppointmentFilter, AppointmentRepository, ContentRepository, DoctorFilter,
    DoctorOrder, DoctorRepository, Persistence, Repositories, ScheduleFilter, ScheduleRepository,
};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{
    MockAdminRepository, MockAppointmentRepository, MockContentRepository, MockDoctorRepository,
    MockScheduleRepository,
};
