//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod admin_repository;
mod appointment_repository;
mod content_repository;
mod doctor_repository;
mod schedule_repository;
mod store;

pub(crate) mod entities;

pub use admin_repository::{AdminRepository, AdminStore};
pub use appointment_repository::{AppointmentFilter, AppointmentRepository, AppointmentStore};
pub use content_repository::{ContentRepository, ContentStore};
pub use doctor_repository::{DoctorFilter, DoctorOrder, DoctorRepository, DoctorStore};
pub use schedule_repository::{ScheduleFilter, ScheduleRepository, ScheduleStore};
pub use store::{Persistence, Repositories};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use admin_repository::MockAdminRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use appointment_repository::MockAppointmentRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use content_repository::MockContentRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use doctor_repository::MockDoctorRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use schedule_repository::MockScheduleRepository;
