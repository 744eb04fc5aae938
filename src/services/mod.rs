//! Service layer - one trait per use-case area, with a `*Manager`
//! implementation wired to the repositories. Handlers only see the
//! traits, so tests can swap in their own implementations.

mod appointment_service;
mod auth_service;
pub mod container;
mod content_service;
mod doctor_service;
mod schedule_service;

// Service container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use appointment_service::{AppointmentManager, AppointmentService};
pub use auth_service::{AuthService, Authenticator, Claims};
pub use content_service::{ContentManager, ContentService, PublicContent};
pub use doctor_service::{DoctorManager, DoctorService};
pub use schedule_service::{ScheduleManager, ScheduleService};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
