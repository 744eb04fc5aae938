//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod admin;
pub mod appointment;
pub mod content;
pub mod doctor;
pub mod password;
pub mod schedule;

pub use admin::{Admin, AdminProfile};
pub use appointment::{
    Appointment, AppointmentStatus, AppointmentWithDoctor, NewAppointment,
};
pub use content::{
    PageSection, SectionContent, SectionKey, SectionPatch, SectionStat, ServiceHours,
    SettingsPatch, SiteSettings,
};
pub use doctor::{Doctor, DoctorPatch, DoctorRef, DoctorWithSchedules, NewDoctor};
pub use password::Password;
pub use schedule::{DayOfWeek, NewSchedule, Schedule, SchedulePatch, ScheduleWithDoctor};
