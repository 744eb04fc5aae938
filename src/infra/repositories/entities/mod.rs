//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod admin;
pub mod appointment;
pub mod doctor;
pub mod doctor_schedule;
pub mod page_section;
pub mod site_settings;
