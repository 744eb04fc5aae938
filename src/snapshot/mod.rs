//! Local snapshot of the public site state.
//!
//! The snapshot mirrors doctors, schedules, settings, and page sections
//! into four JSON files so the public site keeps rendering from its last
//! known state. Writes are last-writer-wins with no concurrency guarantee
//! beyond the in-process lock; a failed file write is logged and dropped.

pub mod defaults;
mod store;

pub use store::{ScheduleEntry, SnapshotStore};
