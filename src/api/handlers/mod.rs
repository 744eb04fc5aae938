//! HTTP request handlers.

pub mod appointment_handler;
pub mod auth_handler;
pub mod content_handler;
pub mod doctor_handler;
pub mod public_handler;
pub mod schedule_handler;

pub use appointment_handler::appointment_routes;
pub use auth_handler::auth_routes;
pub use content_handler::content_routes;
pub use doctor_handler::doctor_routes;
pub use public_handler::public_routes;
pub use schedule_handler::schedule_routes;

use serde::{Deserialize, Deserializer};

use crate::config::FILTER_ALL;

/// Deserialize an optional field so an explicit JSON null becomes
/// `Some(None)` while an absent field stays `None`.
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

/// Drop the `all` sentinel used by filter dropdowns.
pub(crate) fn without_all(value: Option<String>) -> Option<String> {
    value.filter(|v| v != FILTER_ALL)
}
