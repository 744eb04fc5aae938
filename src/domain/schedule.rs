//! Doctor schedule domain entity and the fixed day-of-week labels.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use super::doctor::DoctorRef;
use crate::errors::{AppError, AppResult};

/// `HH:MM` 24-hour clock
static TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").expect("valid time regex"));

/// Validate an `HH:MM` time label.
pub fn validate_time(value: &str) -> AppResult<()> {
    if TIME_RE.is_match(value) {
        Ok(())
    } else {
        Err(AppError::validation(format!(
            "Invalid time '{}', expected HH:MM",
            value
        )))
    }
}

/// The seven fixed day labels used by schedules.
///
/// Serialized as the Indonesian labels the site displays; ordering follows
/// the calendar week starting Monday, not the labels' alphabetical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum DayOfWeek {
    Senin,
    Selasa,
    Rabu,
    Kamis,
    Jumat,
    Sabtu,
    Minggu,
}

impl DayOfWeek {
    /// All days in calendar order
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Senin,
        DayOfWeek::Selasa,
        DayOfWeek::Rabu,
        DayOfWeek::Kamis,
        DayOfWeek::Jumat,
        DayOfWeek::Sabtu,
        DayOfWeek::Minggu,
    ];

    /// Position within the week (Senin = 0)
    pub fn ordinal(&self) -> u8 {
        match self {
            DayOfWeek::Senin => 0,
            DayOfWeek::Selasa => 1,
            DayOfWeek::Rabu => 2,
            DayOfWeek::Kamis => 3,
            DayOfWeek::Jumat => 4,
            DayOfWeek::Sabtu => 5,
            DayOfWeek::Minggu => 6,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DayOfWeek::Senin => "Senin",
            DayOfWeek::Selasa => "Selasa",
            DayOfWeek::Rabu => "Rabu",
            DayOfWeek::Kamis => "Kamis",
            DayOfWeek::Jumat => "Jumat",
            DayOfWeek::Sabtu => "Sabtu",
            DayOfWeek::Minggu => "Minggu",
        }
    }
}

impl std::fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayOfWeek {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| AppError::validation(format!("Invalid day of week '{}'", s)))
    }
}

/// Doctor schedule domain entity
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub id: Uuid,
    pub doctor_id: Uuid,
    pub day_of_week: DayOfWeek,
    /// Start of the slot, `HH:MM`
    #[schema(example = "08:00")]
    pub start_time: String,
    /// End of the slot, `HH:MM`
    #[schema(example = "12:00")]
    pub end_time: String,
    /// Clinic/department label
    #[schema(example = "Penyakit Dalam")]
    pub poli: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data for creating a schedule (all five core fields required)
#[derive(Debug, Clone)]
pub struct NewSchedule {
    pub doctor_id: Uuid,
    pub day_of_week: DayOfWeek,
    pub start_time: String,
    pub end_time: String,
    pub poli: String,
    pub is_active: bool,
}

/// Partial update for a schedule; `None` leaves the field unchanged
#[derive(Debug, Clone, Default)]
pub struct SchedulePatch {
    pub doctor_id: Option<Uuid>,
    pub day_of_week: Option<DayOfWeek>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub poli: Option<String>,
    pub is_active: Option<bool>,
}

/// Schedule joined with its doctor's summary (admin listing)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleWithDoctor {
    #[serde(flatten)]
    pub schedule: Schedule,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor: Option<DoctorRef>,
}

/// Sort schedules by calendar day, then start time.
pub fn sort_by_day_and_time(schedules: &mut [Schedule]) {
    schedules.sort_by(|a, b| {
        a.day_of_week
            .ordinal()
            .cmp(&b.day_of_week.ordinal())
            .then_with(|| a.start_time.cmp(&b.start_time))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_labels_round_trip() {
        for day in DayOfWeek::ALL {
            assert_eq!(day.as_str().parse::<DayOfWeek>().unwrap(), day);
        }
    }

    #[test]
    fn unknown_day_is_rejected() {
        assert!("Monday".parse::<DayOfWeek>().is_err());
        assert!("senin".parse::<DayOfWeek>().is_err());
    }

    #[test]
    fn days_sort_by_calendar_order_not_alphabet() {
        // Alphabetically Jumat < Kamis, but Kamis comes first in the week
        assert!(DayOfWeek::Kamis.ordinal() < DayOfWeek::Jumat.ordinal());
    }

    #[test]
    fn time_validation() {
        assert!(validate_time("08:00").is_ok());
        assert!(validate_time("23:59").is_ok());
        assert!(validate_time("24:00").is_err());
        assert!(validate_time("8:00").is_err());
        assert!(validate_time("08:60").is_err());
        assert!(validate_time("0800").is_err());
    }
}
