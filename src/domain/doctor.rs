//! Doctor domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::schedule::Schedule;

/// Doctor domain entity
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: Uuid,
    /// Full name including title
    #[schema(example = "Dr. Ahmad Santoso, Sp.PD")]
    pub name: String,
    /// Medical specialization label
    #[schema(example = "Penyakit Dalam")]
    pub specialty: String,
    #[schema(example = "081234567890")]
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data for creating a doctor (name/specialty/phone are mandatory)
#[derive(Debug, Clone)]
pub struct NewDoctor {
    pub name: String,
    pub specialty: String,
    pub phone: String,
    pub bio: Option<String>,
    pub photo: Option<String>,
    pub is_active: bool,
}

/// Partial update for a doctor.
///
/// `None` means "leave unchanged". For the optional text fields the outer
/// `Option` distinguishes "not provided" from an explicit null that clears
/// the field.
#[derive(Debug, Clone, Default)]
pub struct DoctorPatch {
    pub name: Option<String>,
    pub specialty: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<Option<String>>,
    pub photo: Option<Option<String>>,
    pub is_active: Option<bool>,
}

impl DoctorPatch {
    /// True when the patch carries no changes
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.specialty.is_none()
            && self.phone.is_none()
            && self.bio.is_none()
            && self.photo.is_none()
            && self.is_active.is_none()
    }
}

/// Doctor summary embedded in schedule and appointment listings
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DoctorRef {
    pub id: Uuid,
    pub name: String,
    pub specialty: String,
}

impl From<&Doctor> for DoctorRef {
    fn from(doctor: &Doctor) -> Self {
        Self {
            id: doctor.id,
            name: doctor.name.clone(),
            specialty: doctor.specialty.clone(),
        }
    }
}

/// Doctor with embedded schedules (public listing)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DoctorWithSchedules {
    #[serde(flatten)]
    pub doctor: Doctor,
    pub schedules: Vec<Schedule>,
}
