//! Site settings and editable page sections.
//!
//! Section content is a closed tagged union keyed by `sectionKey`, so each
//! section carries exactly the fields its template renders.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::errors::AppError;

/// Singleton site-wide settings edited from the admin settings form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    #[schema(example = "RS Sehat Selalu")]
    pub hospital_name: String,
    #[schema(example = "Layanan Kesehatan Terpercaya")]
    pub tagline: String,
    pub email: String,
    pub phone: String,
    pub facebook_url: String,
    pub twitter_url: String,
    pub instagram_url: String,
    pub youtube_url: String,
}

/// Partial settings update; absent fields persist unchanged
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPatch {
    pub hospital_name: Option<String>,
    pub tagline: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub facebook_url: Option<String>,
    pub twitter_url: Option<String>,
    pub instagram_url: Option<String>,
    pub youtube_url: Option<String>,
}

impl SiteSettings {
    /// Apply a partial update, keeping absent fields as they are.
    pub fn merge(&mut self, patch: SettingsPatch) {
        if let Some(v) = patch.hospital_name {
            self.hospital_name = v;
        }
        if let Some(v) = patch.tagline {
            self.tagline = v;
        }
        if let Some(v) = patch.email {
            self.email = v;
        }
        if let Some(v) = patch.phone {
            self.phone = v;
        }
        if let Some(v) = patch.facebook_url {
            self.facebook_url = v;
        }
        if let Some(v) = patch.twitter_url {
            self.twitter_url = v;
        }
        if let Some(v) = patch.instagram_url {
            self.instagram_url = v;
        }
        if let Some(v) = patch.youtube_url {
            self.youtube_url = v;
        }
    }
}

/// The fixed set of editable page sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SectionKey {
    Hero,
    Profile,
    Contact,
}

impl SectionKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKey::Hero => "hero",
            SectionKey::Profile => "profile",
            SectionKey::Contact => "contact",
        }
    }
}

impl std::fmt::Display for SectionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hero" => Ok(SectionKey::Hero),
            "profile" => Ok(SectionKey::Profile),
            "contact" => Ok(SectionKey::Contact),
            other => Err(AppError::validation(format!(
                "Invalid section key '{}'",
                other
            ))),
        }
    }
}

/// Label/value pair shown in the profile section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SectionStat {
    #[schema(example = "Dokter Spesialis")]
    pub label: String,
    #[schema(example = "50+")]
    pub value: String,
}

/// Opening hours shown in the contact section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceHours {
    pub igd: String,
    pub poli: String,
    pub weekend: String,
}

/// Section content payloads, tagged by section key.
///
/// Each variant carries the fixed field set its section renders; an
/// arbitrary key/value payload is not representable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "sectionKey", rename_all = "lowercase")]
pub enum SectionContent {
    #[serde(rename_all = "camelCase")]
    Hero {
        headline: String,
        subheadline: String,
        cta_text: String,
    },
    #[serde(rename_all = "camelCase")]
    Profile {
        name: String,
        description: String,
        established_year: String,
        stats: Vec<SectionStat>,
    },
    #[serde(rename_all = "camelCase")]
    Contact {
        address: String,
        phone: String,
        email: String,
        igd_phone: String,
        general_phone: String,
        hours: ServiceHours,
    },
}

impl SectionContent {
    /// The section key this payload belongs to
    pub fn key(&self) -> SectionKey {
        match self {
            SectionContent::Hero { .. } => SectionKey::Hero,
            SectionContent::Profile { .. } => SectionKey::Profile,
            SectionContent::Contact { .. } => SectionKey::Contact,
        }
    }
}

/// Editable page section
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageSection {
    pub id: Uuid,
    pub title: String,
    /// Tagged payload; its key must agree with the section's slot
    pub content: SectionContent,
    pub is_active: bool,
    pub display_order: i32,
}

impl PageSection {
    pub fn section_key(&self) -> SectionKey {
        self.content.key()
    }
}

/// Partial update for a page section; absent fields persist unchanged
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SectionPatch {
    pub title: Option<String>,
    /// Replacement content; its tag must agree with the section being patched
    pub content: Option<SectionContent>,
    pub is_active: Option<bool>,
}
