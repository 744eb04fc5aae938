//! Content service - site settings and editable page sections.

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::domain::{PageSection, SectionKey, SectionPatch, SettingsPatch, SiteSettings};
use crate::errors::{AppError, AppResult};
use crate::infra::Repositories;
use crate::snapshot::{defaults, SnapshotStore};

/// Settings plus the visible sections, served to the public site
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicContent {
    pub settings: SiteSettings,
    pub sections: Vec<PageSection>,
}

/// Content service trait for dependency injection.
#[async_trait]
pub trait ContentService: Send + Sync {
    /// Current settings, falling back to the built-in defaults when the
    /// table has not been seeded
    async fn get_settings(&self) -> AppResult<SiteSettings>;

    /// Merge a partial update into the settings and persist the result
    async fn update_settings(&self, patch: SettingsPatch) -> AppResult<SiteSettings>;

    /// All sections ordered by display order
    async fn list_sections(&self) -> AppResult<Vec<PageSection>>;

    /// Patch the section in the given key slot. Replacement content whose
    /// tag disagrees with the key is rejected.
    async fn update_section(&self, key: SectionKey, patch: SectionPatch) -> AppResult<PageSection>;

    /// Settings plus active sections for the public site
    async fn public_content(&self) -> AppResult<PublicContent>;
}

/// Concrete implementation of ContentService.
///
/// Mutations are mirrored into the local snapshot.
pub struct ContentManager<R: Repositories> {
    repos: Arc<R>,
    snapshot: Arc<SnapshotStore>,
}

impl<R: Repositories> ContentManager<R> {
    pub fn new(repos: Arc<R>, snapshot: Arc<SnapshotStore>) -> Self {
        Self { repos, snapshot }
    }
}

#[async_trait]
impl<R: Repositories> ContentService for ContentManager<R> {
    async fn get_settings(&self) -> AppResult<SiteSettings> {
        Ok(self
            .repos
            .content()
            .get_settings()
            .await?
            .unwrap_or_else(defaults::default_settings))
    }

    async fn update_settings(&self, patch: SettingsPatch) -> AppResult<SiteSettings> {
        let mut settings = self.get_settings().await?;
        settings.merge(patch.clone());
        let saved = self.repos.content().save_settings(settings).await?;
        self.snapshot.merge_settings(patch);
        Ok(saved)
    }

    async fn list_sections(&self) -> AppResult<Vec<PageSection>> {
        self.repos.content().list_sections().await
    }

    async fn update_section(&self, key: SectionKey, patch: SectionPatch) -> AppResult<PageSection> {
        let mut section = self
            .repos
            .content()
            .find_section(key)
            .await?
            .ok_or(AppError::NotFound("Section"))?;

        let visibility_only =
            patch.content.is_none() && patch.title.is_none() && patch.is_active.is_some();

        if let Some(content) = patch.content {
            if content.key() != key {
                return Err(AppError::validation(format!(
                    "Content does not belong to section '{}'",
                    key
                )));
            }
            section.content = content;
        }
        if let Some(title) = patch.title {
            section.title = title;
        }
        if let Some(is_active) = patch.is_active {
            section.is_active = is_active;
        }

        let saved = self.repos.content().save_section(section).await?;

        if visibility_only {
            self.snapshot.set_section_visibility(key, saved.is_active);
        } else {
            self.snapshot
                .set_sections(self.repos.content().list_sections().await?);
        }

        Ok(saved)
    }

    async fn public_content(&self) -> AppResult<PublicContent> {
        let settings = self.get_settings().await?;
        let sections = self
            .repos
            .content()
            .list_sections()
            .await?
            .into_iter()
            .filter(|s| s.is_active)
            .collect();

        Ok(PublicContent { settings, sections })
    }
}
