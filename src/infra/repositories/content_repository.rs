//! Site settings and page section repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use super::entities::page_section::{self, Entity as SectionEntity};
use super::entities::site_settings::{self, Entity as SettingsEntity};
use crate::domain::{PageSection, SectionKey, SiteSettings};
use crate::errors::{AppError, AppResult};

/// Content repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// The singleton settings row, if seeded
    async fn get_settings(&self) -> AppResult<Option<SiteSettings>>;

    /// Replace (or create) the singleton settings row
    async fn save_settings(&self, settings: SiteSettings) -> AppResult<SiteSettings>;

    /// All sections ordered by display order
    async fn list_sections(&self) -> AppResult<Vec<PageSection>>;

    async fn find_section(&self, key: SectionKey) -> AppResult<Option<PageSection>>;

    /// Persist a section into its key slot, inserting if missing
    async fn save_section(&self, section: PageSection) -> AppResult<PageSection>;
}

/// SeaORM-backed content repository
pub struct ContentStore {
    db: DatabaseConnection,
}

impl ContentStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContentRepository for ContentStore {
    async fn get_settings(&self) -> AppResult<Option<SiteSettings>> {
        let row = SettingsEntity::find()
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(row.map(SiteSettings::from))
    }

    async fn save_settings(&self, settings: SiteSettings) -> AppResult<SiteSettings> {
        let existing = SettingsEntity::find()
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        let model = match existing {
            Some(row) => {
                let mut active: site_settings::ActiveModel = row.into();
                active.hospital_name = Set(settings.hospital_name);
                active.tagline = Set(settings.tagline);
                active.email = Set(settings.email);
                active.phone = Set(settings.phone);
                active.facebook_url = Set(settings.facebook_url);
                active.twitter_url = Set(settings.twitter_url);
                active.instagram_url = Set(settings.instagram_url);
                active.youtube_url = Set(settings.youtube_url);
                active.update(&self.db).await.map_err(AppError::from)?
            }
            None => {
                let active = site_settings::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    hospital_name: Set(settings.hospital_name),
                    tagline: Set(settings.tagline),
                    email: Set(settings.email),
                    phone: Set(settings.phone),
                    facebook_url: Set(settings.facebook_url),
                    twitter_url: Set(settings.twitter_url),
                    instagram_url: Set(settings.instagram_url),
                    youtube_url: Set(settings.youtube_url),
                };
                active.insert(&self.db).await.map_err(AppError::from)?
            }
        };

        Ok(SiteSettings::from(model))
    }

    async fn list_sections(&self) -> AppResult<Vec<PageSection>> {
        let models = SectionEntity::find()
            .order_by_asc(page_section::Column::DisplayOrder)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        models.into_iter().map(PageSection::try_from).collect()
    }

    async fn find_section(&self, key: SectionKey) -> AppResult<Option<PageSection>> {
        let row = SectionEntity::find()
            .filter(page_section::Column::SectionKey.eq(key.as_str()))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        row.map(PageSection::try_from).transpose()
    }

    async fn save_section(&self, section: PageSection) -> AppResult<PageSection> {
        let key = section.section_key();
        let content = serde_json::to_value(&section.content)
            .map_err(|e| AppError::internal(format!("Section content encoding: {}", e)))?;

        let existing = SectionEntity::find()
            .filter(page_section::Column::SectionKey.eq(key.as_str()))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        let model = match existing {
            Some(row) => {
                let mut active: page_section::ActiveModel = row.into();
                active.title = Set(section.title);
                active.content = Set(content);
                active.is_active = Set(section.is_active);
                active.display_order = Set(section.display_order);
                active.update(&self.db).await.map_err(AppError::from)?
            }
            None => {
                let active = page_section::ActiveModel {
                    id: Set(section.id),
                    section_key: Set(key.as_str().to_string()),
                    title: Set(section.title),
                    content: Set(content),
                    is_active: Set(section.is_active),
                    display_order: Set(section.display_order),
                };
                active.insert(&self.db).await.map_err(AppError::from)?
            }
        };

        PageSection::try_from(model)
    }
}
