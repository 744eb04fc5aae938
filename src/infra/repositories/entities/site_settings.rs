//! `site_settings` table entity (singleton row).

use sea_orm::entity::prelude::*;

use crate::domain::SiteSettings;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "site_settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub hospital_name: String,
    pub tagline: String,
    pub email: String,
    pub phone: String,
    pub facebook_url: String,
    pub twitter_url: String,
    pub instagram_url: String,
    pub youtube_url: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for SiteSettings {
    fn from(model: Model) -> Self {
        SiteSettings {
            hospital_name: model.hospital_name,
            tagline: model.tagline,
            email: model.email,
            phone: model.phone,
            facebook_url: model.facebook_url,
            twitter_url: model.twitter_url,
            instagram_url: model.instagram_url,
            youtube_url: model.youtube_url,
        }
    }
}
