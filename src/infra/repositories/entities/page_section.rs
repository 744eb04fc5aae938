//! `page_sections` table entity.

use sea_orm::entity::prelude::*;

use crate::domain::{PageSection, SectionContent};
use crate::errors::AppError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "page_sections")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub section_key: String,
    pub title: String,
    /// Tagged `SectionContent` payload
    pub content: Json,
    pub is_active: bool,
    pub display_order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for PageSection {
    type Error = AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let content: SectionContent = serde_json::from_value(model.content)
            .map_err(|e| AppError::internal(format!("Corrupt section content: {}", e)))?;
        Ok(PageSection {
            id: model.id,
            title: model.title,
            content,
            is_active: model.is_active,
            display_order: model.display_order,
        })
    }
}
