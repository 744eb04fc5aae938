//! Site settings and page section handlers (admin back office).

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, patch},
    Router,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::domain::{PageSection, SectionKey, SectionPatch, SettingsPatch, SiteSettings};
use crate::errors::{AppError, AppResult};

/// Settings with a result message
#[derive(Debug, Serialize, ToSchema)]
pub struct SettingsResponse {
    pub message: String,
    pub settings: SiteSettings,
}

/// Section listing response
#[derive(Debug, Serialize, ToSchema)]
pub struct SectionListResponse {
    pub sections: Vec<PageSection>,
}

/// Single section with a result message
#[derive(Debug, Serialize, ToSchema)]
pub struct SectionResponse {
    pub message: String,
    pub section: PageSection,
}

/// Create content management routes (session-gated)
pub fn content_routes() -> Router<AppState> {
    Router::new()
        .route("/settings", get(get_settings).patch(update_settings))
        .route("/sections", get(list_sections))
        .route("/sections/:key", patch(update_section))
}

/// Current site settings
#[utoipa::path(
    get,
    path = "/api/settings",
    tag = "Content",
    responses(
        (status = 200, description = "Current settings", body = SiteSettings),
        (status = 401, description = "Not authenticated")
    ),
    security(("session_cookie" = []))
)]
pub async fn get_settings(State(state): State<AppState>) -> AppResult<Json<SiteSettings>> {
    let settings = state.content_service.get_settings().await?;
    Ok(Json(settings))
}

/// Partially update the site settings
#[utoipa::path(
    patch,
    path = "/api/settings",
    tag = "Content",
    request_body = SettingsPatch,
    responses(
        (status = 200, description = "Settings updated", body = SettingsResponse),
        (status = 401, description = "Not authenticated")
    ),
    security(("session_cookie" = []))
)]
pub async fn update_settings(
    State(state): State<AppState>,
    Json(patch): Json<SettingsPatch>,
) -> AppResult<Json<SettingsResponse>> {
    let settings = state.content_service.update_settings(patch).await?;
    Ok(Json(SettingsResponse {
        message: "Settings updated".to_string(),
        settings,
    }))
}

/// All page sections in display order
#[utoipa::path(
    get,
    path = "/api/sections",
    tag = "Content",
    responses(
        (status = 200, description = "Section list", body = SectionListResponse),
        (status = 401, description = "Not authenticated")
    ),
    security(("session_cookie" = []))
)]
pub async fn list_sections(State(state): State<AppState>) -> AppResult<Json<SectionListResponse>> {
    let sections = state.content_service.list_sections().await?;
    Ok(Json(SectionListResponse { sections }))
}

/// Patch the section in the given key slot
#[utoipa::path(
    patch,
    path = "/api/sections/{key}",
    tag = "Content",
    params(("key" = String, Path, description = "Section key: hero, profile, or contact")),
    request_body = SectionPatch,
    responses(
        (status = 200, description = "Section updated", body = SectionResponse),
        (status = 400, description = "Content does not match the section key"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Unknown section key")
    ),
    security(("session_cookie" = []))
)]
pub async fn update_section(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(patch): Json<SectionPatch>,
) -> AppResult<Json<SectionResponse>> {
    // An unknown slot in the path is a missing resource, not a bad value
    let key = key
        .parse::<SectionKey>()
        .map_err(|_| AppError::NotFound("Section"))?;

    let section = state.content_service.update_section(key, patch).await?;
    Ok(Json(SectionResponse {
        message: "Section updated".to_string(),
        section,
    }))
}
