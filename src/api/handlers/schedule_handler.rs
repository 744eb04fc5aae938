//! Schedule management handlers (admin back office).

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::without_all;
use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{
    schedule::validate_time, DayOfWeek, NewSchedule, Schedule, SchedulePatch, ScheduleWithDoctor,
};
use crate::errors::AppResult;
use crate::infra::ScheduleFilter;
use crate::types::MessageResponse;

/// Schedule listing filters
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleListQuery {
    pub doctor_id: Option<Uuid>,
    /// One of the seven day labels, or `all`
    pub day_of_week: Option<String>,
    pub poli: Option<String>,
    pub is_active: Option<String>,
}

impl ScheduleListQuery {
    fn into_filter(self) -> AppResult<ScheduleFilter> {
        let day_of_week = without_all(self.day_of_week)
            .map(|d| d.parse::<DayOfWeek>())
            .transpose()?;

        Ok(ScheduleFilter {
            doctor_id: self.doctor_id,
            day_of_week,
            poli: without_all(self.poli),
            is_active: self.is_active.as_deref().and_then(|v| match v {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            }),
        })
    }
}

/// Schedule creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateScheduleRequest {
    pub doctor_id: Uuid,
    /// One of Senin/Selasa/Rabu/Kamis/Jumat/Sabtu/Minggu
    #[schema(example = "Senin")]
    pub day_of_week: String,
    #[schema(example = "08:00")]
    pub start_time: String,
    #[schema(example = "12:00")]
    pub end_time: String,
    #[validate(length(min = 1, message = "Poli is required"))]
    #[schema(example = "Penyakit Dalam")]
    pub poli: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// Partial schedule update
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateScheduleRequest {
    pub doctor_id: Option<Uuid>,
    pub day_of_week: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub poli: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateScheduleRequest {
    fn into_patch(self) -> AppResult<SchedulePatch> {
        if let Some(start) = &self.start_time {
            validate_time(start)?;
        }
        if let Some(end) = &self.end_time {
            validate_time(end)?;
        }

        Ok(SchedulePatch {
            doctor_id: self.doctor_id,
            day_of_week: self.day_of_week.map(|d| d.parse()).transpose()?,
            start_time: self.start_time,
            end_time: self.end_time,
            poli: self.poli.filter(|s| !s.is_empty()),
            is_active: self.is_active,
        })
    }
}

/// Schedule listing response
#[derive(Debug, Serialize, ToSchema)]
pub struct ScheduleListResponse {
    pub schedules: Vec<ScheduleWithDoctor>,
}

/// Single schedule with a result message
#[derive(Debug, Serialize, ToSchema)]
pub struct ScheduleResponse {
    pub message: String,
    pub schedule: Schedule,
}

/// Create schedule management routes (session-gated)
pub fn schedule_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_schedules).post(create_schedule))
        .route(
            "/:id",
            get(get_schedule)
                .patch(update_schedule)
                .delete(delete_schedule),
        )
}

/// List schedules with optional filters
#[utoipa::path(
    get,
    path = "/api/schedules",
    tag = "Schedules",
    params(
        ("doctorId" = Option<Uuid>, Query, description = "Owning doctor"),
        ("dayOfWeek" = Option<String>, Query, description = "Day label, or `all`"),
        ("poli" = Option<String>, Query, description = "Clinic label, or `all`"),
        ("isActive" = Option<String>, Query, description = "`true` or `false`")
    ),
    responses(
        (status = 200, description = "Schedule list", body = ScheduleListResponse),
        (status = 401, description = "Not authenticated")
    ),
    security(("session_cookie" = []))
)]
pub async fn list_schedules(
    State(state): State<AppState>,
    Query(query): Query<ScheduleListQuery>,
) -> AppResult<Json<ScheduleListResponse>> {
    let schedules = state
        .schedule_service
        .list_schedules(query.into_filter()?)
        .await?;
    Ok(Json(ScheduleListResponse { schedules }))
}

/// Create a schedule
#[utoipa::path(
    post,
    path = "/api/schedules",
    tag = "Schedules",
    request_body = CreateScheduleRequest,
    responses(
        (status = 200, description = "Schedule created", body = ScheduleResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Doctor not found")
    ),
    security(("session_cookie" = []))
)]
pub async fn create_schedule(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateScheduleRequest>,
) -> AppResult<Json<ScheduleResponse>> {
    validate_time(&payload.start_time)?;
    validate_time(&payload.end_time)?;

    let schedule = state
        .schedule_service
        .create_schedule(NewSchedule {
            doctor_id: payload.doctor_id,
            day_of_week: payload.day_of_week.parse()?,
            start_time: payload.start_time,
            end_time: payload.end_time,
            poli: payload.poli,
            is_active: payload.is_active,
        })
        .await?;

    Ok(Json(ScheduleResponse {
        message: "Schedule created".to_string(),
        schedule,
    }))
}

/// Get a schedule by id
#[utoipa::path(
    get,
    path = "/api/schedules/{id}",
    tag = "Schedules",
    params(("id" = Uuid, Path, description = "Schedule id")),
    responses(
        (status = 200, description = "Schedule found", body = ScheduleWithDoctor),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Schedule not found")
    ),
    security(("session_cookie" = []))
)]
pub async fn get_schedule(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ScheduleWithDoctor>> {
    let schedule = state.schedule_service.get_schedule(id).await?;
    Ok(Json(schedule))
}

/// Partially update a schedule
#[utoipa::path(
    patch,
    path = "/api/schedules/{id}",
    tag = "Schedules",
    params(("id" = Uuid, Path, description = "Schedule id")),
    request_body = UpdateScheduleRequest,
    responses(
        (status = 200, description = "Schedule updated", body = ScheduleResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Schedule not found")
    ),
    security(("session_cookie" = []))
)]
pub async fn update_schedule(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateScheduleRequest>,
) -> AppResult<Json<ScheduleResponse>> {
    let schedule = state
        .schedule_service
        .update_schedule(id, payload.into_patch()?)
        .await?;

    Ok(Json(ScheduleResponse {
        message: "Schedule updated".to_string(),
        schedule,
    }))
}

/// Delete a schedule
#[utoipa::path(
    delete,
    path = "/api/schedules/{id}",
    tag = "Schedules",
    params(("id" = Uuid, Path, description = "Schedule id")),
    responses(
        (status = 200, description = "Schedule deleted", body = MessageResponse),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Schedule not found")
    ),
    security(("session_cookie" = []))
)]
pub async fn delete_schedule(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    state.schedule_service.delete_schedule(id).await?;
    Ok(Json(MessageResponse::new("Schedule deleted")))
}
