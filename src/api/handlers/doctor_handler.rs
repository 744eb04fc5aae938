//! Doctor management handlers (admin back office).

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

use super::{double_option, without_all};
use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{Doctor, DoctorPatch, NewDoctor};
use crate::errors::AppResult;
use crate::infra::DoctorFilter;
use crate::types::MessageResponse;

/// Doctor listing filters
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorListQuery {
    pub specialty: Option<String>,
    pub search: Option<String>,
    /// `true`/`false`; anything else (including `all`) means no filter
    pub is_active: Option<String>,
}

impl DoctorListQuery {
    fn into_filter(self) -> DoctorFilter {
        DoctorFilter {
            specialty: without_all(self.specialty),
            search: self.search.filter(|s| !s.is_empty()),
            is_active: self.is_active.as_deref().and_then(|v| match v {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            }),
            ..Default::default()
        }
    }
}

/// Doctor creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDoctorRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Dr. Ahmad Santoso, Sp.PD")]
    pub name: String,
    #[validate(length(min = 1, message = "Specialty is required"))]
    #[schema(example = "Penyakit Dalam")]
    pub specialty: String,
    #[validate(length(min = 1, message = "Phone is required"))]
    #[schema(example = "081234567890")]
    pub phone: String,
    pub bio: Option<String>,
    pub photo: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// Partial doctor update. For `bio` and `photo` an explicit null clears
/// the field, while leaving it out keeps the stored value.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDoctorRequest {
    pub name: Option<String>,
    pub specialty: Option<String>,
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(nullable)]
    pub bio: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(nullable)]
    pub photo: Option<Option<String>>,
    pub is_active: Option<bool>,
}

impl UpdateDoctorRequest {
    fn into_patch(self) -> DoctorPatch {
        DoctorPatch {
            // Required fields ignore empty strings so a blank form input
            // doesn't wipe them
            name: self.name.filter(|s| !s.is_empty()),
            specialty: self.specialty.filter(|s| !s.is_empty()),
            phone: self.phone.filter(|s| !s.is_empty()),
            bio: self.bio,
            photo: self.photo,
            is_active: self.is_active,
        }
    }
}

/// Doctor listing response
#[derive(Debug, Serialize, ToSchema)]
pub struct DoctorListResponse {
    pub doctors: Vec<Doctor>,
}

/// Single doctor with a result message
#[derive(Debug, Serialize, ToSchema)]
pub struct DoctorResponse {
    pub message: String,
    pub doctor: Doctor,
}

/// Create doctor management routes (session-gated)
pub fn doctor_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_doctors).post(create_doctor))
        .route(
            "/:id",
            get(get_doctor).patch(update_doctor).delete(delete_doctor),
        )
}

/// List doctors with optional filters
#[utoipa::path(
    get,
    path = "/api/doctors",
    tag = "Doctors",
    params(
        ("specialty" = Option<String>, Query, description = "Exact specialty, or `all`"),
        ("search" = Option<String>, Query, description = "Substring over name and specialty"),
        ("isActive" = Option<String>, Query, description = "`true` or `false`")
    ),
    responses(
        (status = 200, description = "Doctor list", body = DoctorListResponse),
        (status = 401, description = "Not authenticated")
    ),
    security(("session_cookie" = []))
)]
pub async fn list_doctors(
    State(state): State<AppState>,
    Query(query): Query<DoctorListQuery>,
) -> AppResult<Json<DoctorListResponse>> {
    let doctors = state.doctor_service.list_doctors(query.into_filter()).await?;
    Ok(Json(DoctorListResponse { doctors }))
}

/// Create a doctor
#[utoipa::path(
    post,
    path = "/api/doctors",
    tag = "Doctors",
    request_body = CreateDoctorRequest,
    responses(
        (status = 200, description = "Doctor created", body = DoctorResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not authenticated")
    ),
    security(("session_cookie" = []))
)]
pub async fn create_doctor(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateDoctorRequest>,
) -> AppResult<Json<DoctorResponse>> {
    let doctor = state
        .doctor_service
        .create_doctor(NewDoctor {
            name: payload.name,
            specialty: payload.specialty,
            phone: payload.phone,
            bio: payload.bio,
            photo: payload.photo,
            is_active: payload.is_active,
        })
        .await?;

    Ok(Json(DoctorResponse {
        message: "Doctor created".to_string(),
        doctor,
    }))
}

/// Get a doctor by id
#[utoipa::path(
    get,
    path = "/api/doctors/{id}",
    tag = "Doctors",
    params(("id" = Uuid, Path, description = "Doctor id")),
    responses(
        (status = 200, description = "Doctor found", body = Doctor),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Doctor not found")
    ),
    security(("session_cookie" = []))
)]
pub async fn get_doctor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Doctor>> {
    let doctor = state.doctor_service.get_doctor(id).await?;
    Ok(Json(doctor))
}

/// Partially update a doctor
#[utoipa::path(
    patch,
    path = "/api/doctors/{id}",
    tag = "Doctors",
    params(("id" = Uuid, Path, description = "Doctor id")),
    request_body = UpdateDoctorRequest,
    responses(
        (status = 200, description = "Doctor updated", body = DoctorResponse),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Doctor not found")
    ),
    security(("session_cookie" = []))
)]
pub async fn update_doctor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateDoctorRequest>,
) -> AppResult<Json<DoctorResponse>> {
    let doctor = state
        .doctor_service
        .update_doctor(id, payload.into_patch())
        .await?;

    Ok(Json(DoctorResponse {
        message: "Doctor updated".to_string(),
        doctor,
    }))
}

/// Delete a doctor and its schedules
#[utoipa::path(
    delete,
    path = "/api/doctors/{id}",
    tag = "Doctors",
    params(("id" = Uuid, Path, description = "Doctor id")),
    responses(
        (status = 200, description = "Doctor deleted", body = MessageResponse),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Doctor not found"),
        (status = 409, description = "Doctor still has appointments")
    ),
    security(("session_cookie" = []))
)]
pub async fn delete_doctor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    state.doctor_service.delete_doctor(id).await?;
    Ok(Json(MessageResponse::new("Doctor deleted")))
}
