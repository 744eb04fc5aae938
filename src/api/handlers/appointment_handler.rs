//! Appointment management handlers (admin back office).

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::without_all;
use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{Appointment, AppointmentStatus, AppointmentWithDoctor, NewAppointment};
use crate::errors::AppResult;
use crate::infra::AppointmentFilter;
use crate::types::MessageResponse;

/// Appointment listing filters
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentListQuery {
    /// One of the four status labels, or `all`
    pub status: Option<String>,
    pub doctor_id: Option<Uuid>,
    pub search: Option<String>,
}

impl AppointmentListQuery {
    fn into_filter(self) -> AppResult<AppointmentFilter> {
        let status = without_all(self.status)
            .map(|s| s.parse::<AppointmentStatus>())
            .transpose()?;

        Ok(AppointmentFilter {
            status,
            doctor_id: self.doctor_id,
            search: self.search.filter(|s| !s.is_empty()),
        })
    }
}

/// Appointment creation request (shared with the public booking form)
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
    #[validate(length(min = 1, message = "Patient name is required"))]
    #[schema(example = "Budi Hartono")]
    pub patient_name: String,
    #[validate(length(min = 1, message = "Phone is required"))]
    #[schema(example = "081122334455")]
    pub phone: String,
    pub doctor_id: Uuid,
    pub visit_date: NaiveDate,
    pub notes: Option<String>,
}

impl CreateAppointmentRequest {
    pub(crate) fn into_new(self) -> NewAppointment {
        NewAppointment {
            patient_name: self.patient_name,
            phone: self.phone,
            doctor_id: self.doctor_id,
            visit_date: self.visit_date,
            notes: self.notes.filter(|n| !n.is_empty()),
        }
    }
}

/// Status change request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateAppointmentStatusRequest {
    /// pending, confirmed, completed, or cancelled
    #[schema(example = "confirmed")]
    pub status: String,
}

/// Appointment listing response
#[derive(Debug, Serialize, ToSchema)]
pub struct AppointmentListResponse {
    pub appointments: Vec<AppointmentWithDoctor>,
}

/// Single appointment with a result message
#[derive(Debug, Serialize, ToSchema)]
pub struct AppointmentResponse {
    pub message: String,
    pub appointment: Appointment,
}

/// Create appointment management routes (session-gated)
pub fn appointment_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_appointments).post(create_appointment))
        .route(
            "/:id",
            get(get_appointment)
                .patch(update_appointment_status)
                .delete(delete_appointment),
        )
}

/// List appointments with optional filters
#[utoipa::path(
    get,
    path = "/api/appointments",
    tag = "Appointments",
    params(
        ("status" = Option<String>, Query, description = "Status label, or `all`"),
        ("doctorId" = Option<Uuid>, Query, description = "Filter by doctor"),
        ("search" = Option<String>, Query, description = "Substring over patient name and phone")
    ),
    responses(
        (status = 200, description = "Appointment list", body = AppointmentListResponse),
        (status = 401, description = "Not authenticated")
    ),
    security(("session_cookie" = []))
)]
pub async fn list_appointments(
    State(state): State<AppState>,
    Query(query): Query<AppointmentListQuery>,
) -> AppResult<Json<AppointmentListResponse>> {
    let appointments = state
        .appointment_service
        .list_appointments(query.into_filter()?)
        .await?;
    Ok(Json(AppointmentListResponse { appointments }))
}

/// Create an appointment from the admin form
#[utoipa::path(
    post,
    path = "/api/appointments",
    tag = "Appointments",
    request_body = CreateAppointmentRequest,
    responses(
        (status = 200, description = "Appointment created", body = AppointmentResponse),
        (status = 400, description = "Validation error or inactive doctor"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Doctor not found")
    ),
    security(("session_cookie" = []))
)]
pub async fn create_appointment(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateAppointmentRequest>,
) -> AppResult<Json<AppointmentResponse>> {
    let appointment = state
        .appointment_service
        .create_appointment(payload.into_new())
        .await?;

    Ok(Json(AppointmentResponse {
        message: "Appointment created".to_string(),
        appointment,
    }))
}

/// Get an appointment by id
#[utoipa::path(
    get,
    path = "/api/appointments/{id}",
    tag = "Appointments",
    params(("id" = Uuid, Path, description = "Appointment id")),
    responses(
        (status = 200, description = "Appointment found", body = AppointmentWithDoctor),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Appointment not found")
    ),
    security(("session_cookie" = []))
)]
pub async fn get_appointment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<AppointmentWithDoctor>> {
    let appointment = state.appointment_service.get_appointment(id).await?;
    Ok(Json(appointment))
}

/// Change an appointment's status
#[utoipa::path(
    patch,
    path = "/api/appointments/{id}",
    tag = "Appointments",
    params(("id" = Uuid, Path, description = "Appointment id")),
    request_body = UpdateAppointmentStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = AppointmentResponse),
        (status = 400, description = "Unknown status or illegal transition"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Appointment not found")
    ),
    security(("session_cookie" = []))
)]
pub async fn update_appointment_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateAppointmentStatusRequest>,
) -> AppResult<Json<AppointmentResponse>> {
    let status = payload.status.parse::<AppointmentStatus>()?;
    let appointment = state.appointment_service.update_status(id, status).await?;

    Ok(Json(AppointmentResponse {
        message: "Appointment updated".to_string(),
        appointment,
    }))
}

/// Delete an appointment
#[utoipa::path(
    delete,
    path = "/api/appointments/{id}",
    tag = "Appointments",
    params(("id" = Uuid, Path, description = "Appointment id")),
    responses(
        (status = 200, description = "Appointment deleted", body = MessageResponse),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Appointment not found")
    ),
    security(("session_cookie" = []))
)]
pub async fn delete_appointment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    state.appointment_service.delete_appointment(id).await?;
    Ok(Json(MessageResponse::new("Appointment deleted")))
}
