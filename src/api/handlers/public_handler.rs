//! Public site handlers, reachable without a session.

use axum::{
    extract::{Query, State},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::appointment_handler::{AppointmentResponse, CreateAppointmentRequest};
use super::without_all;
use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{DayOfWeek, DoctorWithSchedules};
use crate::errors::AppResult;
use crate::services::PublicContent;

/// Public doctor directory filters
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicDoctorsQuery {
    pub specialty: Option<String>,
    /// Day label narrowing the embedded schedules, or `all`
    pub day: Option<String>,
}

/// Public doctor directory response
#[derive(Debug, Serialize, ToSchema)]
pub struct PublicDoctorsResponse {
    pub doctors: Vec<DoctorWithSchedules>,
}

/// Create public routes
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/doctors", get(list_public_doctors))
        .route("/appointments", post(create_public_appointment))
        .route("/content", get(get_public_content))
}

/// Active doctors with their active schedules
#[utoipa::path(
    get,
    path = "/api/public/doctors",
    tag = "Public",
    params(
        ("specialty" = Option<String>, Query, description = "Exact specialty, or `all`"),
        ("day" = Option<String>, Query, description = "Day label narrowing the schedules, or `all`")
    ),
    responses(
        (status = 200, description = "Doctor directory", body = PublicDoctorsResponse),
        (status = 400, description = "Unknown day label")
    )
)]
pub async fn list_public_doctors(
    State(state): State<AppState>,
    Query(query): Query<PublicDoctorsQuery>,
) -> AppResult<Json<PublicDoctorsResponse>> {
    let day = without_all(query.day)
        .map(|d| d.parse::<DayOfWeek>())
        .transpose()?;

    let doctors = state
        .doctor_service
        .list_public_doctors(without_all(query.specialty), day)
        .await?;

    Ok(Json(PublicDoctorsResponse { doctors }))
}

/// Book an appointment from the public site
#[utoipa::path(
    post,
    path = "/api/public/appointments",
    tag = "Public",
    request_body = CreateAppointmentRequest,
    responses(
        (status = 200, description = "Appointment booked", body = AppointmentResponse),
        (status = 400, description = "Validation error or inactive doctor"),
        (status = 404, description = "Doctor not found")
    )
)]
pub async fn create_public_appointment(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateAppointmentRequest>,
) -> AppResult<Json<AppointmentResponse>> {
    let appointment = state
        .appointment_service
        .create_appointment(payload.into_new())
        .await?;

    Ok(Json(AppointmentResponse {
        message: "Appointment booked. We will contact you for confirmation.".to_string(),
        appointment,
    }))
}

/// Settings and visible sections for the public site
#[utoipa::path(
    get,
    path = "/api/public/content",
    tag = "Public",
    responses(
        (status = 200, description = "Public content", body = PublicContent)
    )
)]
pub async fn get_public_content(State(state): State<AppState>) -> AppResult<Json<PublicContent>> {
    let content = state.content_service.public_content().await?;
    Ok(Json(content))
}
