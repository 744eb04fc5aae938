//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{
    appointment_handler, auth_handler, content_handler, doctor_handler, public_handler,
    schedule_handler,
};
use crate::domain::{
    AdminProfile, Appointment, AppointmentStatus, AppointmentWithDoctor, DayOfWeek, Doctor,
    DoctorRef, DoctorWithSchedules, PageSection, Schedule, ScheduleWithDoctor, SectionContent,
    SectionKey, SectionPatch, SectionStat, ServiceHours, SettingsPatch, SiteSettings,
};
use crate::services::PublicContent;
use crate::types::MessageResponse;

/// OpenAPI documentation for the hospital API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hospital API",
        version = "0.1.0",
        description = "Public booking and back-office API for a hospital website",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        auth_handler::login,
        auth_handler::logout,
        doctor_handler::list_doctors,
        doctor_handler::create_doctor,
        doctor_handler::get_doctor,
        doctor_handler::update_doctor,
        doctor_handler::delete_doctor,
        schedule_handler::list_schedules,
        schedule_handler::create_schedule,
        schedule_handler::get_schedule,
        schedule_handler::update_schedule,
        schedule_handler::delete_schedule,
        appointment_handler::list_appointments,
        appointment_handler::create_appointment,
        appointment_handler::get_appointment,
        appointment_handler::update_appointment_status,
        appointment_handler::delete_appointment,
        content_handler::get_settings,
        content_handler::update_settings,
        content_handler::list_sections,
        content_handler::update_section,
        public_handler::list_public_doctors,
        public_handler::create_public_appointment,
        public_handler::get_public_content,
    ),
    components(
        schemas(
            // Domain types
            AdminProfile,
            Doctor,
            DoctorRef,
            DoctorWithSchedules,
            DayOfWeek,
            Schedule,
            ScheduleWithDoctor,
            Appointment,
            AppointmentStatus,
            AppointmentWithDoctor,
            SiteSettings,
            SettingsPatch,
            SectionKey,
            SectionContent,
            SectionStat,
            ServiceHours,
            SectionPatch,
            PageSection,
            PublicContent,
            MessageResponse,
            // Request/response types
            auth_handler::LoginRequest,
            auth_handler::LoginResponse,
            doctor_handler::CreateDoctorRequest,
            doctor_handler::UpdateDoctorRequest,
            doctor_handler::DoctorListResponse,
            doctor_handler::DoctorResponse,
            schedule_handler::CreateScheduleRequest,
            schedule_handler::UpdateScheduleRequest,
            schedule_handler::ScheduleListResponse,
            schedule_handler::ScheduleResponse,
            appointment_handler::CreateAppointmentRequest,
            appointment_handler::UpdateAppointmentStatusRequest,
            appointment_handler::AppointmentListResponse,
            appointment_handler::AppointmentResponse,
            content_handler::SettingsResponse,
            content_handler::SectionListResponse,
            content_handler::SectionResponse,
            public_handler::PublicDoctorsResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Admin login and logout"),
        (name = "Doctors", description = "Doctor management"),
        (name = "Schedules", description = "Practice-hours management"),
        (name = "Appointments", description = "Appointment management"),
        (name = "Content", description = "Site settings and page sections"),
        (name = "Public", description = "Public site endpoints")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for the session cookie
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_cookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new("token"))),
            );
        }
    }
}
