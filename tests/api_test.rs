//! Integration tests for API endpoints.
//!
//! These tests drive the real router through `tower::ServiceExt::oneshot`
//! with in-memory service implementations, so routing, the session gate,
//! status codes, and response shapes are all exercised without a database.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::Utc;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use sehat_api::api::{create_router, AppState};
use sehat_api::domain::{
    Appointment, AppointmentStatus, AppointmentWithDoctor, DayOfWeek, Doctor, DoctorPatch,
    DoctorRef, DoctorWithSchedules, NewAppointment, NewDoctor, NewSchedule, PageSection, Schedule,
    SchedulePatch, ScheduleWithDoctor, SectionContent, SectionKey, SectionPatch, SectionStat,
    ServiceHours, SettingsPatch, SiteSettings,
};
use sehat_api::errors::{AppError, AppResult};
use sehat_api::infra::{AppointmentFilter, DoctorFilter, ScheduleFilter};
use sehat_api::services::{
    AppointmentService, AuthService, Claims, ContentService, DoctorService, PublicContent,
    ScheduleService,
};

const TEST_TOKEN: &str = "test-session-token";

// =============================================================================
// In-memory backend shared by all service traits
// =============================================================================

struct TestData {
    doctors: Vec<Doctor>,
    schedules: Vec<Schedule>,
    appointments: Vec<Appointment>,
    settings: SiteSettings,
    sections: Vec<PageSection>,
}

struct TestServices {
    data: Mutex<TestData>,
}

fn doctor(name: &str, specialty: &str, is_active: bool) -> Doctor {
    let now = Utc::now();
    Doctor {
        id: Uuid::new_v4(),
        name: name.to_string(),
        specialty: specialty.to_string(),
        phone: "081234567890".to_string(),
        bio: Some("Spesialis berpengalaman".to_string()),
        photo: None,
        is_active,
        created_at: now,
        updated_at: now,
    }
}

fn schedule(doctor_id: Uuid, day: DayOfWeek, start: &str, end: &str, poli: &str) -> Schedule {
    let now = Utc::now();
    Schedule {
        id: Uuid::new_v4(),
        doctor_id,
        day_of_week: day,
        start_time: start.to_string(),
        end_time: end.to_string(),
        poli: poli.to_string(),
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

fn settings() -> SiteSettings {
    SiteSettings {
        hospital_name: "RS Sehat Selalu".to_string(),
        tagline: "Layanan Kesehatan Terpercaya".to_string(),
        email: "info@rssehatselalu.com".to_string(),
        phone: "(021) 1234-5678".to_string(),
        facebook_url: "https://facebook.com/rssehatselalu".to_string(),
        twitter_url: "https://twitter.com/rssehatselalu".to_string(),
        instagram_url: "https://instagram.com/rssehatselalu".to_string(),
        youtube_url: "https://youtube.com/rssehatselalu".to_string(),
    }
}

fn sections() -> Vec<PageSection> {
    vec![
        PageSection {
            id: Uuid::new_v4(),
            title: "Hero Section".to_string(),
            content: SectionContent::Hero {
                headline: "Selamat Datang".to_string(),
                subheadline: "Layanan kesehatan terpercaya".to_string(),
                cta_text: "Buat Janji Temu".to_string(),
            },
            is_active: true,
            display_order: 1,
        },
        PageSection {
            id: Uuid::new_v4(),
            title: "Profil Rumah Sakit".to_string(),
            content: SectionContent::Profile {
                name: "RS Sehat Selalu".to_string(),
                description: "Rumah sakit modern".to_string(),
                established_year: "2010".to_string(),
                stats: vec![SectionStat {
                    label: "Dokter Spesialis".to_string(),
                    value: "50+".to_string(),
                }],
            },
            is_active: false,
            display_order: 2,
        },
        PageSection {
            id: Uuid::new_v4(),
            title: "Informasi Kontak".to_string(),
            content: SectionContent::Contact {
                address: "Jl. Kesehatan No. 123".to_string(),
                phone: "(021) 1234-5678".to_string(),
                email: "info@rssehatselalu.com".to_string(),
                igd_phone: "(021) 1234-5678".to_string(),
                general_phone: "(021) 1234-5679".to_string(),
                hours: ServiceHours {
                    igd: "24 Jam".to_string(),
                    poli: "08:00 - 20:00".to_string(),
                    weekend: "08:00 - 14:00".to_string(),
                },
            },
            is_active: true,
            display_order: 3,
        },
    ]
}

impl TestServices {
    fn new(doctors: Vec<Doctor>, schedules: Vec<Schedule>) -> Arc<Self> {
        Arc::new(Self {
            data: Mutex::new(TestData {
                doctors,
                schedules,
                appointments: Vec::new(),
                settings: settings(),
                sections: sections(),
            }),
        })
    }

    fn doctor_ref(data: &TestData, doctor_id: Uuid) -> Option<DoctorRef> {
        data.doctors.iter().find(|d| d.id == doctor_id).map(|d| DoctorRef {
            id: d.id,
            name: d.name.clone(),
            specialty: d.specialty.clone(),
        })
    }
}

#[async_trait]
impl AuthService for TestServices {
    async fn login(
        &self,
        email: String,
        password: String,
    ) -> AppResult<(sehat_api::domain::AdminProfile, String)> {
        if email == "admin@rs.com" && password == "admin123" {
            Ok((
                sehat_api::domain::AdminProfile {
                    id: Uuid::new_v4(),
                    email,
                    name: "Admin RS".to_string(),
                    role: "admin".to_string(),
                },
                TEST_TOKEN.to_string(),
            ))
        } else {
            Err(AppError::InvalidCredentials)
        }
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        if token == TEST_TOKEN {
            Ok(Claims {
                sub: Uuid::new_v4(),
                email: "admin@rs.com".to_string(),
                name: "Admin RS".to_string(),
                role: "admin".to_string(),
                exp: Utc::now().timestamp() + 3600,
                iat: Utc::now().timestamp(),
            })
        } else {
            Err(AppError::Unauthorized)
        }
    }
}

#[async_trait]
impl DoctorService for TestServices {
    async fn list_doctors(&self, filter: DoctorFilter) -> AppResult<Vec<Doctor>> {
        let data = self.data.lock().unwrap();
        Ok(data
            .doctors
            .iter()
            .filter(|d| {
                filter
                    .specialty
                    .as_ref()
                    .map_or(true, |s| &d.specialty == s)
                    && filter
                        .search
                        .as_ref()
                        .map_or(true, |q| d.name.contains(q.as_str()) || d.specialty.contains(q.as_str()))
                    && filter.is_active.map_or(true, |a| d.is_active == a)
            })
            .cloned()
            .collect())
    }

    async fn get_doctor(&self, id: Uuid) -> AppResult<Doctor> {
        let data = self.data.lock().unwrap();
        data.doctors
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or(AppError::NotFound("Doctor"))
    }

    async fn create_doctor(&self, new: NewDoctor) -> AppResult<Doctor> {
        let now = Utc::now();
        let doctor = Doctor {
            id: Uuid::new_v4(),
            name: new.name,
            specialty: new.specialty,
            phone: new.phone,
            bio: new.bio,
            photo: new.photo,
            is_active: new.is_active,
            created_at: now,
            updated_at: now,
        };
        self.data.lock().unwrap().doctors.push(doctor.clone());
        Ok(doctor)
    }

    async fn update_doctor(&self, id: Uuid, patch: DoctorPatch) -> AppResult<Doctor> {
        let mut data = self.data.lock().unwrap();
        let doctor = data
            .doctors
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or(AppError::NotFound("Doctor"))?;

        if let Some(name) = patch.name {
            doctor.name = name;
        }
        if let Some(specialty) = patch.specialty {
            doctor.specialty = specialty;
        }
        if let Some(phone) = patch.phone {
            doctor.phone = phone;
        }
        if let Some(bio) = patch.bio {
            doctor.bio = bio;
        }
        if let Some(photo) = patch.photo {
            doctor.photo = photo;
        }
        if let Some(is_active) = patch.is_active {
            doctor.is_active = is_active;
        }
        doctor.updated_at = Utc::now();
        Ok(doctor.clone())
    }

    async fn delete_doctor(&self, id: Uuid) -> AppResult<()> {
        let mut data = self.data.lock().unwrap();
        if data.appointments.iter().any(|a| a.doctor_id == id) {
            return Err(AppError::conflict(
                "Doctor has existing appointments and cannot be deleted",
            ));
        }
        if !data.doctors.iter().any(|d| d.id == id) {
            return Err(AppError::NotFound("Doctor"));
        }
        data.doctors.retain(|d| d.id != id);
        data.schedules.retain(|s| s.doctor_id != id);
        Ok(())
    }

    async fn list_public_doctors(
        &self,
        specialty: Option<String>,
        day: Option<DayOfWeek>,
    ) -> AppResult<Vec<DoctorWithSchedules>> {
        let data = self.data.lock().unwrap();
        let mut doctors: Vec<DoctorWithSchedules> = data
            .doctors
            .iter()
            .filter(|d| d.is_active && specialty.as_ref().map_or(true, |s| &d.specialty == s))
            .map(|d| DoctorWithSchedules {
                doctor: d.clone(),
                schedules: data
                    .schedules
                    .iter()
                    .filter(|s| {
                        s.doctor_id == d.id
                            && s.is_active
                            && day.map_or(true, |day| s.day_of_week == day)
                    })
                    .cloned()
                    .collect(),
            })
            .collect();
        doctors.sort_by(|a, b| a.doctor.name.cmp(&b.doctor.name));
        Ok(doctors)
    }
}

#[async_trait]
impl ScheduleService for TestServices {
    async fn list_schedules(&self, filter: ScheduleFilter) -> AppResult<Vec<ScheduleWithDoctor>> {
        let data = self.data.lock().unwrap();
        Ok(data
            .schedules
            .iter()
            .filter(|s| {
                filter.doctor_id.map_or(true, |id| s.doctor_id == id)
                    && filter.day_of_week.map_or(true, |d| s.day_of_week == d)
                    && filter.poli.as_ref().map_or(true, |p| &s.poli == p)
                    && filter.is_active.map_or(true, |a| s.is_active == a)
            })
            .map(|s| ScheduleWithDoctor {
                schedule: s.clone(),
                doctor: TestServices::doctor_ref(&data, s.doctor_id),
            })
            .collect())
    }

    async fn get_schedule(&self, id: Uuid) -> AppResult<ScheduleWithDoctor> {
        let data = self.data.lock().unwrap();
        data.schedules
            .iter()
            .find(|s| s.id == id)
            .map(|s| ScheduleWithDoctor {
                schedule: s.clone(),
                doctor: TestServices::doctor_ref(&data, s.doctor_id),
            })
            .ok_or(AppError::NotFound("Schedule"))
    }

    async fn create_schedule(&self, new: NewSchedule) -> AppResult<Schedule> {
        let mut data = self.data.lock().unwrap();
        if !data.doctors.iter().any(|d| d.id == new.doctor_id) {
            return Err(AppError::NotFound("Doctor"));
        }
        let now = Utc::now();
        let schedule = Schedule {
            id: Uuid::new_v4(),
            doctor_id: new.doctor_id,
            day_of_week: new.day_of_week,
            start_time: new.start_time,
            end_time: new.end_time,
            poli: new.poli,
            is_active: new.is_active,
            created_at: now,
            updated_at: now,
        };
        data.schedules.push(schedule.clone());
        Ok(schedule)
    }

    async fn update_schedule(&self, id: Uuid, patch: SchedulePatch) -> AppResult<Schedule> {
        let mut data = self.data.lock().unwrap();
        let schedule = data
            .schedules
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(AppError::NotFound("Schedule"))?;

        if let Some(doctor_id) = patch.doctor_id {
            schedule.doctor_id = doctor_id;
        }
        if let Some(day) = patch.day_of_week {
            schedule.day_of_week = day;
        }
        if let Some(start) = patch.start_time {
            schedule.start_time = start;
        }
        if let Some(end) = patch.end_time {
            schedule.end_time = end;
        }
        if let Some(poli) = patch.poli {
            schedule.poli = poli;
        }
        if let Some(is_active) = patch.is_active {
            schedule.is_active = is_active;
        }
        Ok(schedule.clone())
    }

    async fn delete_schedule(&self, id: Uuid) -> AppResult<()> {
        let mut data = self.data.lock().unwrap();
        if !data.schedules.iter().any(|s| s.id == id) {
            return Err(AppError::NotFound("Schedule"));
        }
        data.schedules.retain(|s| s.id != id);
        Ok(())
    }
}

#[async_trait]
impl AppointmentService for TestServices {
    async fn list_appointments(
        &self,
        filter: AppointmentFilter,
    ) -> AppResult<Vec<AppointmentWithDoctor>> {
        let data = self.data.lock().unwrap();
        Ok(data
            .appointments
            .iter()
            .filter(|a| {
                filter.status.map_or(true, |s| a.status == s)
                    && filter.doctor_id.map_or(true, |id| a.doctor_id == id)
                    && filter.search.as_ref().map_or(true, |q| {
                        a.patient_name.contains(q.as_str()) || a.phone.contains(q.as_str())
                    })
            })
            .map(|a| AppointmentWithDoctor {
                appointment: a.clone(),
                doctor: TestServices::doctor_ref(&data, a.doctor_id),
            })
            .collect())
    }

    async fn get_appointment(&self, id: Uuid) -> AppResult<AppointmentWithDoctor> {
        let data = self.data.lock().unwrap();
        data.appointments
            .iter()
            .find(|a| a.id == id)
            .map(|a| AppointmentWithDoctor {
                appointment: a.clone(),
                doctor: TestServices::doctor_ref(&data, a.doctor_id),
            })
            .ok_or(AppError::NotFound("Appointment"))
    }

    async fn create_appointment(&self, new: NewAppointment) -> AppResult<Appointment> {
        let mut data = self.data.lock().unwrap();
        let doctor = data
            .doctors
            .iter()
            .find(|d| d.id == new.doctor_id)
            .ok_or(AppError::NotFound("Doctor"))?;
        if !doctor.is_active {
            return Err(AppError::bad_request("Doctor is not active"));
        }

        let now = Utc::now();
        let appointment = Appointment {
            id: Uuid::new_v4(),
            patient_name: new.patient_name,
            phone: new.phone,
            doctor_id: new.doctor_id,
            visit_date: new.visit_date,
            notes: new.notes,
            status: AppointmentStatus::Pending,
            created_at: now,
            updated_at: now,
        };
        data.appointments.push(appointment.clone());
        Ok(appointment)
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: AppointmentStatus,
    ) -> AppResult<Appointment> {
        let mut data = self.data.lock().unwrap();
        let appointment = data
            .appointments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(AppError::NotFound("Appointment"))?;

        if !appointment.status.can_transition_to(status) {
            return Err(AppError::bad_request(format!(
                "Cannot change status from {} to {}",
                appointment.status, status
            )));
        }
        appointment.status = status;
        appointment.updated_at = Utc::now();
        Ok(appointment.clone())
    }

    async fn delete_appointment(&self, id: Uuid) -> AppResult<()> {
        let mut data = self.data.lock().unwrap();
        if !data.appointments.iter().any(|a| a.id == id) {
            return Err(AppError::NotFound("Appointment"));
        }
        data.appointments.retain(|a| a.id != id);
        Ok(())
    }
}

#[async_trait]
impl ContentService for TestServices {
    async fn get_settings(&self) -> AppResult<SiteSettings> {
        Ok(self.data.lock().unwrap().settings.clone())
    }

    async fn update_settings(&self, patch: SettingsPatch) -> AppResult<SiteSettings> {
        let mut data = self.data.lock().unwrap();
        data.settings.merge(patch);
        Ok(data.settings.clone())
    }

    async fn list_sections(&self) -> AppResult<Vec<PageSection>> {
        Ok(self.data.lock().unwrap().sections.clone())
    }

    async fn update_section(
        &self,
        key: SectionKey,
        patch: SectionPatch,
    ) -> AppResult<PageSection> {
        let mut data = self.data.lock().unwrap();
        let section = data
            .sections
            .iter_mut()
            .find(|s| s.section_key() == key)
            .ok_or(AppError::NotFound("Section"))?;

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
        Ok(section.clone())
    }

    async fn public_content(&self) -> AppResult<PublicContent> {
        let data = self.data.lock().unwrap();
        Ok(PublicContent {
            settings: data.settings.clone(),
            sections: data
                .sections
                .iter()
                .filter(|s| s.is_active)
                .cloned()
                .collect(),
        })
    }
}

// =============================================================================
// Test helpers
// =============================================================================

fn app_with(services: Arc<TestServices>) -> Router {
    let state = AppState::new(
        services.clone(),
        services.clone(),
        services.clone(),
        services.clone(),
        services,
    );
    create_router(state)
}

fn app() -> (Router, Uuid, Uuid) {
    let active = doctor("Dr. Ahmad Santoso, Sp.PD", "Penyakit Dalam", true);
    let inactive = doctor("Dr. Maya Kartika, Sp.A", "Anak", false);
    let active_id = active.id;
    let inactive_id = inactive.id;

    let schedules = vec![
        schedule(active_id, DayOfWeek::Senin, "08:00", "12:00", "Penyakit Dalam"),
        schedule(active_id, DayOfWeek::Rabu, "14:00", "17:00", "Penyakit Dalam"),
    ];

    let services = TestServices::new(vec![active, inactive], schedules);
    (app_with(services), active_id, inactive_id)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn get_admin(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::COOKIE, format!("token={}", TEST_TOKEN))
        .body(Body::empty())
        .unwrap()
}

fn send_json(method: &str, uri: &str, body: Value, authed: bool) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if authed {
        builder = builder.header(header::COOKIE, format!("token={}", TEST_TOKEN));
    }
    builder
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// Session gate
// =============================================================================

#[tokio::test]
async fn admin_routes_require_a_session() {
    let (app, _, _) = app();

    for uri in ["/api/doctors", "/api/schedules", "/api/appointments", "/api/settings", "/api/sections"] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{}", uri);
    }
}

#[tokio::test]
async fn a_garbage_token_is_rejected() {
    let (app, _, _) = app();

    let request = Request::builder()
        .uri("/api/doctors")
        .header(header::COOKIE, "token=not-a-real-token")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn public_routes_work_without_a_session() {
    let (app, _, _) = app();

    for uri in ["/api/public/doctors", "/api/public/content", "/health"] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{}", uri);
    }
}

// =============================================================================
// Auth
// =============================================================================

#[tokio::test]
async fn login_sets_the_session_cookie() {
    let (app, _, _) = app();

    let response = app
        .oneshot(send_json(
            "POST",
            "/api/auth/login",
            json!({"email": "admin@rs.com", "password": "admin123"}),
            false,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("login must set a cookie")
        .to_str()
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("token="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
    // 7 days in seconds
    assert!(cookie.contains("Max-Age=604800"));

    let body = body_json(response).await;
    assert_eq!(body["admin"]["email"], "admin@rs.com");
    assert_eq!(body["admin"]["role"], "admin");
    assert!(body["admin"].get("passwordHash").is_none());
}

#[tokio::test]
async fn bad_credentials_are_ambiguous() {
    let (app, _, _) = app();

    let response = app
        .oneshot(send_json(
            "POST",
            "/api/auth/login",
            json!({"email": "admin@rs.com", "password": "wrong"}),
            false,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().get(header::SET_COOKIE).is_none());
    let body = body_json(response).await;
    assert_eq!(body["message"], "Invalid email or password");
}

#[tokio::test]
async fn login_without_password_is_a_validation_error() {
    let (app, _, _) = app();

    let response = app
        .oneshot(send_json(
            "POST",
            "/api/auth/login",
            json!({"email": "admin@rs.com"}),
            false,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn logout_clears_the_cookie() {
    let (app, _, _) = app();

    let response = app
        .oneshot(send_json("POST", "/api/auth/logout", json!({}), false))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("logout must clear the cookie")
        .to_str()
        .unwrap();
    assert!(cookie.starts_with("token="));
}

// =============================================================================
// Doctors
// =============================================================================

#[tokio::test]
async fn creating_a_doctor_without_a_phone_fails() {
    let (app, _, _) = app();

    let response = app
        .oneshot(send_json(
            "POST",
            "/api/doctors",
            json!({"name": "Dr. Budi Pratama, Sp.B", "specialty": "Bedah"}),
            true,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn a_new_doctor_is_active_by_default() {
    let (app, _, _) = app();

    let response = app
        .oneshot(send_json(
            "POST",
            "/api/doctors",
            json!({
                "name": "Dr. Budi Pratama, Sp.B",
                "specialty": "Bedah",
                "phone": "081234567892"
            }),
            true,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["doctor"]["isActive"], true);
    assert_eq!(body["doctor"]["name"], "Dr. Budi Pratama, Sp.B");
}

#[tokio::test]
async fn a_partial_patch_leaves_other_fields_alone() {
    let (app, active_id, _) = app();

    let response = app
        .clone()
        .oneshot(send_json(
            "PATCH",
            &format!("/api/doctors/{}", active_id),
            json!({"phone": "089999999999"}),
            true,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["doctor"]["phone"], "089999999999");
    assert_eq!(body["doctor"]["name"], "Dr. Ahmad Santoso, Sp.PD");
    assert_eq!(body["doctor"]["bio"], "Spesialis berpengalaman");
}

#[tokio::test]
async fn an_explicit_null_clears_the_bio() {
    let (app, active_id, _) = app();

    let response = app
        .oneshot(send_json(
            "PATCH",
            &format!("/api/doctors/{}", active_id),
            json!({"bio": null}),
            true,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    // bio is skipped when None
    assert!(body["doctor"].get("bio").is_none());
}

#[tokio::test]
async fn an_unknown_doctor_is_a_404() {
    let (app, _, _) = app();

    let response = app
        .oneshot(get_admin(&format!("/api/doctors/{}", Uuid::new_v4())))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Doctor not found");
}

#[tokio::test]
async fn a_doctor_with_appointments_cannot_be_deleted() {
    let (app, active_id, _) = app();

    // Book first, then try to delete the doctor
    let response = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/api/public/appointments",
            json!({
                "patientName": "Budi Hartono",
                "phone": "081298765432",
                "doctorId": active_id,
                "visitDate": "2025-03-10"
            }),
            false,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/doctors/{}", active_id))
        .header(header::COOKIE, format!("token={}", TEST_TOKEN))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

// =============================================================================
// Public directory
// =============================================================================

#[tokio::test]
async fn the_public_directory_hides_inactive_doctors() {
    let (app, _, _) = app();

    let response = app.oneshot(get("/api/public/doctors")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let doctors = body["doctors"].as_array().unwrap();
    assert_eq!(doctors.len(), 1);
    assert_eq!(doctors[0]["name"], "Dr. Ahmad Santoso, Sp.PD");
    assert_eq!(doctors[0]["schedules"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn the_day_filter_narrows_embedded_schedules() {
    let (app, _, _) = app();

    let response = app
        .clone()
        .oneshot(get("/api/public/doctors?day=Senin"))
        .await
        .unwrap();
    let body = body_json(response).await;
    let schedules = body["doctors"][0]["schedules"].as_array().unwrap().clone();
    assert_eq!(schedules.len(), 1);
    assert_eq!(schedules[0]["dayOfWeek"], "Senin");

    // `all` applies no filter
    let response = app.oneshot(get("/api/public/doctors?day=all")).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["doctors"][0]["schedules"].as_array().unwrap().len(), 2);
}

// =============================================================================
// Appointments
// =============================================================================

#[tokio::test]
async fn booking_an_inactive_doctor_fails() {
    let (app, _, inactive_id) = app();

    let response = app
        .oneshot(send_json(
            "POST",
            "/api/public/appointments",
            json!({
                "patientName": "Budi Hartono",
                "phone": "081298765432",
                "doctorId": inactive_id,
                "visitDate": "2025-03-10"
            }),
            false,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["message"], "Doctor is not active");
}

#[tokio::test]
async fn booking_an_unknown_doctor_is_a_404() {
    let (app, _, _) = app();

    let response = app
        .oneshot(send_json(
            "POST",
            "/api/public/appointments",
            json!({
                "patientName": "Budi Hartono",
                "phone": "081298765432",
                "doctorId": Uuid::new_v4(),
                "visitDate": "2025-03-10"
            }),
            false,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn the_appointment_lifecycle_is_enforced() {
    let (app, active_id, _) = app();

    // Book: status starts pending
    let response = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/api/public/appointments",
            json!({
                "patientName": "Budi Hartono",
                "phone": "081298765432",
                "doctorId": active_id,
                "visitDate": "2025-03-10"
            }),
            false,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["appointment"]["status"], "pending");
    let id = body["appointment"]["id"].as_str().unwrap().to_string();

    // Confirm
    let response = app
        .clone()
        .oneshot(send_json(
            "PATCH",
            &format!("/api/appointments/{}", id),
            json!({"status": "confirmed"}),
            true,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // A bogus label is rejected and changes nothing
    let response = app
        .clone()
        .oneshot(send_json(
            "PATCH",
            &format!("/api/appointments/{}", id),
            json!({"status": "bogus"}),
            true,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .clone()
        .oneshot(get_admin(&format!("/api/appointments/{}", id)))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["status"], "confirmed");

    // Complete, then the state is terminal
    let response = app
        .clone()
        .oneshot(send_json(
            "PATCH",
            &format!("/api/appointments/{}", id),
            json!({"status": "completed"}),
            true,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(send_json(
            "PATCH",
            &format!("/api/appointments/{}", id),
            json!({"status": "pending"}),
            true,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn skipping_confirmation_is_rejected() {
    let (app, active_id, _) = app();

    let response = app
        .clone()
        .oneshot(send_json(
            "POST",
            "/api/appointments",
            json!({
                "patientName": "Siti Aminah",
                "phone": "081211112222",
                "doctorId": active_id,
                "visitDate": "2025-04-01"
            }),
            true,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let id = body["appointment"]["id"].as_str().unwrap().to_string();

    let response = app
        .oneshot(send_json(
            "PATCH",
            &format!("/api/appointments/{}", id),
            json!({"status": "completed"}),
            true,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Schedules
// =============================================================================

#[tokio::test]
async fn the_day_of_week_filter_applies() {
    let (app, _, _) = app();

    let response = app
        .clone()
        .oneshot(get_admin("/api/schedules?dayOfWeek=Senin"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let schedules = body["schedules"].as_array().unwrap();
    assert_eq!(schedules.len(), 1);
    assert_eq!(schedules[0]["dayOfWeek"], "Senin");
    assert_eq!(schedules[0]["doctor"]["name"], "Dr. Ahmad Santoso, Sp.PD");

    let response = app
        .oneshot(get_admin("/api/schedules?dayOfWeek=all"))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["schedules"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn a_schedule_needs_a_valid_time() {
    let (app, active_id, _) = app();

    let response = app
        .oneshot(send_json(
            "POST",
            "/api/schedules",
            json!({
                "doctorId": active_id,
                "dayOfWeek": "Senin",
                "startTime": "25:00",
                "endTime": "12:00",
                "poli": "Penyakit Dalam"
            }),
            true,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn a_schedule_needs_an_existing_doctor() {
    let (app, _, _) = app();

    let response = app
        .oneshot(send_json(
            "POST",
            "/api/schedules",
            json!({
                "doctorId": Uuid::new_v4(),
                "dayOfWeek": "Senin",
                "startTime": "08:00",
                "endTime": "12:00",
                "poli": "Penyakit Dalam"
            }),
            true,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Settings & sections
// =============================================================================

#[tokio::test]
async fn a_settings_patch_merges_partially() {
    let (app, _, _) = app();

    let response = app
        .clone()
        .oneshot(send_json(
            "PATCH",
            "/api/settings",
            json!({"tagline": "Melayani dengan hati"}),
            true,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["settings"]["tagline"], "Melayani dengan hati");
    assert_eq!(body["settings"]["hospitalName"], "RS Sehat Selalu");
}

#[tokio::test]
async fn mismatched_section_content_is_rejected() {
    let (app, _, _) = app();

    let response = app
        .oneshot(send_json(
            "PATCH",
            "/api/sections/hero",
            json!({
                "content": {
                    "sectionKey": "contact",
                    "address": "Jl. Kesehatan No. 123",
                    "phone": "(021) 1234-5678",
                    "email": "info@rssehatselalu.com",
                    "igdPhone": "(021) 1234-5678",
                    "generalPhone": "(021) 1234-5679",
                    "hours": {"igd": "24 Jam", "poli": "08:00 - 20:00", "weekend": "08:00 - 14:00"}
                }
            }),
            true,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn an_unknown_section_key_is_a_404() {
    let (app, _, _) = app();

    let response = app
        .oneshot(send_json(
            "PATCH",
            "/api/sections/footer",
            json!({"isActive": false}),
            true,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn public_content_only_includes_visible_sections() {
    let (app, _, _) = app();

    let response = app.oneshot(get("/api/public/content")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["settings"]["hospitalName"], "RS Sehat Selalu");
    let sections = body["sections"].as_array().unwrap();
    // The profile section is seeded hidden
    assert_eq!(sections.len(), 2);
    assert!(sections.iter().all(|s| s["isActive"] == true));
}

#[tokio::test]
async fn visibility_toggles_without_touching_content() {
    let (app, _, _) = app();

    let response = app
        .clone()
        .oneshot(send_json(
            "PATCH",
            "/api/sections/hero",
            json!({"isActive": false}),
            true,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["section"]["isActive"], false);
    assert_eq!(body["section"]["content"]["headline"], "Selamat Datang");
}

// Appointment date parsing sanity: visitDate must be a date
#[tokio::test]
async fn a_malformed_visit_date_is_rejected() {
    let (app, active_id, _) = app();

    let response = app
        .oneshot(send_json(
            "POST",
            "/api/public/appointments",
            json!({
                "patientName": "Budi Hartono",
                "phone": "081298765432",
                "doctorId": active_id,
                "visitDate": "not-a-date"
            }),
            false,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
