//! Seed command - admin account and default content.

use std::collections::HashMap;

use crate::config::{Config, ROLE_ADMIN};
use crate::domain::{NewDoctor, NewSchedule, Password};
use crate::errors::AppResult;
use crate::infra::{Database, DoctorFilter, Persistence, Repositories};
use crate::snapshot::defaults;

const SEED_ADMIN_EMAIL: &str = "admin@rs.com";
const SEED_ADMIN_PASSWORD: &str = "admin123";
const SEED_ADMIN_NAME: &str = "Admin RS";

/// Execute the seed command.
///
/// Idempotent: the admin is upserted by email, and content is only
/// inserted into empty tables.
pub async fn execute(config: Config) -> AppResult<()> {
    tracing::info!("Seeding database...");

    let db = Database::connect(&config).await?;
    let repos = Persistence::new(db.get_connection());

    let password_hash = Password::new(SEED_ADMIN_PASSWORD)?.into_string();
    let admin = repos
        .admins()
        .upsert(
            SEED_ADMIN_EMAIL.to_string(),
            password_hash,
            SEED_ADMIN_NAME.to_string(),
            ROLE_ADMIN.to_string(),
        )
        .await?;
    tracing::info!(email = %admin.email, "Admin ready");

    seed_doctors(&repos).await?;
    seed_content(&repos).await?;

    tracing::info!("Seed completed");
    Ok(())
}

async fn seed_doctors(repos: &Persistence) -> AppResult<()> {
    if !repos.doctors().list(DoctorFilter::default()).await?.is_empty() {
        tracing::info!("Doctors already present, skipping");
        return Ok(());
    }

    let mut ids_by_name = HashMap::new();
    for seed in defaults::default_doctors() {
        let doctor = repos
            .doctors()
            .create(NewDoctor {
                name: seed.name.to_string(),
                specialty: seed.specialty.to_string(),
                phone: seed.phone.to_string(),
                bio: Some(seed.bio.to_string()),
                photo: None,
                is_active: true,
            })
            .await?;
        ids_by_name.insert(seed.name, doctor.id);
    }
    tracing::info!(count = ids_by_name.len(), "Doctors seeded");

    let mut schedule_count = 0;
    for seed in defaults::default_schedules() {
        let Some(&doctor_id) = ids_by_name.get(seed.doctor_name) else {
            continue;
        };
        repos
            .schedules()
            .create(NewSchedule {
                doctor_id,
                day_of_week: seed.day_of_week,
                start_time: seed.start_time.to_string(),
                end_time: seed.end_time.to_string(),
                poli: seed.poli.to_string(),
                is_active: true,
            })
            .await?;
        schedule_count += 1;
    }
    tracing::info!(count = schedule_count, "Schedules seeded");

    Ok(())
}

async fn seed_content(repos: &Persistence) -> AppResult<()> {
    if repos.content().get_settings().await?.is_none() {
        repos
            .content()
            .save_settings(defaults::default_settings())
            .await?;
        tracing::info!("Settings seeded");
    }

    for section in defaults::default_sections() {
        if repos
            .content()
            .find_section(section.section_key())
            .await?
            .is_none()
        {
            repos.content().save_section(section).await?;
        }
    }
    tracing::info!("Sections ready");

    Ok(())
}
