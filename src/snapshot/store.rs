//! File-backed snapshot store.
//!
//! State lives in memory behind a `RwLock`; every mutation replaces the
//! affected collection and writes the whole file back. Last writer wins.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use uuid::Uuid;

use super::defaults;
use crate::domain::{DayOfWeek, Doctor, PageSection, SectionKey, SettingsPatch, SiteSettings};
use crate::errors::{AppError, AppResult};

const DOCTORS_FILE: &str = "hospital_doctors.json";
const SCHEDULES_FILE: &str = "hospital_schedules.json";
const SETTINGS_FILE: &str = "hospital_settings.json";
const SECTIONS_FILE: &str = "hospital_sections.json";

/// Schedule as stored in the snapshot, with the doctor's display name
/// cached at write time so the public site can render without a join.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub id: Uuid,
    pub doctor_id: Uuid,
    pub doctor_name: String,
    pub day_of_week: DayOfWeek,
    pub start_time: String,
    pub end_time: String,
    pub poli: String,
    pub is_active: bool,
}

struct SnapshotState {
    doctors: Vec<Doctor>,
    schedules: Vec<ScheduleEntry>,
    settings: SiteSettings,
    sections: Vec<PageSection>,
}

/// File-backed mirror of the public site state.
pub struct SnapshotStore {
    dir: PathBuf,
    state: RwLock<SnapshotState>,
}

impl SnapshotStore {
    /// Open a snapshot directory, loading existing files and falling back
    /// to the built-in defaults for anything missing or unreadable.
    pub fn open(dir: impl AsRef<Path>) -> AppResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)
            .map_err(|e| AppError::internal(format!("Cannot create snapshot dir: {}", e)))?;

        let doctors = load_or(&dir, DOCTORS_FILE, default_doctors);
        let schedules = load_or(&dir, SCHEDULES_FILE, || default_schedules(&doctors));
        let state = SnapshotState {
            doctors,
            schedules,
            settings: load_or(&dir, SETTINGS_FILE, defaults::default_settings),
            sections: load_or(&dir, SECTIONS_FILE, defaults::default_sections),
        };

        Ok(Self {
            dir,
            state: RwLock::new(state),
        })
    }

    pub fn doctors(&self) -> Vec<Doctor> {
        self.read_state().doctors.clone()
    }

    pub fn schedules(&self) -> Vec<ScheduleEntry> {
        self.read_state().schedules.clone()
    }

    pub fn settings(&self) -> SiteSettings {
        self.read_state().settings.clone()
    }

    pub fn sections(&self) -> Vec<PageSection> {
        self.read_state().sections.clone()
    }

    pub fn set_doctors(&self, doctors: Vec<Doctor>) {
        let mut state = self.write_state();
        state.doctors = doctors;
        self.persist(DOCTORS_FILE, &state.doctors);
    }

    /// Insert or replace a doctor by id
    pub fn upsert_doctor(&self, doctor: Doctor) {
        let mut state = self.write_state();
        match state.doctors.iter_mut().find(|d| d.id == doctor.id) {
            Some(slot) => *slot = doctor,
            None => state.doctors.push(doctor),
        }
        self.persist(DOCTORS_FILE, &state.doctors);
    }

    /// Remove a doctor and its schedule entries
    pub fn remove_doctor(&self, id: Uuid) {
        let mut state = self.write_state();
        state.doctors.retain(|d| d.id != id);
        state.schedules.retain(|s| s.doctor_id != id);
        self.persist(DOCTORS_FILE, &state.doctors);
        self.persist(SCHEDULES_FILE, &state.schedules);
    }

    pub fn set_schedules(&self, schedules: Vec<ScheduleEntry>) {
        let mut state = self.write_state();
        state.schedules = schedules;
        self.persist(SCHEDULES_FILE, &state.schedules);
    }

    /// Insert or replace a schedule entry by id, caching the doctor's
    /// current display name on the entry.
    pub fn upsert_schedule(&self, schedule: crate::domain::Schedule) {
        let mut state = self.write_state();
        let doctor_name = state
            .doctors
            .iter()
            .find(|d| d.id == schedule.doctor_id)
            .map(|d| d.name.clone())
            .unwrap_or_default();

        let entry = ScheduleEntry {
            id: schedule.id,
            doctor_id: schedule.doctor_id,
            doctor_name,
            day_of_week: schedule.day_of_week,
            start_time: schedule.start_time,
            end_time: schedule.end_time,
            poli: schedule.poli,
            is_active: schedule.is_active,
        };

        match state.schedules.iter_mut().find(|s| s.id == entry.id) {
            Some(slot) => *slot = entry,
            None => state.schedules.push(entry),
        }
        self.persist(SCHEDULES_FILE, &state.schedules);
    }

    pub fn remove_schedule(&self, id: Uuid) {
        let mut state = self.write_state();
        state.schedules.retain(|s| s.id != id);
        self.persist(SCHEDULES_FILE, &state.schedules);
    }

    /// Merge a partial settings update; absent fields persist
    pub fn merge_settings(&self, patch: SettingsPatch) -> SiteSettings {
        let mut state = self.write_state();
        state.settings.merge(patch);
        self.persist(SETTINGS_FILE, &state.settings);
        state.settings.clone()
    }

    pub fn set_sections(&self, sections: Vec<PageSection>) {
        let mut state = self.write_state();
        state.sections = sections;
        self.persist(SECTIONS_FILE, &state.sections);
    }

    /// Toggle a single section without touching its content
    pub fn set_section_visibility(&self, key: SectionKey, is_active: bool) {
        let mut state = self.write_state();
        if let Some(section) = state
            .sections
            .iter_mut()
            .find(|s| s.section_key() == key)
        {
            section.is_active = is_active;
        }
        self.persist(SECTIONS_FILE, &state.sections);
    }

    // A panic mid-mutation leaves at worst a stale collection, which the
    // last-writer-wins contract already allows, so a poisoned lock is
    // recovered rather than propagated.
    fn read_state(&self) -> RwLockReadGuard<'_, SnapshotState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, SnapshotState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn persist<T: Serialize>(&self, file: &str, value: &T) {
        let path = self.dir.join(file);
        let payload = match serde_json::to_string_pretty(value) {
            Ok(payload) => payload,
            Err(error) => {
                tracing::warn!(%error, file, "snapshot serialization failed");
                return;
            }
        };
        if let Err(error) = fs::write(&path, payload) {
            tracing::warn!(%error, path = %path.display(), "snapshot write failed");
        }
    }
}

fn default_doctors() -> Vec<Doctor> {
    let now = chrono::Utc::now();
    defaults::default_doctors()
        .into_iter()
        .map(|seed| Doctor {
            id: Uuid::new_v4(),
            name: seed.name.to_string(),
            specialty: seed.specialty.to_string(),
            phone: seed.phone.to_string(),
            bio: Some(seed.bio.to_string()),
            photo: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        })
        .collect()
}

fn default_schedules(doctors: &[Doctor]) -> Vec<ScheduleEntry> {
    defaults::default_schedules()
        .into_iter()
        .filter_map(|seed| {
            let doctor = doctors.iter().find(|d| d.name == seed.doctor_name)?;
            Some(ScheduleEntry {
                id: Uuid::new_v4(),
                doctor_id: doctor.id,
                doctor_name: doctor.name.clone(),
                day_of_week: seed.day_of_week,
                start_time: seed.start_time.to_string(),
                end_time: seed.end_time.to_string(),
                poli: seed.poli.to_string(),
                is_active: true,
            })
        })
        .collect()
}

fn load_or<T: DeserializeOwned>(dir: &Path, file: &str, fallback: impl FnOnce() -> T) -> T {
    let path = dir.join(file);
    match fs::read_to_string(&path) {
        Ok(raw) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(error) => {
                tracing::warn!(%error, path = %path.display(), "snapshot file unreadable, using defaults");
                fallback()
            }
        },
        Err(_) => fallback(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn a_poisoned_lock_still_serves_requests() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(SnapshotStore::open(dir.path()).unwrap());

        let poisoner = Arc::clone(&store);
        let handle = std::thread::spawn(move || {
            let _guard = poisoner.state.write().unwrap();
            panic!("crash while holding the lock");
        });
        assert!(handle.join().is_err());

        assert!(!store.doctors().is_empty());

        store.set_section_visibility(SectionKey::Hero, false);
        let hero = store
            .sections()
            .into_iter()
            .find(|s| s.section_key() == SectionKey::Hero)
            .unwrap();
        assert!(!hero.is_active);
    }
}
