use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::settings::{ensure_settings, save_settings};
use crate::errors::AppResult;
use crate::models::settings::Settings;
use chrono::NaiveTime;

/// Partial change to the live settings; `None` keeps the current value.
#[derive(Debug, Default, Clone)]
pub struct SettingsUpdate {
    pub shift_start: Option<NaiveTime>,
    pub shift_end: Option<NaiveTime>,
    pub grace_minutes: Option<u32>,
    pub selfie_required: Option<bool>,
}

impl SettingsUpdate {
    pub fn is_empty(&self) -> bool {
        self.shift_start.is_none()
            && self.shift_end.is_none()
            && self.grace_minutes.is_none()
            && self.selfie_required.is_none()
    }

    pub fn apply_to(&self, current: &Settings) -> Settings {
        Settings {
            shift_start: self.shift_start.unwrap_or(current.shift_start),
            shift_end: self.shift_end.unwrap_or(current.shift_end),
            grace_minutes: self.grace_minutes.unwrap_or(current.grace_minutes),
            selfie_required: self.selfie_required.unwrap_or(current.selfie_required),
        }
    }
}

/// Owner of the single Settings record.
pub struct SettingsStore {
    pool: DbPool,
}

impl SettingsStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Current settings; defaults are stored first if the row is missing.
    pub fn get(&self) -> AppResult<Settings> {
        self.pool.with_conn(|conn| ensure_settings(conn))
    }

    /// Replace the settings wholesale.
    pub fn save(&self, settings: &Settings) -> AppResult<()> {
        self.pool.with_conn(|conn| {
            save_settings(conn, settings)?;
            ttlog_quiet(conn, "settings", "", &settings.describe());
            Ok(())
        })
    }

    pub fn update(&self, change: &SettingsUpdate) -> AppResult<Settings> {
        self.pool.with_conn(|conn| {
            let tx = conn.transaction()?;
            let next = change.apply_to(&ensure_settings(&tx)?);
            save_settings(&tx, &next)?;
            ttlog_quiet(&tx, "settings", "", &next.describe());
            tx.commit()?;
            Ok(next)
        })
    }
}
