use super::entry_type::EntryType;
use crate::errors::{AppError, AppResult};
use crate::utils::date::format_iso;
use serde::Serialize;

/// One row of the attendance ledger.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AttendanceEntry {
    pub id: i64,
    pub name: String,                // ⇔ attendance_log.name (normalized, lowercase)
    pub timestamp: i64,              // ⇔ attendance_log.timestamp (epoch millis)
    pub kind: EntryType,             // ⇔ attendance_log.kind ('IN' | 'OUT')
    pub selfie_path: Option<String>, // ⇔ attendance_log.selfie_path
    pub is_late: bool,               // ⇔ attendance_log.is_late (set once, on IN)
    pub open: bool,                  // ⇔ attendance_log.is_open
}

impl AttendanceEntry {
    /// `yyyy-MM-dd HH:mm:ss` in local time, as used by every export.
    pub fn iso(&self) -> String {
        format_iso(self.timestamp)
    }
}

/// Canonical form of a person's name as stored in the ledger.
pub fn normalize_name(raw: &str) -> AppResult<String> {
    let name = raw.trim().to_lowercase();
    if name.is_empty() {
        return Err(AppError::InvalidName("name must not be blank".into()));
    }
    Ok(name)
}
