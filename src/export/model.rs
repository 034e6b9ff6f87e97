// src/export/model.rs

use crate::models::attendance::AttendanceEntry;
use serde::{Deserialize, Serialize};

/// Column order shared by the CSV and spreadsheet outputs.
pub const HEADERS: [&str; 8] = [
    "id",
    "name",
    "timestamp",
    "iso",
    "type",
    "isLate",
    "open",
    "selfiePath",
];

/// Flat export row. Field order and names match `HEADERS`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AttendanceExport {
    pub id: i64,
    pub name: String,
    pub timestamp: i64,
    pub iso: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "isLate")]
    pub is_late: bool,
    pub open: bool,
    #[serde(rename = "selfiePath")]
    pub selfie_path: String,
}

impl From<&AttendanceEntry> for AttendanceExport {
    fn from(e: &AttendanceEntry) -> Self {
        Self {
            id: e.id,
            name: e.name.clone(),
            timestamp: e.timestamp,
            iso: e.iso(),
            kind: e.kind.as_str().to_string(),
            is_late: e.is_late,
            open: e.open,
            selfie_path: e.selfie_path.clone().unwrap_or_default(),
        }
    }
}

pub(crate) fn to_rows(entries: &[AttendanceEntry]) -> Vec<AttendanceExport> {
    entries.iter().map(AttendanceExport::from).collect()
}
