// src/export/csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::AttendanceExport;

/// Serialize rows to CSV bytes. The header comes from the serde field names.
pub(crate) fn build_csv(rows: &[AttendanceExport]) -> AppResult<Vec<u8>> {
    let mut wtr = ::csv::WriterBuilder::new()
        .terminator(::csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    if rows.is_empty() {
        wtr.write_record(super::HEADERS)?;
    }

    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {}", e.error())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i64, name: &str, selfie: &str) -> AttendanceExport {
        AttendanceExport {
            id,
            name: name.into(),
            timestamp: 1_700_000_000_000,
            iso: "2023-11-14 22:13:20".into(),
            kind: "IN".into(),
            is_late: true,
            open: false,
            selfie_path: selfie.into(),
        }
    }

    #[test]
    fn header_and_rows_match_expected_layout() {
        let out = String::from_utf8(build_csv(&[row(7, "alice", "")]).unwrap()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "id,name,timestamp,iso,type,isLate,open,selfiePath");
        assert_eq!(lines[1], "7,alice,1700000000000,2023-11-14 22:13:20,IN,true,false,");
        assert!(!out.contains('\r'));
    }

    #[test]
    fn empty_ledger_still_has_header() {
        let out = String::from_utf8(build_csv(&[]).unwrap()).unwrap();
        assert_eq!(out, "id,name,timestamp,iso,type,isLate,open,selfiePath\n");
    }

    #[test]
    fn commas_in_names_are_quoted() {
        let out = String::from_utf8(build_csv(&[row(1, "doe, jane", "")]).unwrap()).unwrap();
        assert!(out.contains("\"doe, jane\""));
    }
}
