// src/export/bundle.rs

use crate::errors::{AppError, AppResult};
use crate::models::attendance::AttendanceEntry;
use crate::ui::messages::warning;
use std::collections::HashSet;
use std::fs;
use std::io::{Cursor, Write};
use std::path::PathBuf;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::FileOptions;

pub(crate) const SELFIE_DIR: &str = "selfies/";

fn entry_options() -> FileOptions<'static, ()> {
    FileOptions::default().compression_method(CompressionMethod::Deflated)
}

/// Distinct selfie paths in ledger order.
pub(crate) fn referenced_selfies(entries: &[AttendanceEntry]) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    entries
        .iter()
        .filter_map(|e| e.selfie_path.as_deref())
        .filter(|p| seen.insert(p.to_string()))
        .map(PathBuf::from)
        .collect()
}

/// Build a zip holding `data_name` at the top level and every referenced
/// selfie under `selfies/<file name>`.
///
/// Selfies missing on disk are skipped. Two paths sharing a file name are
/// stored once. An existing selfie that cannot be read fails the whole
/// archive.
pub(crate) fn build_zip(
    data_name: &str,
    data: &[u8],
    entries: &[AttendanceEntry],
) -> AppResult<Vec<u8>> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

    zip.start_file(data_name, entry_options())?;
    zip.write_all(data)?;

    let mut names = HashSet::new();

    for path in referenced_selfies(entries) {
        if !path.exists() {
            warning(format!("Selfie not found, skipped: {}", path.display()));
            continue;
        }

        let Some(file_name) = path.file_name().map(|n| n.to_string_lossy().to_string()) else {
            continue;
        };
        if !names.insert(file_name.clone()) {
            warning(format!("Duplicate selfie name, skipped: {}", path.display()));
            continue;
        }

        let image = fs::read(&path).map_err(|e| {
            AppError::Export(format!("cannot read selfie {}: {e}", path.display()))
        })?;

        zip.start_file(format!("{SELFIE_DIR}{file_name}"), entry_options())?;
        zip.write_all(&image)?;
    }

    Ok(zip.finish()?.into_inner())
}
