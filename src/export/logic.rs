// src/export/logic.rs

use crate::core::clock::Clock;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::load_all_entries;
use crate::errors::AppResult;
use crate::export::bundle::build_zip;
use crate::export::csv::build_csv;
use crate::export::destination::{Artifact, Destination};
use crate::export::model::to_rows;
use crate::export::spreadsheet::build_spreadsheet_xml;
use crate::export::{ExportFormat, FILE_PREFIX, notify_export_success};
use crate::models::attendance::AttendanceEntry;
use crate::ui::messages::info;
use crate::utils::date::file_stamp;
use std::sync::Arc;

const MIME_CSV: &str = "text/csv";
const MIME_ZIP: &str = "application/zip";

/// Serializes the ledger into downloadable artifacts.
///
/// Each export reads the whole ledger once, builds the artifact in memory,
/// and only then hands it to the destination; it never writes to the ledger.
pub struct ExportEngine {
    pool: DbPool,
    clock: Arc<dyn Clock>,
    destination: Box<dyn Destination>,
}

impl ExportEngine {
    pub fn new(pool: DbPool, clock: Arc<dyn Clock>, destination: Box<dyn Destination>) -> Self {
        Self {
            pool,
            clock,
            destination,
        }
    }

    pub fn export(&self, format: ExportFormat, include_selfies: bool) -> AppResult<Artifact> {
        match format {
            ExportFormat::Csv => self.export_csv(include_selfies),
            ExportFormat::Excel => self.export_spreadsheet(),
        }
    }

    /// Always writes `bluenine_<stamp>.csv`. With `include_selfies` it also
    /// writes `bluenine_<stamp>.zip` holding the CSV and the selfies, and
    /// returns that zip.
    ///
    /// Both payloads are built before anything is written, so a selfie that
    /// cannot be read leaves the destination untouched.
    pub fn export_csv(&self, include_selfies: bool) -> AppResult<Artifact> {
        let entries = self.snapshot()?;
        let base = self.base_name();
        let csv_name = format!("{base}.csv");

        info(format!("Exporting {} entries to CSV", entries.len()));
        let csv = build_csv(&to_rows(&entries))?;
        let zip = if include_selfies {
            Some(build_zip(&csv_name, &csv, &entries)?)
        } else {
            None
        };

        let csv_artifact = self.destination.write(&csv_name, MIME_CSV, &csv)?;
        self.record(&csv_artifact, entries.len());
        notify_export_success("CSV", &csv_artifact.path);

        let Some(zip) = zip else {
            return Ok(csv_artifact);
        };

        let zip_artifact = self
            .destination
            .write(&format!("{base}.zip"), MIME_ZIP, &zip)?;
        self.record(&zip_artifact, entries.len());
        notify_export_success("CSV + selfies", &zip_artifact.path);
        Ok(zip_artifact)
    }

    /// `bluenine_<stamp>-excel.zip` holding `bluenine_<stamp>.xls` and the
    /// selfies.
    pub fn export_spreadsheet(&self) -> AppResult<Artifact> {
        let entries = self.snapshot()?;
        let base = self.base_name();

        info(format!("Exporting {} entries to spreadsheet", entries.len()));
        let xml = build_spreadsheet_xml(&to_rows(&entries));
        let zip = build_zip(&format!("{base}.xls"), xml.as_bytes(), &entries)?;

        let artifact = self
            .destination
            .write(&format!("{base}-excel.zip"), MIME_ZIP, &zip)?;

        self.record(&artifact, entries.len());
        notify_export_success("Spreadsheet", &artifact.path);
        Ok(artifact)
    }

    fn snapshot(&self) -> AppResult<Vec<AttendanceEntry>> {
        self.pool.with_conn(|conn| load_all_entries(conn))
    }

    fn base_name(&self) -> String {
        format!("{FILE_PREFIX}{}", file_stamp(&self.clock.now()))
    }

    fn record(&self, artifact: &Artifact, rows: usize) {
        let _ = self.pool.with_conn(|conn| {
            ttlog_quiet(
                conn,
                "export",
                &artifact.file_name,
                &format!("{rows} entries exported"),
            );
            Ok(())
        });
    }
}
