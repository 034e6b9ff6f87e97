// src/export/mod.rs

mod bundle;
mod csv;
pub mod destination;
pub mod logic;
mod model;
mod spreadsheet;

pub use destination::{Artifact, Destination, DirectoryDestination};
pub use logic::ExportEngine;
pub use model::{AttendanceExport, HEADERS};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Prefix of every generated artifact name.
pub const FILE_PREFIX: &str = "bluenine_";

/// Shared completion message for exports.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV, plus a zip with CSV + selfies when selfies are requested
    Csv,
    /// Spreadsheet XML zipped together with selfies
    Excel,
}
