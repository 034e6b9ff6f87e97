//! Unified application error type.
//! Every layer (db, core, export, cli) returns AppError so failures can be
//! propagated with `?` and reported in one place by main.rs.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("Invalid time format (expected HH:MM): {0}")]
    InvalidTime(String),

    #[error("Invalid name: {0}")]
    InvalidName(String),

    // ---------------------------
    // Ledger / catalog
    // ---------------------------
    #[error("Attendance entry #{0} not found")]
    EntryNotFound(i64),

    #[error("Shift template #{0} not found")]
    TemplateNotFound(i64),

    #[error("'{0}' is already signed in")]
    AlreadySignedIn(String),

    #[error("A selfie is required to sign in")]
    SelfieRequired,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("No artifact produced: {0}")]
    NoArtifact(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
