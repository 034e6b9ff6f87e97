//! Persistence of captured selfie images.

use crate::utils::path::sanitize_file_component;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Result of trying to store one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelfieOutcome {
    Saved(PathBuf),
    Failed(String),
}

impl SelfieOutcome {
    /// Path to record on the ledger entry; a failed save records none.
    pub fn into_path(self) -> Option<String> {
        match self {
            SelfieOutcome::Saved(p) => Some(p.to_string_lossy().to_string()),
            SelfieOutcome::Failed(_) => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SelfieStore {
    dir: PathBuf,
}

impl SelfieStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store `image` as `<dir>/<name>_<timestamp>.jpg`.
    pub fn save(&self, image: &[u8], name: &str, timestamp: i64) -> SelfieOutcome {
        let path = self
            .dir
            .join(format!("{}_{}.jpg", sanitize_file_component(name), timestamp));

        match write_image(&self.dir, &path, image) {
            Ok(()) => SelfieOutcome::Saved(path),
            Err(e) => {
                // leave no half-written image behind
                let _ = fs::remove_file(&path);
                SelfieOutcome::Failed(e.to_string())
            }
        }
    }
}

fn write_image(dir: &Path, path: &Path, image: &[u8]) -> std::io::Result<()> {
    fs::create_dir_all(dir)?;
    let mut f = File::create(path)?;
    f.write_all(image)?;
    f.sync_all()?;
    Ok(())
}
