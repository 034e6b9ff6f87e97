// src/export/destination.rs

use crate::errors::{AppError, AppResult};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// A finished export file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub file_name: String,
    pub mime: &'static str,
}

/// Where export artifacts end up.
///
/// `write` either leaves a complete file behind and returns its reference,
/// or fails with `NoArtifact` and leaves nothing.
pub trait Destination: Send + Sync {
    fn write(&self, file_name: &str, mime: &'static str, bytes: &[u8]) -> AppResult<Artifact>;
}

/// Downloads-style directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct DirectoryDestination {
    dir: PathBuf,
}

impl DirectoryDestination {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `file_name`, or `stem (n).ext` with the first `n` not already taken.
    fn free_name(&self, file_name: &str) -> String {
        if !self.dir.join(file_name).exists() {
            return file_name.to_string();
        }

        let (stem, ext) = match file_name.rfind('.') {
            Some(i) if i > 0 => file_name.split_at(i),
            _ => (file_name, ""),
        };

        (1..)
            .map(|n| format!("{stem} ({n}){ext}"))
            .find(|candidate| !self.dir.join(candidate).exists())
            .unwrap_or_else(|| file_name.to_string())
    }
}

impl Destination for DirectoryDestination {
    fn write(&self, file_name: &str, mime: &'static str, bytes: &[u8]) -> AppResult<Artifact> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            AppError::NoArtifact(format!("cannot create {}: {e}", self.dir.display()))
        })?;

        // never replace an earlier artifact
        let file_name = self.free_name(file_name);
        let target = self.dir.join(&file_name);
        let part = self.dir.join(format!(".{file_name}.part"));

        let written = write_part(&part, bytes).and_then(|_| fs::rename(&part, &target));

        if let Err(e) = written {
            let _ = fs::remove_file(&part);
            return Err(AppError::NoArtifact(format!(
                "cannot write {}: {e}",
                target.display()
            )));
        }

        Ok(Artifact {
            path: target,
            file_name,
            mime,
        })
    }
}

fn write_part(part: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut f = File::create(part)?;
    f.write_all(bytes)?;
    f.sync_all()
}
