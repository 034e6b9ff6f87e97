use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_selfie_dir")]
    pub selfie_dir: String,
    #[serde(default = "default_export_dir")]
    pub export_dir: String,
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

fn default_selfie_dir() -> String {
    Config::config_dir()
        .join("selfies")
        .to_string_lossy()
        .to_string()
}

fn default_export_dir() -> String {
    dirs::download_dir()
        .unwrap_or_else(|| Config::config_dir().join("exports"))
        .to_string_lossy()
        .to_string()
}

fn default_recent_limit() -> usize {
    crate::core::ledger::DEFAULT_RECENT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            selfie_dir: default_selfie_dir(),
            export_dir: default_export_dir(),
            recent_limit: default_recent_limit(),
        }
    }
}

impl Config {
    /// `~/.bluenine`, or `./.bluenine` when no home directory is known.
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".bluenine")
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("bluenine.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("bluenine.sqlite")
    }

    /// Load the configuration file, or defaults when there is none.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    pub fn database_path(&self) -> PathBuf {
        expand_tilde(&self.database)
    }

    pub fn selfie_path(&self) -> PathBuf {
        expand_tilde(&self.selfie_dir)
    }

    pub fn export_path(&self) -> PathBuf {
        expand_tilde(&self.export_dir)
    }

    /// Database location as the string rusqlite wants.
    pub fn database_str(&self) -> AppResult<String> {
        let p = self.database_path();
        p.to_str()
            .map(str::to_string)
            .ok_or_else(|| AppError::Config(format!("database path is not UTF-8: {}", p.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn missing_optional_fields_take_defaults() {
        let path = env::temp_dir().join("bluenine_config_partial.conf");
        fs::write(&path, "database: /tmp/x.sqlite\n").unwrap();

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.database, "/tmp/x.sqlite");
        assert_eq!(cfg.recent_limit, 20);
        assert!(cfg.selfie_dir.ends_with("selfies"));
    }

    #[test]
    fn save_then_load_keeps_values() {
        let path = env::temp_dir().join("bluenine_config_roundtrip/bluenine.conf");
        let cfg = Config {
            database: "~/att.sqlite".into(),
            selfie_dir: "/srv/selfies".into(),
            export_dir: "/srv/exports".into(),
            recent_limit: 5,
        };
        cfg.save_to(&path).unwrap();

        let back = Config::load_from(&path).unwrap();
        assert_eq!(back.recent_limit, 5);
        assert_eq!(back.export_dir, "/srv/exports");
        assert!(!back.database_path().starts_with("~"));
    }
}
