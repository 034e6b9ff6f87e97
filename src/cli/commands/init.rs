use crate::cli::commands::open_pool;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::fs;

/// Handle the `init` command
///
/// Creates the config directory and file (skipped in test mode), the
/// database file, the schema and the default settings row.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    info("Initializing Blue Nine Access…");

    if !cli.test {
        let path = Config::config_file();
        cfg.save_to(&path)?;
        success(format!("Config file: {}", path.display()));
    }

    if let Some(parent) = cfg.database_path().parent() {
        fs::create_dir_all(parent)?;
    }

    let pool = open_pool(cfg)?;
    pool.with_conn(|conn| {
        ttlog_quiet(
            conn,
            "init",
            "database",
            &format!("Database initialized at {}", cfg.database),
        );
        Ok(())
    })?;

    success(format!("Database initialized at {}", cfg.database));
    Ok(())
}
