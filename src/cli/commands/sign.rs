use crate::cli::commands::{open_pool, system_clock};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ledger::AttendanceLedger;
use crate::core::selfie::SelfieStore;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::date::format_short;
use std::fs;

fn ledger(cfg: &Config) -> AppResult<AttendanceLedger> {
    Ok(AttendanceLedger::new(
        open_pool(cfg)?,
        system_clock(),
        SelfieStore::new(cfg.selfie_path()),
    ))
}

/// `in NAME [--selfie FILE]`
pub fn handle_in(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::In { name, selfie } = cmd {
        // an unreadable image counts as no image
        let image = selfie.as_ref().and_then(|p| match fs::read(p) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                warning(format!("Cannot read selfie {}: {e}", p.display()));
                None
            }
        });

        let entry = ledger(cfg)?.sign_in(name, image.as_deref())?;

        success(format!(
            "{} signed in at {}{}",
            entry.name,
            format_short(entry.timestamp),
            if entry.is_late { " (Late)" } else { "" }
        ));
    }
    Ok(())
}

/// `out NAME`
pub fn handle_out(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Out { name } = cmd {
        match ledger(cfg)?.sign_out(name)? {
            Some(entry) => success(format!(
                "{} signed out at {}",
                entry.name,
                format_short(entry.timestamp)
            )),
            None => info(format!("No open entry for '{}'.", name.trim())),
        }
    }
    Ok(())
}
