use crate::cli::commands::{ask_confirmation, open_pool, system_clock};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ledger::AttendanceLedger;
use crate::core::selfie::SelfieStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::date::format_iso;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let ledger = AttendanceLedger::new(
            open_pool(cfg)?,
            system_clock(),
            SelfieStore::new(cfg.selfie_path()),
        );

        let entry = ledger.get(*id)?.ok_or(AppError::EntryNotFound(*id))?;

        let prompt = format!(
            "Delete entry #{} ({} {} {})? This action is irreversible.",
            entry.id,
            entry.name,
            entry.kind.as_str(),
            format_iso(entry.timestamp)
        );
        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        if ledger.delete(*id)? {
            success(format!("Entry #{id} has been deleted."));
        } else {
            return Err(AppError::EntryNotFound(*id));
        }
    }
    Ok(())
}
