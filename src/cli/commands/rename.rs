use crate::cli::commands::{open_pool, system_clock};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ledger::AttendanceLedger;
use crate::core::selfie::SelfieStore;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Rename { id, new_name } = cmd {
        let ledger = AttendanceLedger::new(
            open_pool(cfg)?,
            system_clock(),
            SelfieStore::new(cfg.selfie_path()),
        );
        let entry = ledger.rename(*id, new_name)?;
        success(format!("Entry #{} renamed to '{}'.", entry.id, entry.name));
    }
    Ok(())
}
