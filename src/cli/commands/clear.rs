use crate::cli::commands::{ask_confirmation, open_pool, system_clock};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::retention::RetentionManager;
use crate::errors::AppResult;
use crate::models::retention::RetentionScope;
use crate::ui::messages::{info, success};

fn describe(scope: RetentionScope) -> &'static str {
    match scope {
        RetentionScope::Day => "all entries from today",
        RetentionScope::Week => "all entries from the last 7 days",
        RetentionScope::Month => "all entries from the last 30 days",
        RetentionScope::All => "ALL attendance entries",
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { scope, yes } = cmd {
        let prompt = format!("Delete {}? This action is irreversible.", describe(*scope));
        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let manager = RetentionManager::new(open_pool(cfg)?, system_clock());
        let removed = manager.clear(*scope)?;
        success(format!(
            "Cleared {removed} entries (scope: {}).",
            scope.as_str()
        ));
    }
    Ok(())
}
