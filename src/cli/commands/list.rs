use crate::cli::commands::{open_pool, system_clock};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ledger::AttendanceLedger;
use crate::core::selfie::SelfieStore;
use crate::errors::{AppError, AppResult};
use crate::models::attendance::AttendanceEntry;
use crate::ui::messages::{header, info};
use crate::utils::date::format_iso;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { recent, all, json } = cmd {
        let ledger = AttendanceLedger::new(
            open_pool(cfg)?,
            system_clock(),
            SelfieStore::new(cfg.selfie_path()),
        );

        let entries = if *all {
            ledger.list_all()?
        } else {
            ledger.recent(recent.unwrap_or(cfg.recent_limit))?
        };

        if *json {
            let out = serde_json::to_string_pretty(&entries)
                .map_err(|e| AppError::Other(format!("JSON serialization error: {e}")))?;
            println!("{out}");
            return Ok(());
        }

        if entries.is_empty() {
            info("No attendance entries.");
            return Ok(());
        }

        header(if *all { "All attendance logs" } else { "Recent" });
        print!("{}", render(&entries));
    }
    Ok(())
}

fn render(entries: &[AttendanceEntry]) -> String {
    let mut table = Table::new(&["id", "name", "type", "time", "status", "late", "selfie"]);
    for e in entries {
        table.add_row(vec![
            e.id.to_string(),
            e.name.clone(),
            e.kind.as_str().to_string(),
            format_iso(e.timestamp),
            if e.open { "OPEN" } else { "closed" }.to_string(),
            if e.is_late { "late" } else { "" }.to_string(),
            e.selfie_path.clone().unwrap_or_default(),
        ]);
    }
    table.render()
}
