use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::settings::{SettingsStore, SettingsUpdate};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::time::parse_optional_hhmm;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Settings {
        start,
        end,
        grace,
        selfie_required,
    } = cmd
    {
        // validate before touching the database
        let change = SettingsUpdate {
            shift_start: parse_optional_hhmm(start.as_ref())?,
            shift_end: parse_optional_hhmm(end.as_ref())?,
            grace_minutes: *grace,
            selfie_required: *selfie_required,
        };

        let store = SettingsStore::new(open_pool(cfg)?);

        if change.is_empty() {
            info(store.get()?.describe());
            return Ok(());
        }

        let next = store.update(&change)?;
        success(format!("Settings saved. {}", next.describe()));
    }
    Ok(())
}
