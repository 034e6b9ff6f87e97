use crate::db::migrate::run_pending_migrations;
use crate::db::settings::ensure_settings;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database.
/// Schema comes from the migration engine; the Settings singleton is seeded
/// with defaults when missing.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn)?;
    ensure_settings(conn)?;
    Ok(())
}
