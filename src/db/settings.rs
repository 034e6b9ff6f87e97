//! Settings singleton row (`id = 1`).

use crate::errors::{AppError, AppResult};
use crate::models::settings::Settings;
use crate::utils::time::{format_hhmm, parse_hhmm};
use rusqlite::{Connection, OptionalExtension, params};

pub fn load_settings(conn: &Connection) -> AppResult<Option<Settings>> {
    let raw = conn
        .query_row(
            "SELECT shift_start, shift_end, grace_minutes, selfie_required
             FROM settings WHERE id = 1",
            [],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, i64>(2)?,
                    row.get::<_, i64>(3)?,
                ))
            },
        )
        .optional()?;

    let Some((start, end, grace, selfie)) = raw else {
        return Ok(None);
    };

    let grace_minutes = u32::try_from(grace)
        .map_err(|_| AppError::Other(format!("stored grace period out of range: {grace}")))?;

    Ok(Some(Settings {
        shift_start: parse_hhmm(&start)?,
        shift_end: parse_hhmm(&end)?,
        grace_minutes,
        selfie_required: selfie == 1,
    }))
}

/// Replace the singleton wholesale.
pub fn save_settings(conn: &Connection, s: &Settings) -> AppResult<()> {
    conn.execute(
        "INSERT OR REPLACE INTO settings (id, shift_start, shift_end, grace_minutes, selfie_required)
         VALUES (1, ?1, ?2, ?3, ?4)",
        params![
            format_hhmm(s.shift_start),
            format_hhmm(s.shift_end),
            s.grace_minutes,
            s.selfie_required as i64,
        ],
    )?;
    Ok(())
}

/// Seed the default row when none exists yet.
pub fn ensure_settings(conn: &Connection) -> AppResult<Settings> {
    if let Some(s) = load_settings(conn)? {
        return Ok(s);
    }
    let defaults = Settings::default();
    save_settings(conn, &defaults)?;
    Ok(defaults)
}
