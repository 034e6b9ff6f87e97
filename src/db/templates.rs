//! Shift template rows.

use crate::errors::{AppError, AppResult};
use crate::models::shift_template::ShiftTemplate;
use crate::utils::time::{format_hhmm, parse_hhmm};
use chrono::NaiveTime;
use rusqlite::{Connection, OptionalExtension, Row, params};

type RawTemplate = (i64, String, String, String, i64);

fn raw_row(row: &Row) -> rusqlite::Result<RawTemplate> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
    ))
}

fn from_raw((id, name, start, end, grace): RawTemplate) -> AppResult<ShiftTemplate> {
    Ok(ShiftTemplate {
        id,
        name,
        start: parse_hhmm(&start)?,
        end: parse_hhmm(&end)?,
        grace: u32::try_from(grace)
            .map_err(|_| AppError::Other(format!("stored grace period out of range: {grace}")))?,
    })
}

pub fn insert_template(
    conn: &Connection,
    name: &str,
    start: NaiveTime,
    end: NaiveTime,
    grace: u32,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO shift_templates (name, start_time, end_time, grace)
         VALUES (?1, ?2, ?3, ?4)",
        params![name, format_hhmm(start), format_hhmm(end), grace],
    )?;
    Ok(conn.last_insert_rowid())
}

/// All templates, alphabetical.
pub fn load_templates(conn: &Connection) -> AppResult<Vec<ShiftTemplate>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, start_time, end_time, grace
         FROM shift_templates
         ORDER BY name ASC, id ASC",
    )?;
    let rows = stmt.query_map([], raw_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(from_raw(r?)?);
    }
    Ok(out)
}

pub fn load_template(conn: &Connection, id: i64) -> AppResult<Option<ShiftTemplate>> {
    let raw = conn
        .query_row(
            "SELECT id, name, start_time, end_time, grace FROM shift_templates WHERE id = ?1",
            [id],
            raw_row,
        )
        .optional()?;
    raw.map(from_raw).transpose()
}

pub fn delete_template(conn: &Connection, id: i64) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM shift_templates WHERE id = ?1", [id])?)
}
