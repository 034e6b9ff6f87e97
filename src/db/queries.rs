//! Attendance ledger rows.

use crate::errors::{AppError, AppResult};
use crate::models::attendance::AttendanceEntry;
use crate::models::entry_type::EntryType;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const SELECT_ENTRY: &str =
    "SELECT id, name, timestamp, kind, selfie_path, is_late, is_open FROM attendance_log";

/// Fields of an entry that does not exist yet.
#[derive(Debug, Clone)]
pub struct NewEntry<'a> {
    pub name: &'a str,
    pub timestamp: i64,
    pub kind: EntryType,
    pub selfie_path: Option<&'a str>,
    pub is_late: bool,
    pub open: bool,
}

pub fn map_row(row: &Row) -> Result<AttendanceEntry> {
    let kind_str: String = row.get("kind")?;
    let kind = EntryType::from_db_str(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::Other(format!("Invalid kind: {kind_str}"))),
        )
    })?;

    Ok(AttendanceEntry {
        id: row.get("id")?,
        name: row.get("name")?,
        timestamp: row.get("timestamp")?,
        kind,
        selfie_path: row.get("selfie_path")?,
        is_late: row.get::<_, i64>("is_late")? == 1,
        open: row.get::<_, i64>("is_open")? == 1,
    })
}

fn collect(conn: &Connection, sql: &str, params: impl rusqlite::Params) -> AppResult<Vec<AttendanceEntry>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params, map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_entry(conn: &Connection, e: &NewEntry) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO attendance_log (name, timestamp, kind, selfie_path, is_late, is_open)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            e.name,
            e.timestamp,
            e.kind.to_db_str(),
            e.selfie_path,
            e.is_late as i64,
            e.open as i64,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Update an entry (all fields except id).
pub fn update_entry(conn: &Connection, e: &AttendanceEntry) -> AppResult<()> {
    conn.execute(
        "UPDATE attendance_log
         SET name = ?1, timestamp = ?2, kind = ?3,
             selfie_path = ?4, is_late = ?5, is_open = ?6
         WHERE id = ?7",
        params![
            e.name,
            e.timestamp,
            e.kind.to_db_str(),
            e.selfie_path,
            e.is_late as i64,
            e.open as i64,
            e.id,
        ],
    )?;
    Ok(())
}

pub fn load_entry(conn: &Connection, id: i64) -> AppResult<Option<AttendanceEntry>> {
    let sql = format!("{SELECT_ENTRY} WHERE id = ?1");
    Ok(conn.query_row(&sql, [id], map_row).optional()?)
}

/// Whole ledger, most recent first.
pub fn load_all_entries(conn: &Connection) -> AppResult<Vec<AttendanceEntry>> {
    let sql = format!("{SELECT_ENTRY} ORDER BY timestamp DESC, id DESC");
    collect(conn, &sql, [])
}

pub fn load_recent_entries(conn: &Connection, limit: usize) -> AppResult<Vec<AttendanceEntry>> {
    let sql = format!("{SELECT_ENTRY} ORDER BY timestamp DESC, id DESC LIMIT ?1");
    collect(conn, &sql, [limit as i64])
}

/// The open entry for a normalized name, if any.
pub fn find_open_entry(conn: &Connection, name: &str) -> AppResult<Option<AttendanceEntry>> {
    let sql = format!(
        "{SELECT_ENTRY} WHERE is_open = 1 AND name = ?1 ORDER BY timestamp DESC, id DESC LIMIT 1"
    );
    Ok(conn.query_row(&sql, [name], map_row).optional()?)
}

pub fn delete_entry(conn: &Connection, id: i64) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM attendance_log WHERE id = ?1", [id])?)
}

pub fn delete_all_entries(conn: &Connection) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM attendance_log", [])?)
}

pub fn delete_entries_from(conn: &Connection, from_ms: i64) -> AppResult<usize> {
    Ok(conn.execute(
        "DELETE FROM attendance_log WHERE timestamp >= ?1",
        [from_ms],
    )?)
}

/// Delete entries inside the half-open window `[from_ms, to_ms)`.
pub fn delete_entries_between(conn: &Connection, from_ms: i64, to_ms: i64) -> AppResult<usize> {
    Ok(conn.execute(
        "DELETE FROM attendance_log WHERE timestamp >= ?1 AND timestamp < ?2",
        [from_ms, to_ms],
    )?)
}
