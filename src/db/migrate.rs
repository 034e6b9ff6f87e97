//! Schema migrations.
//!
//! Every migration runs inside its own transaction and is recorded in the
//! `log` table (`operation = 'migration_applied'`, `target = version`), so the
//! runner can be invoked on every open.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension};

struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20251017_0001_core_schema",
        description: "Created settings, shift_templates and attendance_log tables",
        sql: r#"
        CREATE TABLE IF NOT EXISTS settings (
            id              INTEGER PRIMARY KEY CHECK (id = 1),
            shift_start     TEXT NOT NULL,
            shift_end       TEXT NOT NULL,
            grace_minutes   INTEGER NOT NULL CHECK (grace_minutes >= 0),
            selfie_required INTEGER NOT NULL DEFAULT 1
        );

        CREATE TABLE IF NOT EXISTS shift_templates (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL,
            start_time  TEXT NOT NULL,
            end_time    TEXT NOT NULL,
            grace       INTEGER NOT NULL CHECK (grace >= 0)
        );

        CREATE TABLE IF NOT EXISTS attendance_log (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            name         TEXT NOT NULL,
            timestamp    INTEGER NOT NULL,
            kind         TEXT NOT NULL CHECK (kind IN ('IN','OUT')),
            selfie_path  TEXT,
            is_late      INTEGER NOT NULL DEFAULT 0,
            is_open      INTEGER NOT NULL DEFAULT 0
        );

        CREATE INDEX IF NOT EXISTS idx_attendance_timestamp ON attendance_log(timestamp);
        "#,
    },
    Migration {
        version: "20251017_0002_one_open_entry_per_name",
        description: "Enforced at most one open attendance entry per name",
        sql: r#"
        CREATE UNIQUE INDEX IF NOT EXISTS idx_attendance_one_open
            ON attendance_log(name) WHERE is_open = 1;
        "#,
    },
];

/// Ensure that the `log` table exists. It doubles as the migration ledger.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> AppResult<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> AppResult<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(m.sql)
        .map_err(|e| AppError::Migration(format!("{}: {}", m.version, e)))?;

    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [m.version, m.description],
    )?;

    tx.commit()?;
    Ok(())
}

/// Public entry point: run all pending migrations, oldest first.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }
        apply(conn, m)?;
        success(format!("Migration applied: {} → {}", m.version, m.description));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn running_twice_is_a_no_op() {
        let conn = Connection::open_in_memory().unwrap();
        run_pending_migrations(&conn).unwrap();
        run_pending_migrations(&conn).unwrap();

        let applied: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(applied, MIGRATIONS.len() as i64);
    }

    #[test]
    fn second_open_row_for_same_name_is_refused() {
        let conn = Connection::open_in_memory().unwrap();
        run_pending_migrations(&conn).unwrap();

        let insert = "INSERT INTO attendance_log (name, timestamp, kind, is_open) VALUES ('ann', 1, 'IN', 1)";
        conn.execute(insert, []).unwrap();
        assert!(conn.execute(insert, []).is_err());
    }
}
