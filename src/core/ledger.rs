//! The attendance ledger: sign-in/sign-out, rename, delete and listing.
//!
//! Every mutation runs inside one `DbPool::with_conn` call and one
//! transaction, so the "at most one open entry per name" check and the write
//! that depends on it cannot interleave with another writer.

use crate::core::clock::Clock;
use crate::core::lateness::is_late;
use crate::core::selfie::{SelfieOutcome, SelfieStore};
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{
    NewEntry, delete_entry, find_open_entry, insert_entry, load_all_entries, load_entry,
    load_recent_entries, update_entry,
};
use crate::db::settings::ensure_settings;
use crate::errors::{AppError, AppResult};
use crate::models::attendance::{AttendanceEntry, normalize_name};
use crate::models::entry_type::EntryType;
use crate::ui::messages::warning;
use rusqlite::Transaction;
use std::fs;
use std::sync::Arc;

pub const DEFAULT_RECENT: usize = 20;

pub struct AttendanceLedger {
    pool: DbPool,
    clock: Arc<dyn Clock>,
    selfies: SelfieStore,
}

impl AttendanceLedger {
    pub fn new(pool: DbPool, clock: Arc<dyn Clock>, selfies: SelfieStore) -> Self {
        Self {
            pool,
            clock,
            selfies,
        }
    }

    /// Sign a person in.
    pub fn sign_in(&self, name: &str, selfie: Option<&[u8]>) -> AppResult<AttendanceEntry> {
        self.sign(name, selfie, EntryType::In)
    }

    /// Record a sign event.
    ///
    /// - `IN`: refused when the person already has an open entry, or when
    ///   selfies are required and none was supplied. Lateness is computed
    ///   once, here, against the current settings.
    /// - `OUT`: stored as a closed, never-late entry.
    ///
    /// A selfie that cannot be stored leaves `selfie_path` empty; the sign
    /// itself still succeeds.
    pub fn sign(
        &self,
        name: &str,
        selfie: Option<&[u8]>,
        kind: EntryType,
    ) -> AppResult<AttendanceEntry> {
        let name = normalize_name(name)?;

        self.pool.with_conn(|conn| {
            let tx = conn.transaction()?;
            let settings = ensure_settings(&tx)?;

            if kind.is_in() {
                if find_open_entry(&tx, &name)?.is_some() {
                    return Err(AppError::AlreadySignedIn(name.clone()));
                }
                if settings.selfie_required && selfie.is_none() {
                    return Err(AppError::SelfieRequired);
                }
            }

            let now = self.clock.now();
            let ts = now.timestamp_millis();
            let late = kind.is_in() && is_late(ts, &settings, now.date_naive());

            let selfie_path = selfie.and_then(|image| {
                let outcome = self.selfies.save(image, &name, ts);
                if let SelfieOutcome::Failed(reason) = &outcome {
                    warning(format!("Selfie not saved for '{name}': {reason}"));
                }
                outcome.into_path()
            });

            let stored = insert_signed(
                tx,
                &NewEntry {
                    name: &name,
                    timestamp: ts,
                    kind,
                    selfie_path: selfie_path.as_deref(),
                    is_late: late,
                    open: kind.is_in(),
                },
            );

            // an image no entry points at is removed again
            if stored.is_err()
                && let Some(path) = &selfie_path
            {
                let _ = fs::remove_file(path);
            }
            stored
        })
    }

    /// Close the person's open entry in place: it becomes `OUT`, closed, and
    /// takes the current time. `Ok(None)` when there is nothing to close.
    pub fn sign_out(&self, name: &str) -> AppResult<Option<AttendanceEntry>> {
        let name = normalize_name(name)?;

        self.pool.with_conn(|conn| {
            let tx = conn.transaction()?;

            let Some(mut entry) = find_open_entry(&tx, &name)? else {
                return Ok(None);
            };

            entry.kind = EntryType::Out;
            entry.timestamp = self.clock.now_ms();
            entry.open = false;
            update_entry(&tx, &entry)?;

            ttlog_quiet(&tx, "sign_out", &name, &format!("#{} closed", entry.id));

            tx.commit()?;
            Ok(Some(entry))
        })
    }

    /// Change the name on one entry. Nothing else on the entry moves.
    pub fn rename(&self, id: i64, new_name: &str) -> AppResult<AttendanceEntry> {
        let new_name = normalize_name(new_name)?;

        self.pool.with_conn(|conn| {
            let tx = conn.transaction()?;

            let mut entry = load_entry(&tx, id)?.ok_or(AppError::EntryNotFound(id))?;

            if entry.open
                && entry.name != new_name
                && find_open_entry(&tx, &new_name)?.is_some()
            {
                return Err(AppError::AlreadySignedIn(new_name));
            }

            let old_name = std::mem::replace(&mut entry.name, new_name);
            update_entry(&tx, &entry)?;

            ttlog_quiet(
                &tx,
                "rename",
                &format!("#{id}"),
                &format!("{old_name} → {}", entry.name),
            );

            tx.commit()?;
            Ok(entry)
        })
    }

    /// Permanently remove one entry. `false` when the id does not exist.
    pub fn delete(&self, id: i64) -> AppResult<bool> {
        self.pool.with_conn(|conn| {
            let removed = delete_entry(conn, id)? > 0;
            if removed {
                ttlog_quiet(conn, "delete", &format!("#{id}"), "Attendance entry deleted");
            }
            Ok(removed)
        })
    }

    pub fn get(&self, id: i64) -> AppResult<Option<AttendanceEntry>> {
        self.pool.with_conn(|conn| load_entry(conn, id))
    }

    /// Full ledger, most recent first.
    pub fn list_all(&self) -> AppResult<Vec<AttendanceEntry>> {
        self.pool.with_conn(|conn| load_all_entries(conn))
    }

    /// The newest `limit` entries, most recent first.
    pub fn recent(&self, limit: usize) -> AppResult<Vec<AttendanceEntry>> {
        self.pool.with_conn(|conn| load_recent_entries(conn, limit))
    }
}

/// Insert a sign row, audit it and commit.
fn insert_signed(tx: Transaction<'_>, row: &NewEntry<'_>) -> AppResult<AttendanceEntry> {
    let id = insert_entry(&tx, row)?;
    let entry = load_entry(&tx, id)?.ok_or(AppError::EntryNotFound(id))?;

    let op = if row.kind.is_in() { "sign_in" } else { "sign_out" };
    ttlog_quiet(
        &tx,
        op,
        row.name,
        &format!(
            "#{} {}{}",
            id,
            row.kind.as_str(),
            if row.is_late { " (late)" } else { "" }
        ),
    );

    tx.commit()?;
    Ok(entry)
}
