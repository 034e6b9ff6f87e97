//! Bulk clearing of the attendance ledger.
//!
//! `day` follows the local calendar date; `week` and `month` are rolling
//! windows reaching 6 and 29 days back from now. Deletes are immediate and
//! cannot be undone.

use crate::core::clock::Clock;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_all_entries, delete_entries_between, delete_entries_from};
use crate::errors::AppResult;
use crate::models::retention::RetentionScope;
use crate::utils::date::{DAY_MS, day_bounds_ms};
use chrono::{DateTime, Local};
use std::sync::Arc;

/// Timestamps (epoch millis) a scope deletes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearWindow {
    /// `from <= ts < to`
    Between { from: i64, to: i64 },
    /// `ts >= from`
    From(i64),
    Everything,
}

impl ClearWindow {
    pub fn contains(&self, ts: i64) -> bool {
        match *self {
            ClearWindow::Between { from, to } => ts >= from && ts < to,
            ClearWindow::From(from) => ts >= from,
            ClearWindow::Everything => true,
        }
    }
}

pub fn window_for(scope: RetentionScope, now: &DateTime<Local>) -> ClearWindow {
    let now_ms = now.timestamp_millis();
    match scope {
        RetentionScope::Day => {
            let (from, to) = day_bounds_ms(now.date_naive());
            ClearWindow::Between { from, to }
        }
        RetentionScope::Week => ClearWindow::From(now_ms - 6 * DAY_MS),
        RetentionScope::Month => ClearWindow::From(now_ms - 29 * DAY_MS),
        RetentionScope::All => ClearWindow::Everything,
    }
}

pub struct RetentionManager {
    pool: DbPool,
    clock: Arc<dyn Clock>,
}

impl RetentionManager {
    pub fn new(pool: DbPool, clock: Arc<dyn Clock>) -> Self {
        Self { pool, clock }
    }

    /// Delete every entry in the scope's window. Returns how many went.
    pub fn clear(&self, scope: RetentionScope) -> AppResult<usize> {
        let window = window_for(scope, &self.clock.now());

        self.pool.with_conn(|conn| {
            let removed = match window {
                ClearWindow::Between { from, to } => delete_entries_between(conn, from, to)?,
                ClearWindow::From(from) => delete_entries_from(conn, from)?,
                ClearWindow::Everything => delete_all_entries(conn)?,
            };

            ttlog_quiet(
                conn,
                "clear",
                scope.as_str(),
                &format!("{removed} attendance entries deleted"),
            );
            Ok(removed)
        })
    }
}
