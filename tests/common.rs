#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use bluenine::core::clock::FixedClock;
use bluenine::db::pool::DbPool;
use bluenine::db::settings::save_settings;
use bluenine::models::settings::Settings;
use chrono::{Local, TimeZone};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

pub fn bn() -> Command {
    cargo_bin_cmd!("bluenine")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_bluenine.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Fresh, empty directory inside the system temp dir
pub fn temp_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("bluenine_{}", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp dir");
    path
}

/// Initialize a DB through the CLI with selfies switched off, so sign-ins
/// need no image.
pub fn init_db_without_selfies(db_path: &str) {
    bn().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    bn().args(["--db", db_path, "settings", "--selfie-required", "false"])
        .assert()
        .success();
}

/// In-memory pool with 09:00 start, 5 minutes grace and the given selfie flag
pub fn memory_pool(selfie_required: bool) -> DbPool {
    let pool = DbPool::in_memory().expect("in-memory db");
    pool.with_conn(|c| {
        save_settings(
            c,
            &Settings {
                selfie_required,
                ..Settings::default()
            },
        )
    })
    .expect("save settings");
    pool
}

/// Clock pinned to a local wall-clock time
pub fn clock_at(y: i32, m: u32, d: u32, h: u32, min: u32) -> Arc<FixedClock> {
    Arc::new(FixedClock::new(
        Local
            .with_ymd_and_hms(y, m, d, h, min, 0)
            .single()
            .expect("unambiguous local time"),
    ))
}
