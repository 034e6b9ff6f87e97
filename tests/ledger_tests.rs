use bluenine::core::ledger::AttendanceLedger;
use bluenine::core::selfie::SelfieStore;
use bluenine::core::settings::{SettingsStore, SettingsUpdate};
use bluenine::core::templates::ShiftTemplateCatalog;
use bluenine::errors::AppError;
use bluenine::models::entry_type::EntryType;
use chrono::{Duration, NaiveTime};
use std::path::Path;
use std::sync::Arc;
use std::thread;

mod common;
use common::{clock_at, memory_pool, temp_dir};

#[test]
fn alice_signs_in_late_and_out_in_place() {
    let pool = memory_pool(false);
    let clock = clock_at(2025, 5, 12, 9, 10);
    let ledger = AttendanceLedger::new(
        pool,
        clock.clone(),
        SelfieStore::new(temp_dir("alice_selfies")),
    );

    let entry = ledger.sign_in("Alice", None).unwrap();
    assert_eq!(entry.name, "alice");
    assert_eq!(entry.kind, EntryType::In);
    assert!(entry.open);
    assert!(entry.is_late);

    clock.advance(Duration::hours(8));
    let closed = ledger.sign_out("alice").unwrap().unwrap();
    assert_eq!(closed.id, entry.id);
    assert_eq!(closed.kind, EntryType::Out);
    assert!(!closed.open);
    assert!(closed.is_late);

    let all = ledger.list_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0], closed);
}

#[test]
fn sign_in_inside_grace_is_on_time() {
    let pool = memory_pool(false);
    let ledger = AttendanceLedger::new(
        pool,
        clock_at(2025, 5, 12, 9, 5),
        SelfieStore::new(temp_dir("grace_selfies")),
    );
    assert!(!ledger.sign_in("bob", None).unwrap().is_late);
}

#[test]
fn lateness_is_not_recomputed_after_settings_change() {
    let pool = memory_pool(false);
    let ledger = AttendanceLedger::new(
        pool.clone(),
        clock_at(2025, 5, 12, 9, 10),
        SelfieStore::new(temp_dir("stable_late")),
    );
    let entry = ledger.sign_in("carol", None).unwrap();
    assert!(entry.is_late);

    SettingsStore::new(pool)
        .update(&SettingsUpdate {
            grace_minutes: Some(60),
            ..SettingsUpdate::default()
        })
        .unwrap();

    assert!(ledger.get(entry.id).unwrap().unwrap().is_late);
}

#[test]
fn selfie_is_stored_and_referenced() {
    let dir = temp_dir("stored_selfie");
    let pool = memory_pool(true);
    let ledger = AttendanceLedger::new(
        pool,
        clock_at(2025, 5, 12, 8, 55),
        SelfieStore::new(dir.clone()),
    );

    let entry = ledger.sign_in("Dana", Some(b"\xFF\xD8jpeg")).unwrap();
    let path = entry.selfie_path.clone().unwrap();
    assert!(Path::new(&path).starts_with(&dir));
    assert!(path.ends_with(&format!("dana_{}.jpg", entry.timestamp)));
    assert_eq!(std::fs::read(&path).unwrap(), b"\xFF\xD8jpeg");
}

#[test]
fn failed_selfie_save_still_records_the_sign_in() {
    // a regular file where the selfie directory should be
    let blocker = temp_dir("blocked_selfies").join("not_a_dir");
    std::fs::write(&blocker, b"x").unwrap();

    let ledger = AttendanceLedger::new(
        memory_pool(true),
        clock_at(2025, 5, 12, 8, 55),
        SelfieStore::new(blocker),
    );

    let entry = ledger.sign_in("erin", Some(b"img")).unwrap();
    assert!(entry.open);
    assert_eq!(entry.selfie_path, None);
}

#[test]
fn concurrent_sign_ins_leave_one_open_entry() {
    let pool = memory_pool(false);
    let ledger = Arc::new(AttendanceLedger::new(
        pool,
        clock_at(2025, 5, 12, 8, 0),
        SelfieStore::new(temp_dir("concurrent")),
    ));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let l = Arc::clone(&ledger);
            thread::spawn(move || l.sign_in("frank", None).is_ok())
        })
        .collect();

    let ok = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|ok| *ok)
        .count();

    assert_eq!(ok, 1);
    let open: Vec<_> = ledger
        .list_all()
        .unwrap()
        .into_iter()
        .filter(|e| e.open)
        .collect();
    assert_eq!(open.len(), 1);
}

#[test]
fn rename_then_sign_out_under_the_new_name() {
    let ledger = AttendanceLedger::new(
        memory_pool(false),
        clock_at(2025, 5, 12, 8, 30),
        SelfieStore::new(temp_dir("rename_flow")),
    );

    let e = ledger.sign_in("bob", None).unwrap();
    ledger.rename(e.id, "robert").unwrap();

    assert_eq!(ledger.sign_out("bob").unwrap(), None);
    let closed = ledger.sign_out("Robert").unwrap().unwrap();
    assert_eq!(closed.id, e.id);
}

#[test]
fn delete_removes_only_that_entry() {
    let clock = clock_at(2025, 5, 12, 8, 30);
    let ledger = AttendanceLedger::new(
        memory_pool(false),
        clock.clone(),
        SelfieStore::new(temp_dir("delete_one")),
    );
    let a = ledger.sign_in("a", None).unwrap();
    clock.advance(Duration::minutes(1));
    let b = ledger.sign_in("b", None).unwrap();

    assert!(ledger.delete(a.id).unwrap());
    let ids: Vec<i64> = ledger.list_all().unwrap().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![b.id]);
}

#[test]
fn applied_template_drives_lateness() {
    let pool = memory_pool(false);
    let catalog = ShiftTemplateCatalog::new(pool.clone());
    let night = catalog
        .create(
            "Night",
            NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
            10,
        )
        .unwrap();
    catalog.apply(night.id).unwrap();

    let ledger = AttendanceLedger::new(
        pool,
        clock_at(2025, 5, 12, 22, 9),
        SelfieStore::new(temp_dir("template_late")),
    );
    assert!(!ledger.sign_in("gina", None).unwrap().is_late);
}
