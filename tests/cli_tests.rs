use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{bn, init_db_without_selfies, setup_test_db, temp_dir};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");

    bn().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_default_settings_require_selfie() {
    let db_path = setup_test_db("cli_selfie_required");
    bn().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    bn().args(["--db", &db_path, "settings"])
        .assert()
        .success()
        .stdout(contains("09:00").and(contains("17:00")));

    bn().args(["--db", &db_path, "in", "alice"])
        .assert()
        .failure()
        .stderr(contains("selfie is required"));
}

#[test]
fn test_sign_in_list_sign_out() {
    let db_path = setup_test_db("cli_in_out");
    init_db_without_selfies(&db_path);

    bn().args(["--db", &db_path, "in", "Alice"])
        .assert()
        .success()
        .stdout(contains("alice signed in"));

    bn().args(["--db", &db_path, "in", "ALICE"])
        .assert()
        .failure()
        .stderr(contains("already signed in"));

    bn().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("alice").and(contains("OPEN")));

    bn().args(["--db", &db_path, "out", "alice"])
        .assert()
        .success()
        .stdout(contains("alice signed out"));

    bn().args(["--db", &db_path, "list", "--all"])
        .assert()
        .success()
        .stdout(contains("OUT").and(contains("closed")));
}

#[test]
fn test_sign_out_without_open_entry() {
    let db_path = setup_test_db("cli_out_noop");
    init_db_without_selfies(&db_path);

    bn().args(["--db", &db_path, "out", "nobody"])
        .assert()
        .success()
        .stdout(contains("No open entry"));
}

#[test]
fn test_list_json() {
    let db_path = setup_test_db("cli_list_json");
    init_db_without_selfies(&db_path);

    bn().args(["--db", &db_path, "in", "bob"]).assert().success();

    let output = bn()
        .args(["--db", &db_path, "list", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rows[0]["name"], "bob");
    assert_eq!(rows[0]["kind"], "IN");
    assert_eq!(rows[0]["open"], true);
}

#[test]
fn test_rename_and_delete() {
    let db_path = setup_test_db("cli_rename_del");
    init_db_without_selfies(&db_path);

    bn().args(["--db", &db_path, "in", "bob"]).assert().success();

    bn().args(["--db", &db_path, "rename", "1", "Robert"])
        .assert()
        .success()
        .stdout(contains("renamed to 'robert'"));

    bn().args(["--db", &db_path, "del", "1", "--yes"])
        .assert()
        .success()
        .stdout(contains("#1 has been deleted"));

    bn().args(["--db", &db_path, "del", "1", "--yes"])
        .assert()
        .failure()
        .stderr(contains("not found"));
}

#[test]
fn test_settings_rejects_bad_time() {
    let db_path = setup_test_db("cli_bad_time");
    init_db_without_selfies(&db_path);

    bn().args(["--db", &db_path, "settings", "--start", "9:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));

    bn().args(["--db", &db_path, "settings", "--start", "08:30", "--grace", "0"])
        .assert()
        .success()
        .stdout(contains("08:30"));
}

#[test]
fn test_template_add_list_apply_del() {
    let db_path = setup_test_db("cli_templates");
    init_db_without_selfies(&db_path);

    bn().args([
        "--db", &db_path, "template", "add", "Night", "--start", "22:00", "--end", "06:00",
    ])
    .assert()
    .success()
    .stdout(contains("Template #1 created"));

    bn().args(["--db", &db_path, "template", "list"])
        .assert()
        .success()
        .stdout(contains("Night").and(contains("22:00")));

    bn().args(["--db", &db_path, "template", "apply", "1"])
        .assert()
        .success()
        .stdout(contains("22:00"));

    bn().args(["--db", &db_path, "template", "del", "1"])
        .assert()
        .success();

    bn().args(["--db", &db_path, "template", "apply", "1"])
        .assert()
        .failure()
        .stderr(contains("template #1 not found"));
}

#[test]
fn test_clear_all() {
    let db_path = setup_test_db("cli_clear_all");
    init_db_without_selfies(&db_path);

    bn().args(["--db", &db_path, "in", "a"]).assert().success();
    bn().args(["--db", &db_path, "in", "b"]).assert().success();

    bn().args(["--db", &db_path, "clear", "all", "--yes"])
        .assert()
        .success()
        .stdout(contains("Cleared 2 entries"));

    bn().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No attendance entries"));
}

#[test]
fn test_export_csv_and_excel() {
    let db_path = setup_test_db("cli_export");
    let out = temp_dir("cli_export_out");
    init_db_without_selfies(&db_path);

    bn().args(["--db", &db_path, "in", "carol"]).assert().success();

    bn().args(["--db", &db_path, "export", "--dir", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    bn().args([
        "--db",
        &db_path,
        "export",
        "--format",
        "excel",
        "--dir",
        out.to_str().unwrap(),
    ])
    .assert()
    .success()
    .stdout(contains("-excel.zip"));

    let names: Vec<String> = fs::read_dir(&out)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert!(names.iter().any(|n| n.starts_with("bluenine_") && n.ends_with(".csv")));
    assert!(names.iter().any(|n| n.ends_with("-excel.zip")));

    bn().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("export").and(contains("sign_in")));
}
