//! CLI workflow integration tests
//!
//! Spawns the compiled binary against temporary databases and checks
//! the migrate, seed, lookup, and schema flows end to end.

use rusqlite::Connection;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const EURO_UID: &str = "0f8fad5b-d9cb-469f-a165-70867728950e";

fn run_cli(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_junction-cli"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "CLI command should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

fn db_arg(temp_dir: &TempDir) -> String {
    temp_dir
        .path()
        .join("store.db")
        .to_str()
        .unwrap()
        .to_string()
}

#[test]
fn test_migrate_apply_creates_the_full_schema() {
    let temp_dir = TempDir::new().unwrap();
    let db = db_arg(&temp_dir);

    let output = run_cli(temp_dir.path(), &["migrate", "apply", "--db", &db]);
    assert_success(&output);

    let conn = Connection::open(&db).unwrap();
    let ledger_rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(ledger_rows, 2, "Expected one ledger row per migration");
}

#[test]
fn test_migrate_status_shows_pending_then_applied() {
    let temp_dir = TempDir::new().unwrap();
    let db = db_arg(&temp_dir);

    let output = run_cli(temp_dir.path(), &["migrate", "status", "--db", &db]);
    assert_success(&output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("pending  001_tagging_schema"));
    assert!(stdout.contains("pending  002_currency_region_schema"));

    assert_success(&run_cli(temp_dir.path(), &["migrate", "apply", "--db", &db]));

    let output = run_cli(temp_dir.path(), &["migrate", "status", "--db", &db]);
    assert_success(&output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("applied  001_tagging_schema"));
    assert!(stdout.contains("applied  002_currency_region_schema"));
    assert!(!stdout.contains("pending"));
}

#[test]
fn test_migrate_revert_walks_back_the_currency_schema() {
    let temp_dir = TempDir::new().unwrap();
    let db = db_arg(&temp_dir);
    assert_success(&run_cli(temp_dir.path(), &["migrate", "apply", "--db", &db]));

    let output = run_cli(temp_dir.path(), &["migrate", "revert", "--db", &db]);
    assert_success(&output);
    assert!(String::from_utf8_lossy(&output.stdout).contains("Reverted 002_currency_region_schema"));

    let conn = Connection::open(&db).unwrap();
    let currecies_exists: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'Currecies'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(currecies_exists, 0, "Currecies should be dropped by revert");
}

#[test]
fn test_seed_then_lookup_currency_by_well_known_uid() {
    let temp_dir = TempDir::new().unwrap();
    let db = db_arg(&temp_dir);
    assert_success(&run_cli(temp_dir.path(), &["seed", "--db", &db]));

    let output = run_cli(
        temp_dir.path(),
        &["lookup", "currency", EURO_UID, "--db", &db],
    );
    assert_success(&output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("EUR"), "Expected the euro, got: {}", stdout);
    assert!(stdout.contains("DE"), "Expected Germany, got: {}", stdout);
    assert!(stdout.contains("FR"), "Expected France, got: {}", stdout);
}

#[test]
fn test_lookup_currency_as_json() {
    let temp_dir = TempDir::new().unwrap();
    let db = db_arg(&temp_dir);
    assert_success(&run_cli(temp_dir.path(), &["seed", "--db", &db]));

    let output = run_cli(
        temp_dir.path(),
        &["lookup", "currency", EURO_UID, "--json", "--db", &db],
    );
    assert_success(&output);

    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON");
    assert_eq!(parsed["currency"]["iso_code"], "EUR");
    assert_eq!(
        parsed["regions"].as_array().map(|regions| regions.len()),
        Some(2)
    );
}

#[test]
fn test_lookup_tag_lists_posts() {
    let temp_dir = TempDir::new().unwrap();
    let db = db_arg(&temp_dir);
    assert_success(&run_cli(temp_dir.path(), &["seed", "--db", &db]));

    let output = run_cli(temp_dir.path(), &["lookup", "tag", "database", "--db", &db]);
    assert_success(&output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Modeling many-to-many joins"));
    assert!(stdout.contains("Composite keys in practice"));
}

#[test]
fn test_lookup_misses_are_reported_but_not_errors() {
    let temp_dir = TempDir::new().unwrap();
    let db = db_arg(&temp_dir);
    assert_success(&run_cli(temp_dir.path(), &["migrate", "apply", "--db", &db]));

    let output = run_cli(temp_dir.path(), &["lookup", "tag", "absent", "--db", &db]);
    assert_success(&output);
    assert!(String::from_utf8_lossy(&output.stdout).contains("not found"));

    let output = run_cli(
        temp_dir.path(),
        &[
            "lookup",
            "currency",
            "99999999-9999-4999-8999-999999999999",
            "--db",
            &db,
        ],
    );
    assert_success(&output);
    assert!(String::from_utf8_lossy(&output.stdout).contains("not found"));
}

#[test]
fn test_lookup_miss_as_json_prints_null() {
    let temp_dir = TempDir::new().unwrap();
    let db = db_arg(&temp_dir);
    assert_success(&run_cli(temp_dir.path(), &["migrate", "apply", "--db", &db]));

    let output = run_cli(
        temp_dir.path(),
        &["lookup", "tag", "absent", "--json", "--db", &db],
    );
    assert_success(&output);

    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON");
    assert!(parsed.is_null());
}

#[test]
fn test_seed_twice_is_a_noop() {
    let temp_dir = TempDir::new().unwrap();
    let db = db_arg(&temp_dir);
    assert_success(&run_cli(temp_dir.path(), &["seed", "--db", &db]));

    let output = run_cli(temp_dir.path(), &["seed", "--db", &db]);
    assert_success(&output);
    assert!(String::from_utf8_lossy(&output.stdout).contains("already seeded"));

    let conn = Connection::open(&db).unwrap();
    let currency_rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM Currecies", [], |row| row.get(0))
        .unwrap();
    assert_eq!(currency_rows, 3);
}

#[test]
fn test_failed_seed_leaves_no_partial_fixture() {
    let temp_dir = TempDir::new().unwrap();
    let db = db_arg(&temp_dir);
    assert_success(&run_cli(temp_dir.path(), &["migrate", "apply", "--db", &db]));

    // A leftover row colliding with the fixture makes the seed fail
    // partway through its inserts.
    let conn = Connection::open(&db).unwrap();
    conn.execute("INSERT INTO Tags (TagId) VALUES ('rust')", [])
        .unwrap();
    drop(conn);

    let output = run_cli(temp_dir.path(), &["seed", "--db", &db]);
    assert!(
        !output.status.success(),
        "Seeding over a colliding row should fail"
    );

    let conn = Connection::open(&db).unwrap();
    let tag_rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM Tags", [], |row| row.get(0))
        .unwrap();
    let currency_rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM Currecies", [], |row| row.get(0))
        .unwrap();
    assert_eq!(tag_rows, 1, "Only the pre-existing tag should remain");
    assert_eq!(currency_rows, 0, "A failed seed should insert nothing");
}

#[test]
fn test_schema_verify_passes_on_migrated_db_and_fails_on_empty() {
    let temp_dir = TempDir::new().unwrap();
    let db = db_arg(&temp_dir);
    assert_success(&run_cli(temp_dir.path(), &["migrate", "apply", "--db", &db]));

    let output = run_cli(temp_dir.path(), &["schema", "verify", "--db", &db]);
    assert_success(&output);
    assert!(String::from_utf8_lossy(&output.stdout).contains("matches"));

    let empty_db = temp_dir.path().join("empty.db").to_str().unwrap().to_string();
    let output = run_cli(temp_dir.path(), &["schema", "verify", "--db", &empty_db]);
    assert!(
        !output.status.success(),
        "Verify against an empty database should fail"
    );
    assert!(String::from_utf8_lossy(&output.stderr).contains("schema mismatch"));
}

#[test]
fn test_schema_show_prints_the_expected_tables() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_cli(temp_dir.path(), &["schema", "show"]);
    assert_success(&output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    for table in ["Posts", "Tags", "PostTag", "Currecies", "Regions", "RegionCurrency"] {
        assert!(stdout.contains(table), "Missing table in output: {}", table);
    }
    assert!(stdout.contains("UX_Currency_ISOCode"));
}

#[test]
fn test_db_path_from_environment() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("env.db");

    let output = Command::new(env!("CARGO_BIN_EXE_junction-cli"))
        .current_dir(temp_dir.path())
        .env("JUNCTION_DB", &db_path)
        .args(["migrate", "apply"])
        .output()
        .expect("Failed to execute CLI");
    assert_success(&output);
    assert!(db_path.exists(), "Database should be created at JUNCTION_DB");
}
