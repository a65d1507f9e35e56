use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db, rfe, setup_test_db};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");

    rfe()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_tap_then_list() {
    let db_path = setup_test_db("cli_tap_list");
    init_db(&db_path);

    rfe()
        .args(["--db", &db_path, "tap", "--dx", "10", "--dy", "0"])
        .assert()
        .success()
        .stdout(contains("Ecstasy (JOY/INTENSE)"));

    rfe()
        .args(["--db", &db_path, "tap", "--dx", "-140", "--dy", "0"])
        .assert()
        .success()
        .stdout(contains("Acceptance (TRUST/MILD)"));

    rfe()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Ecstasy"))
        .stdout(contains("Acceptance"));
}

#[test]
fn test_add_with_time_and_json_order() {
    let db_path = setup_test_db("cli_add_json");
    init_db(&db_path);

    rfe()
        .args(["--db", &db_path, "add", "fear", "mild", "--at", "2025-03-01 08:00"])
        .assert()
        .success()
        .stdout(contains("Apprehension (FEAR/MILD)"));

    rfe()
        .args(["--db", &db_path, "add", "JOY", "MODERATE", "--at", "2025-03-02 08:00"])
        .assert()
        .success();

    let out = rfe()
        .args(["--db", &db_path, "list", "--json"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let records: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 2);
    // most recent observation first
    assert_eq!(records[0]["category"], "JOY");
    assert_eq!(records[1]["category"], "FEAR");
    assert_eq!(records[1]["intensity"], "MILD");
}

#[test]
fn test_list_limit() {
    let db_path = setup_test_db("cli_list_limit");
    init_db(&db_path);

    for day in ["01", "02", "03"] {
        rfe()
            .args([
                "--db",
                &db_path,
                "add",
                "SADNESS",
                "INTENSE",
                "--at",
                &format!("2025-04-{} 12:00", day),
            ])
            .assert()
            .success();
    }

    rfe()
        .args(["--db", &db_path, "list", "--limit", "1"])
        .assert()
        .success()
        .stdout(contains("2025-04-03"))
        .stdout(contains("2025-04-01").not());
}

#[test]
fn test_list_empty() {
    let db_path = setup_test_db("cli_list_empty");
    init_db(&db_path);

    rfe()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No emotions logged yet"));
}

#[test]
fn test_add_rejects_unknown_category() {
    let db_path = setup_test_db("cli_add_bad");
    init_db(&db_path);

    rfe()
        .args(["--db", &db_path, "add", "LOVE", "MILD"])
        .assert()
        .failure();
}

#[test]
fn test_add_rejects_bad_timestamp() {
    let db_path = setup_test_db("cli_add_bad_time");
    init_db(&db_path);

    rfe()
        .args(["--db", &db_path, "add", "JOY", "MILD", "--at", "yesterday"])
        .assert()
        .failure()
        .stderr(contains("Invalid timestamp"));
}

#[test]
fn test_show_edit_and_del() {
    let db_path = setup_test_db("cli_show_edit_del");
    init_db(&db_path);

    rfe()
        .args(["--db", &db_path, "add", "ANGER", "MILD", "--at", "2025-05-05 10:00"])
        .assert()
        .success()
        .stdout(contains("Logged #1"));

    rfe()
        .args(["--db", &db_path, "show", "1"])
        .assert()
        .success()
        .stdout(contains("Annoyance (ANGER/MILD)"))
        .stdout(contains("2025-05-05 10:00"))
        .stdout(contains("edited   : --"));

    rfe()
        .args(["--db", &db_path, "edit", "1", "--intensity", "INTENSE"])
        .assert()
        .success()
        .stdout(contains("Rage (ANGER/INTENSE)"));

    rfe()
        .args(["--db", &db_path, "show", "1"])
        .assert()
        .success()
        .stdout(contains("Rage"))
        .stdout(contains("edited   : --").not());

    rfe()
        .args(["--db", &db_path, "del", "1"])
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    rfe()
        .args(["--db", &db_path, "del", "1"])
        .assert()
        .success()
        .stdout(contains("does not exist"));

    rfe()
        .args(["--db", &db_path, "show", "1"])
        .assert()
        .failure()
        .stderr(contains("No emotion log with id 1"));
}

#[test]
fn test_edit_unknown_id_fails() {
    let db_path = setup_test_db("cli_edit_missing");
    init_db(&db_path);

    rfe()
        .args(["--db", &db_path, "edit", "7", "--intensity", "MILD"])
        .assert()
        .failure()
        .stderr(contains("No emotion log with id 7"));
}

#[test]
fn test_clear_with_yes() {
    let db_path = setup_test_db("cli_clear");
    init_db(&db_path);

    rfe()
        .args(["--db", &db_path, "tap", "--dx", "0", "--dy", "30"])
        .assert()
        .success();

    rfe()
        .args(["--db", &db_path, "clear", "--yes"])
        .assert()
        .success()
        .stdout(contains("Deleted 1 logged emotions"));

    rfe()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No emotions logged yet"));
}

#[test]
fn test_clear_cancelled() {
    let db_path = setup_test_db("cli_clear_cancel");
    init_db(&db_path);

    rfe()
        .args(["--db", &db_path, "add", "TRUST", "MILD"])
        .assert()
        .success();

    rfe()
        .args(["--db", &db_path, "clear"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    rfe()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Acceptance"));
}

#[test]
fn test_locate_does_not_write() {
    let db_path = setup_test_db("cli_locate");
    init_db(&db_path);

    rfe()
        .args(["--db", &db_path, "locate", "--dx", "0", "--dy", "-80"])
        .assert()
        .success()
        .stdout(contains("sector 6"))
        .stdout(contains("ring 1"))
        .stdout(contains("Anticipation (ANTICIPATION/MODERATE)"));

    rfe()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No emotions logged yet"));
}

#[test]
fn test_names_lists_whole_table() {
    rfe()
        .args(["names"])
        .assert()
        .success()
        .stdout(contains("emotion_serenity"))
        .stdout(contains("emotion_amazement"))
        .stdout(contains("Vigilance"));
}

#[test]
fn test_watch_follows_console_taps() {
    let db_path = setup_test_db("cli_watch");
    init_db(&db_path);

    rfe()
        .args(["--db", &db_path, "watch", "--count", "2"])
        .write_stdin("tap 10 0\n")
        .timeout(std::time::Duration::from_secs(20))
        .assert()
        .success()
        .stdout(contains("0 logged emotions"))
        .stdout(contains("1 logged emotions"))
        .stdout(contains("Ecstasy"));
}

#[test]
fn test_watch_quit() {
    let db_path = setup_test_db("cli_watch_quit");
    init_db(&db_path);

    rfe()
        .args(["--db", &db_path, "watch"])
        .write_stdin("bogus\nquit\n")
        .timeout(std::time::Duration::from_secs(20))
        .assert()
        .success()
        .stderr(contains("unknown command 'bogus'"));
}

#[test]
fn test_config_print_reflects_db_override() {
    let db_path = setup_test_db("cli_config_print");

    rfe()
        .args(["--db", &db_path, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("wheel_radius"))
        .stdout(contains("live_grace_ms"))
        .stdout(contains(db_path.as_str()));
}

#[test]
fn test_clear_on_empty_database() {
    let db_path = setup_test_db("cli_clear_empty");
    init_db(&db_path);

    rfe()
        .args(["--db", &db_path, "clear"])
        .assert()
        .success()
        .stdout(contains("Nothing to delete"));
}
