use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Command isolated from the user's configuration and state, without colors
fn allot_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("allot").expect("Failed to find allot binary");
    cmd.env("XDG_CONFIG_HOME", dir.join("config"))
        .env("XDG_STATE_HOME", dir.join("state"))
        .arg("--no-color")
        .arg("--state-dir")
        .arg(dir.join("store"));
    cmd
}

fn write_plan(dir: &Path) -> String {
    let path = dir.join("plan.json");
    fs::write(
        &path,
        r#"{
            "items": [
                {"id": 1, "name": "Sleep", "weekly_duration": 201600, "weekly_occurrences": 7},
                {"id": 2, "name": "Work", "weekly_duration": 144000, "weekly_occurrences": 5},
                {"id": 3, "name": "Leisure", "weekly_duration": 7200, "weekly_occurrences": 2}
            ],
            "overrides": [
                {"budget_item_id": 2, "weekly_duration": 115200, "notes": "Short week"}
            ],
            "usage": {"2": 57600, "3": 10800},
            "recent_item_ids": [3]
        }"#,
    )
    .expect("Failed to write plan file");
    path.to_str().unwrap().to_string()
}

#[test]
fn test_cli_duration_format_negative() {
    let temp_dir = create_cli_test_environment();
    allot_cmd(temp_dir.path())
        .args(["duration", "format", "-5400"])
        .assert()
        .success()
        .stdout("-1h 30m\n");

    allot_cmd(temp_dir.path())
        .args(["duration", "format", "-5400", "--absolute"])
        .assert()
        .success()
        .stdout("1h 30m\n");
}

#[test]
fn test_cli_duration_parse_relative() {
    let temp_dir = create_cli_test_environment();
    allot_cmd(temp_dir.path())
        .args(["duration", "parse", "+80m", "--base", "1h"])
        .assert()
        .success()
        .stdout(predicate::str::contains("8400 seconds (2h 20m)"));

    allot_cmd(temp_dir.path())
        .args(["duration", "parse", "-2h", "--base", "1h"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 seconds (0h 0m)"));
}

#[test]
fn test_cli_duration_parse_strict_rejects_free_text() {
    let temp_dir = create_cli_test_environment();
    allot_cmd(temp_dir.path())
        .args(["duration", "parse", "5h 30m", "--strict"])
        .assert()
        .success()
        .stdout("19800 seconds\n");

    allot_cmd(temp_dir.path())
        .args(["duration", "parse", "90 minutes", "--strict"])
        .assert()
        .failure();
}

#[test]
fn test_cli_duration_elapsed() {
    let temp_dir = create_cli_test_environment();
    allot_cmd(temp_dir.path())
        .args([
            "duration",
            "elapsed",
            "2025-12-02T09:00:00Z",
            "2025-12-02T10:30:00Z",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("5400 seconds (1h 30m)"));
}

#[test]
fn test_cli_week_conventions() {
    let temp_dir = create_cli_test_environment();
    allot_cmd(temp_dir.path())
        .args(["week", "--date", "2025-12-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-12-01 – 2025-12-07"));

    allot_cmd(temp_dir.path())
        .args(["week", "--date", "2025-12-02", "--start", "sunday", "--offset", "-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-11-23 – 2025-11-29"));
}

#[test]
fn test_cli_week_start_from_config_file() {
    let temp_dir = create_cli_test_environment();
    let config = temp_dir.path().join("settings.json");
    fs::write(&config, r#"{"week_start": "sunday"}"#).unwrap();

    allot_cmd(temp_dir.path())
        .arg("--config")
        .arg(&config)
        .args(["week", "--date", "2025-12-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-11-30 – 2025-12-06"));
}

#[test]
fn test_cli_plan_show() {
    let temp_dir = create_cli_test_environment();
    let plan = write_plan(temp_dir.path());

    allot_cmd(temp_dir.path())
        .args(["plan", "show", &plan])
        .assert()
        .success()
        .stdout(predicate::str::contains("short of a full week"))
        .stdout(predicate::str::contains("Notes: Short week"))
        .stdout(predicate::str::contains("Over by: 1h 0m"));
}

#[test]
fn test_cli_plan_move_up_and_down() {
    let temp_dir = create_cli_test_environment();
    let plan = write_plan(temp_dir.path());

    allot_cmd(temp_dir.path())
        .args(["plan", "move-up", &plan, "2"])
        .assert()
        .success()
        .stdout("Moved item 2 to the front\n");

    allot_cmd(temp_dir.path())
        .args(["plan", "move-down", &plan, "1"])
        .assert()
        .success()
        .stdout("Moved item 1 to follow item 3\n");

    let contents = fs::read_to_string(&plan).unwrap();
    let work = contents.find("\"Work\"").unwrap();
    let leisure = contents.find("\"Leisure\"").unwrap();
    let sleep = contents.find("\"Sleep\"").unwrap();
    assert!(work < leisure && leisure < sleep);
}

#[test]
fn test_cli_plan_move_down_last_fails() {
    let temp_dir = create_cli_test_environment();
    let plan = write_plan(temp_dir.path());

    allot_cmd(temp_dir.path())
        .args(["plan", "move-down", &plan, "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot move budget 3"));
}

#[test]
fn test_cli_wizard_progress_persists() {
    let temp_dir = create_cli_test_environment();

    allot_cmd(temp_dir.path())
        .args(["wizard", "next"])
        .assert()
        .success()
        .stdout(predicate::str::contains("step 2 of 6 (work)"));

    allot_cmd(temp_dir.path())
        .args(["wizard", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("step 2 of 6 (work)"));

    allot_cmd(temp_dir.path())
        .args(["wizard", "reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("step 1 of 6 (sleep)"));
}

#[test]
fn test_cli_wizard_new_plan_requires_name() {
    let temp_dir = create_cli_test_environment();

    allot_cmd(temp_dir.path())
        .args(["wizard", "--new-plan", "next"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot leave step 'plan name'"));
}

#[test]
fn test_cli_wizard_finish_appends_to_plan() {
    let temp_dir = create_cli_test_environment();
    let plan = temp_dir.path().join("new-plan.json");

    allot_cmd(temp_dir.path())
        .args(["wizard", "activity", "family"])
        .assert()
        .success();
    allot_cmd(temp_dir.path())
        .args(["wizard", "custom", "add", "Piano", "2", "--every", "weekly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Custom 1: Piano"));

    for _ in 0..5 {
        allot_cmd(temp_dir.path())
            .args(["wizard", "next"])
            .assert()
            .success();
    }

    allot_cmd(temp_dir.path())
        .args(["wizard", "finish", "--plan-file"])
        .arg(&plan)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 168h 0m"))
        .stdout(predicate::str::contains("**Free time** (#5)"));

    let contents = fs::read_to_string(&plan).unwrap();
    assert!(contents.contains("\"Piano\""));

    allot_cmd(temp_dir.path())
        .args(["wizard", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("step 1 of 6"));
}

#[test]
fn test_cli_wizard_finish_too_early() {
    let temp_dir = create_cli_test_environment();
    allot_cmd(temp_dir.path())
        .args(["wizard", "finish"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Wizard is not finished"));
}
