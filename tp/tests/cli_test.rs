//! CLI tests for the tp binary
//!
//! Offline paths only; nothing here talks to a backend.

use assert_cmd::Command;
use predicates::prelude::*;

// =============================================================================
// Plan Tests
// =============================================================================

#[test]
fn test_plan_offline_prints_a_draft() {
    Command::cargo_bin("tp")
        .expect("binary built")
        .args(["plan", "--offline", "--feel", "relax"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lisbon, Portugal"))
        .stdout(predicate::str::contains("Day 1"))
        .stdout(predicate::str::contains("Day 3"));
}

#[test]
fn test_plan_offline_json_envelope() {
    Command::cargo_bin("tp")
        .expect("binary built")
        .args(["plan", "--offline", "--feel", "relax", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"itinerary\""))
        .stdout(predicate::str::contains("\"stage\": \"draft\""))
        .stdout(predicate::str::contains("travel-itinerary.xlsx"));
}

#[test]
fn test_plan_answers_steer_the_destination() {
    Command::cargo_bin("tp")
        .expect("binary built")
        .args([
            "plan",
            "--offline",
            "--feel",
            "adventure",
            "--answer",
            "destination=Faro, Portugal",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Faro, Portugal"));
}

#[test]
fn test_plan_requires_a_feeling() {
    Command::cargo_bin("tp")
        .expect("binary built")
        .args(["plan", "--offline"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("At least one valid --feel is required"));
}

#[test]
fn test_plan_warns_on_unknown_feeling() {
    Command::cargo_bin("tp")
        .expect("binary built")
        .args(["plan", "--offline", "--feel", "relax", "--feel", "zen"])
        .assert()
        .success()
        .stderr(predicate::str::contains("unknown feeling 'zen'"));
}

#[test]
fn test_plan_rejects_unknown_format() {
    Command::cargo_bin("tp")
        .expect("binary built")
        .args(["plan", "--feel", "relax", "--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown format"));
}

// =============================================================================
// Export Tests
// =============================================================================

#[test]
fn test_export_prints_csv_rows() {
    Command::cargo_bin("tp")
        .expect("binary built")
        .args(["export", "--feel", "relax", "--feel", "food"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Day,Focus,Time,Activity,Detail,Notes,Map"))
        .stdout(predicate::str::contains("Day 2"));
}

// =============================================================================
// Help Tests
// =============================================================================

#[test]
fn test_help_shows_log_location() {
    Command::cargo_bin("tp")
        .expect("binary built")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logs are written to:"));
}
