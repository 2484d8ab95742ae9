//! CLI tests for the tc binary
//!
//! These tests run the built binary against the embedded tables.

use assert_cmd::Command;
use predicates::prelude::*;

// =============================================================================
// Listing Tests
// =============================================================================

#[test]
fn test_feelings_lists_all_six() {
    Command::cargo_bin("tc")
        .expect("binary built")
        .arg("feelings")
        .assert()
        .success()
        .stdout(predicate::str::contains("relax"))
        .stdout(predicate::str::contains("adventure"))
        .stdout(predicate::str::contains("celebrate"));
}

#[test]
fn test_questions_show_dependency_gate() {
    Command::cargo_bin("tc")
        .expect("binary built")
        .arg("questions")
        .assert()
        .success()
        .stdout(predicate::str::contains("kidFriendly"))
        .stdout(predicate::str::contains("needs feelings: reconnect"));
}

#[test]
fn test_blueprints_json_format() {
    Command::cargo_bin("tc")
        .expect("binary built")
        .args(["--format", "json", "blueprints"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"mapAnchor\""))
        .stdout(predicate::str::contains("Ponta Delgada, Portugal"));
}

#[test]
fn test_activities_unknown_feeling() {
    Command::cargo_bin("tc")
        .expect("binary built")
        .args(["activities", "nonexistent"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No activities for feeling"));
}

// =============================================================================
// Validation Tests
// =============================================================================

#[test]
fn test_validate_succeeds_on_embedded_tables() {
    Command::cargo_bin("tc")
        .expect("binary built")
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Catalog valid"));
}

#[test]
fn test_dump_emits_all_four_tables() {
    Command::cargo_bin("tc")
        .expect("binary built")
        .arg("dump")
        .assert()
        .success()
        .stdout(predicate::str::contains("feelingOptions"))
        .stdout(predicate::str::contains("questionBank"))
        .stdout(predicate::str::contains("destinationBlueprints"))
        .stdout(predicate::str::contains("coreActivities"));
}

#[test]
fn test_unknown_format_is_rejected() {
    Command::cargo_bin("tc")
        .expect("binary built")
        .args(["--format", "yaml", "feelings"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown format"));
}
