//! Smoke tests for the pocket-calc binary

#![allow(deprecated)] // Allow deprecated Command::cargo_bin until assert_cmd is updated
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get a command for the pocket-calc binary
fn pocket_calc() -> Command {
    let mut cmd = Command::cargo_bin("pocket-calc").expect("pocket-calc binary should exist");
    cmd.env_remove("POCKET_CALC_LOG")
        .env_remove("POCKET_CALC_LOG_FILE");
    cmd
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_version_flag() {
    pocket_calc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("1.0.3"));
}

#[test]
fn test_help_flag() {
    pocket_calc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("press"))
        .stdout(predicate::str::contains("tui"));
}

#[test]
fn test_press_help() {
    pocket_calc()
        .args(["press", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--steps"))
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn test_tui_without_terminal_fails() {
    pocket_calc()
        .arg("tui")
        .assert()
        .failure()
        .stderr(predicate::str::contains("needs a terminal"));
}

// ============================================================================
// Press
// ============================================================================

#[test]
fn test_press_addition() {
    pocket_calc()
        .args(["--color", "never", "press", "5", "+", "3", "="])
        .assert()
        .success()
        .stdout("8\n");
}

#[test]
fn test_press_pending_operation() {
    pocket_calc()
        .args(["--color", "never", "press", "1", "2", "×"])
        .assert()
        .success()
        .stdout("12 ×\n12\n");
}

#[test]
fn test_press_one_label_per_digit() {
    pocket_calc()
        .args(["--color", "never", "press", "1", "2", "×", "3", "="])
        .assert()
        .success()
        .stdout("36\n");
}

#[test]
fn test_press_multi_digit_label_is_rejected() {
    pocket_calc()
        .args(["press", "12", "×", "3", "="])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown button: \"12\""));
}

#[test]
fn test_press_result_rounds_ties_up() {
    pocket_calc()
        .args(["--color", "never", "press", "1", "÷", "5", "1", "2", "="])
        .assert()
        .success()
        .stdout("0.00195313\n");
}

#[test]
fn test_press_ascii_aliases() {
    pocket_calc()
        .args(["--color", "never", "press", "8", "/", "2", "*", "3", "="])
        .assert()
        .success()
        .stdout("12\n");
}

#[test]
fn test_press_division_by_zero() {
    pocket_calc()
        .args(["--color", "never", "press", "1", "÷", "0", "="])
        .assert()
        .success()
        .stdout("Infinity\n");
}

#[test]
fn test_press_steps() {
    pocket_calc()
        .args(["--color", "never", "press", "--steps", "2", "+", "3", "="])
        .assert()
        .success()
        .stdout(predicate::str::contains("+  →  2  (2 +)"))
        .stdout(predicate::str::contains("=  →  5"));
}

#[test]
fn test_press_json() {
    let output = pocket_calc()
        .args(["press", "--json", "0", ".", "1", "+", "0", ".", "2", "="])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["view"]["primary"], "0.3");
    assert_eq!(json["labels"].as_array().unwrap().len(), 8);
}

#[test]
fn test_press_unknown_label_fails() {
    pocket_calc()
        .args(["press", "1", "sqrt"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Unknown button"));
}

#[test]
fn test_press_requires_labels() {
    pocket_calc().arg("press").assert().failure();
}

// ============================================================================
// Logging
// ============================================================================

#[test]
fn test_quiet_press_has_clean_stderr() {
    pocket_calc()
        .args(["-q", "--color", "never", "press", "7"])
        .assert()
        .success()
        .stderr("");
}

#[test]
fn test_log_file_receives_transitions() {
    let temp = TempDir::new().unwrap();
    let log_path = temp.path().join("calc.log");

    pocket_calc()
        .args(["-vv", "--log-format", "compact", "--log-file"])
        .arg(&log_path)
        .args(["press", "4", "×", "5", "="])
        .assert()
        .success()
        .stdout(predicate::str::contains("20"))
        .stderr("");

    let log = fs::read_to_string(&log_path).unwrap();
    assert!(log.contains("transition"));
    assert!(!log.contains("\u{1b}["));
}

#[test]
fn test_log_file_from_env() {
    let temp = TempDir::new().unwrap();
    let log_path = temp.path().join("env.log");

    pocket_calc()
        .env("POCKET_CALC_LOG_FILE", &log_path)
        .args(["-vv", "press", "1"])
        .assert()
        .success();

    assert!(fs::read_to_string(&log_path).unwrap().contains("transition"));
}
