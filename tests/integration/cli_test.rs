//! Integration tests for the dstatic command line

use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;

/// Helper to run dstatic and capture output
fn run_dstatic(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_dstatic"))
        .args(args)
        .env_remove("DSTATIC_LOG")
        .output()
        .expect("Failed to execute dstatic");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

fn dstatic() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_dstatic"));
    cmd.env_remove("DSTATIC_LOG");
    cmd
}

// ============================================================================
// Listing Tests
// ============================================================================

#[test]
fn list_colors_prints_hues() {
    dstatic()
        .arg("--list_colors")
        .assert()
        .success()
        .stdout("Color List:\nred, green, blue, yellow, cyan, magenta\n");
}

#[test]
fn snapshot_cli_list_colors() {
    let (stdout, stderr, exit_code) = run_dstatic(&["--list_colors"]);
    let output = format!(
        "=== dstatic --list_colors ===\nExit code: {}\n\n--- stdout ---\n{}\n--- stderr ---\n{}",
        exit_code, stdout, stderr
    );
    insta::assert_snapshot!("cli_list_colors", output);
}

#[test]
fn list_commands_prints_key_table() {
    dstatic()
        .arg("--list_commands")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("List of running commands:"))
        .stdout(predicate::str::contains("Q or q"))
        .stdout(predicate::str::contains("Freeze screen"));
}

#[test]
fn snapshot_cli_list_commands() {
    let (stdout, stderr, exit_code) = run_dstatic(&["--list_commands"]);
    let output = format!(
        "=== dstatic --list_commands ===\nExit code: {}\n\n--- stdout ---\n{}\n--- stderr ---\n{}",
        exit_code, stdout, stderr
    );
    insta::assert_snapshot!("cli_list_commands", output);
}

#[test]
fn list_commands_wins_over_list_colors() {
    let (stdout, _stderr, exit_code) = run_dstatic(&["--list_colors", "--list_commands"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.starts_with("List of running commands:"));
}

#[test]
fn version_shows_package_version() {
    dstatic()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn help_hides_test_mode() {
    dstatic()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--start_timer"))
        .stdout(predicate::str::contains("--test_mode").not());
}

#[test]
fn completions_are_generated() {
    dstatic()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dstatic"));
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn delay_out_of_range_is_usage_error() {
    let (_stdout, stderr, exit_code) = run_dstatic(&["-d", "12"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("12 is an invalid positive int 0 to 9"));
}

#[test]
fn zero_run_timer_is_usage_error() {
    dstatic()
        .args(["-r", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("0 is an invalid positive int value"));
}

#[test]
fn unknown_color_is_usage_error() {
    dstatic()
        .args(["--color", "purple"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("purple is an invalid color name"));
}

#[test]
fn bad_color_count_is_usage_error() {
    dstatic()
        .args(["--colors", "16"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid color count"));
}

#[test]
fn missing_config_file_is_runtime_error() {
    let (_stdout, stderr, exit_code) =
        run_dstatic(&["--config", "/nonexistent/dstatic/config.toml"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Failed to read config file"));
    assert!(stderr.contains("/nonexistent/dstatic/config.toml"));
}
