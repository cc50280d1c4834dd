//! Integration tests for the berth-admin binary: argument parsing, the
//! subcommand table, exit codes, and one request round trip.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

use crate::support::{config_file, serve_once};

const SUBCOMMAND_NAMES: [&str; 9] = [
    "create-user",
    "create-users",
    "disable-user",
    "enable-user",
    "gc",
    "get-user",
    "help",
    "list-user",
    "usage",
];

fn berth_admin() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("berth-admin"));
    cmd.env("NO_COLOR", "1").env_remove("BERTH_CONFIG");
    cmd
}

// ── Help and version ─────────────────────────────────────────────────────────

#[test]
fn test_help_subcommand_lists_all_nine() {
    let mut assert = berth_admin().arg("help").assert().success();
    for name in SUBCOMMAND_NAMES {
        assert = assert.stdout(predicate::str::contains(name));
    }
}

#[test]
fn test_help_with_truthy_no_color_env_exits_zero() {
    for value in ["1", "yes", ""] {
        berth_admin()
            .env("NO_COLOR", value)
            .arg("help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Subcommands:"));
    }
}

#[test]
fn test_help_flag_exits_zero() {
    berth_admin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_version_flag_exits_zero() {
    berth_admin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("berth-admin"));
}

// ── Parse errors ─────────────────────────────────────────────────────────────

#[test]
fn test_unknown_subcommand_lists_table_and_exits_255() {
    let mut assert = berth_admin().arg("snapshot").assert().code(255);
    assert = assert.stderr(predicate::str::contains("Subcommands:"));
    for name in SUBCOMMAND_NAMES {
        assert = assert.stderr(predicate::str::contains(name));
    }
}

#[test]
fn test_no_subcommand_exits_255() {
    berth_admin()
        .assert()
        .code(255)
        .stderr(predicate::str::contains("Subcommands:"));
}

#[test]
fn test_missing_required_argument_exits_255() {
    berth_admin()
        .arg("get-user")
        .assert()
        .code(255)
        .stderr(predicate::str::contains("--id"));
}

// ── Transport ────────────────────────────────────────────────────────────────

#[test]
fn test_gc_against_unreachable_endpoint_exits_255() {
    let (_dir, path) = config_file("http://127.0.0.1:1");
    berth_admin()
        .arg("--config")
        .arg(&path)
        .arg("gc")
        .assert()
        .code(255)
        .stderr(predicate::str::contains("Garbage collection failed"));
}

#[test]
fn test_list_user_against_unreachable_endpoint_exits_255() {
    let (_dir, path) = config_file("http://127.0.0.1:1");
    berth_admin()
        .arg("-C")
        .arg(&path)
        .arg("list-user")
        .assert()
        .code(255)
        .stderr(predicate::str::contains("Failed to list users"));
}

#[test]
fn test_usage_against_unreachable_endpoint_exits_255() {
    let (_dir, path) = config_file("http://127.0.0.1:1");
    berth_admin()
        .arg("-C")
        .arg(&path)
        .args(["usage", "--start", "2024-01-01T00:00:00Z", "--end", "2024-02-01T00:00:00Z"])
        .assert()
        .code(255)
        .stderr(predicate::str::contains("Failed to fetch usage records"));
}

#[test]
fn test_get_user_round_trip_prints_record() {
    let (url, server) = serve_once(200, r#"{"result": "{\"keyId\":\"k1\",\"enabled\":true}"}"#);
    let (_dir, path) = config_file(&url);
    berth_admin()
        .arg("-C")
        .arg(&path)
        .args(["get-user", "--id", "k1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"keyId":"k1","enabled":true}"#));
    let req = server.join().expect("server thread");
    assert_eq!(req.request_line, "POST /admin/getUser HTTP/1.1");
}

#[test]
fn test_verbose_logs_command_and_endpoint() {
    let (url, server) = serve_once(200, r#"{"result": true}"#);
    let (_dir, path) = config_file(&url);
    berth_admin()
        .env_remove("RUST_LOG")
        .arg("-v")
        .arg("-C")
        .arg(&path)
        .arg("gc")
        .assert()
        .success()
        .stderr(predicate::str::contains("parsed command"))
        .stderr(predicate::str::contains(url.as_str()));
    server.join().expect("server thread");
}
