//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let mut cmd = Command::cargo_bin("commitlog").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("check-db"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("commitlog").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--db-host"))
        .stdout(predicate::str::contains("--db-max-connections"))
        .stdout(predicate::str::contains("--env"));
}

#[test]
fn test_serve_rejects_unknown_environment() {
    let mut cmd = Command::cargo_bin("commitlog").unwrap();
    cmd.arg("serve").arg("--env").arg("staging");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown environment"));
}

#[test]
fn test_check_db_fails_when_unreachable() {
    let mut cmd = Command::cargo_bin("commitlog").unwrap();
    cmd.args([
        "check-db",
        "--db-host",
        "127.0.0.1",
        "--db-port",
        "1",
        "--db-connect-timeout-ms",
        "300",
    ]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Could not reach database at 127.0.0.1:1"));
}
