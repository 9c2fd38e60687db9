//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

fn contactd() -> Command {
    let mut cmd = Command::cargo_bin("contactd").unwrap();
    for var in [
        "LISTEN_ADDR",
        "ALLOWED_ORIGINS",
        "DB_HOST",
        "DB_PORT",
        "DB_USER",
        "DB_PASSWORD",
        "DB_NAME",
        "DB_MAX_CONNECTIONS",
        "DB_ACQUIRE_TIMEOUT",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_help_lists_serve() {
    contactd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"));
}

#[test]
fn test_serve_help() {
    contactd()
        .arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--allowed-origins"))
        .stdout(predicate::str::contains("--db-host"))
        .stdout(predicate::str::contains("LISTEN_ADDR"));
}

#[test]
fn test_serve_rejects_wildcard_origin() {
    contactd()
        .arg("serve")
        .arg("--allowed-origins")
        .arg("*")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid ALLOWED_ORIGINS"));
}

#[test]
fn test_serve_fails_fast_without_database() {
    contactd()
        .arg("serve")
        .arg("--db-host")
        .arg("127.0.0.1")
        .arg("--db-port")
        .arg("1")
        .arg("--db-acquire-timeout")
        .arg("1")
        .arg("--listen-addr")
        .arg("127.0.0.1:0")
        .timeout(std::time::Duration::from_secs(30))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error connecting to DB"));
}
