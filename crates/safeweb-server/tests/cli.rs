// SPDX-License-Identifier: Apache-2.0

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_version() {
    let mut cmd = cargo_bin_cmd!("safeweb");
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("safeweb"));
}

#[test]
fn test_help_contains_all_commands() {
    let mut cmd = cargo_bin_cmd!("safeweb");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("check-host"))
        .stdout(predicate::str::contains("seed-user"));
}

#[test]
fn test_check_host_accepts_valid_hostname() {
    let mut cmd = cargo_bin_cmd!("safeweb");
    cmd.args(["check-host", "sub.example-host.com"])
        .assert()
        .success()
        .stdout(predicate::str::diff("valid\n"));
}

#[test]
fn test_check_host_rejects_metacharacters() {
    let mut cmd = cargo_bin_cmd!("safeweb");
    cmd.args(["check-host", "localhost; rm -rf /"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("invalid"))
        .stdout(predicate::str::contains("metacharacter"));
}

#[test]
fn test_missing_config_file_fails() {
    let mut cmd = cargo_bin_cmd!("safeweb");
    cmd.args(["--config", "/nonexistent/safeweb.toml", "check-host", "localhost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_seed_user_prints_new_ids() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("users.db");

    for expected in ["1\n", "2\n"] {
        let mut cmd = cargo_bin_cmd!("safeweb");
        cmd.env("SAFEWEB_DATABASE__PATH", &db_path)
            .args(["seed-user", "alice", "--email", "alice@example.com"])
            .assert()
            .success()
            .stdout(predicate::str::diff(expected));
    }

    assert!(db_path.exists());
}
