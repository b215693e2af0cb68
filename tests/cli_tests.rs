//! CLI surface tests for the bookwalk binary.
//!
//! These only exercise paths that exit before any network call.

use assert_cmd::Command;
use predicates::prelude::*;

fn bookwalk() -> Command {
    Command::cargo_bin("bookwalk").expect("binary exists")
}

#[test]
fn help_describes_the_tool() {
    bookwalk()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("liquidity"))
        .stdout(predicate::str::contains("--qty"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn version_prints_package_version() {
    bookwalk()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn rejects_negative_quantity() {
    bookwalk()
        .arg("--qty=-3")
        .assert()
        .failure()
        .stderr(predicate::str::contains("quantity cannot be negative"));
}

#[test]
fn rejects_non_numeric_quantity() {
    bookwalk()
        .args(["--qty", "lots"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a decimal quantity"));
}

#[test]
fn unreadable_config_fails_before_fetching() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not toml [").expect("write bad config");

    bookwalk()
        .args(["--config", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}
