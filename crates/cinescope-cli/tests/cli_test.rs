#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use assert_cmd::cargo_bin_cmd;
use predicates::prelude::predicate;

#[test]
fn test_help_lists_subcommands() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("cinescope");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("browse"))
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("feed"));
}

#[test]
fn test_feed_search_missing_query() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("cinescope");
    cmd.args(["feed", "search"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--query"));
}

#[test]
fn test_feed_invalid_endpoint() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("cinescope");
    cmd.arg("--dir")
        .arg(dir.path())
        .args(["feed", "--endpoint", "not a url", "trending"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid feed endpoint"));
}

#[test]
fn test_feed_unreachable_endpoint_yields_empty_list() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("cinescope");
    cmd.env("RUST_LOG", "info")
        .arg("--dir")
        .arg(dir.path())
        .args(["feed", "--endpoint", "http://127.0.0.1:9/", "top-rated"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 0 movies"));
}

#[test]
fn test_serve_invalid_bind() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("cinescope");
    cmd.arg("--dir")
        .arg(dir.path())
        .args(["serve", "--bind", "localhost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid bind address"));
}

#[test]
fn test_invalid_config_is_reported() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[feed\nendpoint = ").unwrap();

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("cinescope");
    cmd.arg("--dir")
        .arg(dir.path())
        .args(["feed", "trending"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse"));
}

#[test]
fn test_feed_series_help() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("cinescope");
    cmd.args(["feed", "series", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--endpoint"));
}
