use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("punto")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("browse"))
        .stdout(predicate::str::contains("events"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("--data"));
}

#[test]
fn test_events_help_shows_subcommands() {
    cargo_bin_cmd!("punto")
        .args(["events", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("show"));
}

#[test]
fn test_browse_requires_terminal() {
    let dir = tempfile::tempdir().unwrap();

    cargo_bin_cmd!("punto")
        .env("PUNTO_HOME", dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires a terminal"));
}
