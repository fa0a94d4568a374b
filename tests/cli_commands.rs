//! CLI surface checks for the compiled binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn cli() -> Command {
    Command::cargo_bin("logoforge").expect("Failed to locate logoforge binary")
}

#[test]
fn help_describes_the_wizard() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Interactive wizard"))
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("--mock"))
        .stdout(predicate::str::contains("--count"))
        .stdout(predicate::str::contains("--format"));
}

#[test]
fn version_prints_crate_version() {
    cli()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_format_flag_is_rejected() {
    cli()
        .args(["--format", "JPEG"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown output format 'JPEG'"));
}

#[test]
fn explicit_missing_config_is_reported() {
    cli()
        .args(["--config", "/nonexistent/logoforge.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}
