use assert_cmd::Command;
use predicates::prelude::*;

fn waymeasure_cmd() -> Command {
    Command::cargo_bin("waymeasure").expect("binary exists")
}

#[test]
fn waymeasure_help_prints_usage() {
    waymeasure_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Screen measurement overlay for Wayland compositors",
        ));
}

#[test]
fn no_flags_prints_usage() {
    waymeasure_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("waymeasure --active"));
}

#[test]
fn active_mode_requires_wayland_env() {
    waymeasure_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .arg("--active")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Wayland environment required"));
}
