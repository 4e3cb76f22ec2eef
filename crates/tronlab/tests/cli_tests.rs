//! General CLI behavior

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use tronlab_testkit::{temp_dir_in_workspace, write_template};

fn tronlab() -> Command {
    let mut cmd = Command::cargo_bin("tronlab").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_lists_commands() {
    tronlab()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("analyze"))
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("preview"))
        .stdout(predicate::str::contains("snippet"))
        .stdout(predicate::str::contains("watch"));
}

#[test]
fn test_version() {
    tronlab()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tronlab"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let temp = temp_dir_in_workspace();
    let path = write_template(temp.path(), "a.tron", "@[function_name]@\n");

    tronlab()
        .current_dir(temp.path())
        .args(["--verbose", "validate"])
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG"))
        .stdout(predicate::str::contains("DEBUG").not());
}

#[test]
fn test_rust_log_overrides_verbose() {
    let temp = temp_dir_in_workspace();
    let path = write_template(temp.path(), "a.tron", "@[function_name]@\n");

    tronlab()
        .current_dir(temp.path())
        .env("RUST_LOG", "error")
        .args(["--verbose", "validate"])
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG").not());
}
