//! Integration tests for `tronlab validate`

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use tronlab_testkit::{fixtures, temp_dir_in_workspace, write_template};

fn tronlab() -> Command {
    let mut cmd = Command::cargo_bin("tronlab").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG").env_remove("TRON_CONFIG");
    cmd
}

#[test]
fn test_validate_clean_template() {
    let temp = temp_dir_in_workspace();
    let path = write_template(temp.path(), "fn.tron", fixtures::FUNCTION_TEMPLATE);

    tronlab()
        .current_dir(temp.path())
        .arg("validate")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("✓"))
        .stdout(predicate::str::contains("No problems found"));
}

#[test]
fn test_validate_reports_diagnostics() {
    let temp = temp_dir_in_workspace();
    let path = write_template(temp.path(), "bad.tron", fixtures::MALFORMED_TEMPLATE);

    tronlab()
        .current_dir(temp.path())
        .arg("validate")
        .arg(&path)
        .assert()
        .success() // Exit code 0 without --strict
        .stdout(predicate::str::contains("Empty placeholder detected"))
        .stdout(predicate::str::contains("2:9"))
        .stdout(predicate::str::contains("[double-at]"))
        .stdout(predicate::str::contains(
            "Consider using snake_case for placeholder 'FunctionName'",
        ))
        .stdout(predicate::str::contains("1 error(s), 1 warning(s), 1 info"));
}

#[test]
fn test_validate_strict_fails_on_errors() {
    let temp = temp_dir_in_workspace();
    let path = write_template(temp.path(), "bad.tron", fixtures::UNBALANCED_TEMPLATE);

    tronlab()
        .current_dir(temp.path())
        .args(["validate", "--strict"])
        .arg(&path)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Unmatched placeholder brackets"));
}

#[test]
fn test_validate_strict_passes_on_warnings_only() {
    let temp = temp_dir_in_workspace();
    let path = write_template(temp.path(), "warn.tron", "Hello @@ world\n");

    tronlab()
        .current_dir(temp.path())
        .args(["validate", "--strict"])
        .arg(&path)
        .assert()
        .success();
}

#[test]
fn test_validate_json_keeps_argument_order() {
    let temp = temp_dir_in_workspace();
    let paths: Vec<_> = (0..6)
        .map(|i| {
            let content = if i % 2 == 0 { "@[]@\n" } else { "@[function_name]@\n" };
            write_template(temp.path(), &format!("t{}.tron", i), content)
        })
        .collect();

    let output = tronlab()
        .current_dir(temp.path())
        .args(["validate", "--json"])
        .args(&paths)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["schema_version"], "1.0");

    let files = json["files"].as_array().unwrap();
    assert_eq!(files.len(), 6);
    for (i, file) in files.iter().enumerate() {
        assert!(file["path"].as_str().unwrap().ends_with(&format!("t{}.tron", i)));
        let expected_errors = if i % 2 == 0 { 1 } else { 0 };
        assert_eq!(file["summary"]["errors"], expected_errors);
    }
    assert_eq!(json["summary"]["errors"], 3);

    let first = &files[0]["diagnostics"][0];
    assert_eq!(first["severity"], "error");
    assert_eq!(first["code"], "empty-placeholder");
    assert_eq!(first["message"], "Empty placeholder detected");
    assert_eq!(first["span"]["start"]["column"], 0);
    assert_eq!(first["span"]["end"]["column"], 4);
}

#[test]
fn test_validate_reads_config_from_ancestor() {
    let temp = temp_dir_in_workspace();
    std::fs::write(
        temp.path().join("tron.toml"),
        "[validation]\nmin_placeholder_length = 20\n",
    )
    .unwrap();
    let nested = temp.path().join("templates");
    let path = write_template(&nested, "fn.tron", "@[function_name]@\n");

    tronlab()
        .current_dir(&nested)
        .arg("validate")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "shorter than minimum length of 20",
        ));
}

#[test]
fn test_validate_flags_override_config() {
    let temp = temp_dir_in_workspace();
    std::fs::write(
        temp.path().join("tron.toml"),
        "[validation]\nmin_placeholder_length = 20\n",
    )
    .unwrap();
    let path = write_template(temp.path(), "fn.tron", "@[function_name]@   \n");

    tronlab()
        .current_dir(temp.path())
        .args(["validate", "--min-length", "3", "--trailing-whitespace"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("shorter than minimum").not())
        .stdout(predicate::str::contains("Trailing whitespace detected"));
}

#[test]
fn test_validate_no_validation() {
    let temp = temp_dir_in_workspace();
    let path = write_template(temp.path(), "bad.tron", fixtures::MALFORMED_TEMPLATE);

    tronlab()
        .current_dir(temp.path())
        .args(["validate", "--strict", "--no-validation"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No problems found"));
}

#[test]
fn test_validate_explicit_config() {
    let temp = temp_dir_in_workspace();
    let config = temp.path().join("custom.toml");
    std::fs::write(&config, "[validation]\nenabled = false\n").unwrap();
    let path = write_template(temp.path(), "bad.tron", "@[]@\n");

    tronlab()
        .current_dir(temp.path())
        .args(["validate", "--strict", "--config"])
        .arg(&config)
        .arg(&path)
        .assert()
        .success();
}

#[test]
fn test_validate_invalid_config() {
    let temp = temp_dir_in_workspace();
    std::fs::write(temp.path().join("tron.toml"), "[validation\n").unwrap();
    let path = write_template(temp.path(), "a.tron", "@[name]@\n");

    tronlab()
        .current_dir(temp.path())
        .arg("validate")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("CONFIG_INVALID"));
}

#[test]
fn test_validate_missing_file() {
    let temp = temp_dir_in_workspace();

    tronlab()
        .current_dir(temp.path())
        .args(["validate", "missing.tron"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("DOCUMENT_READ_ERROR"));
}

#[test]
fn test_validate_non_utf8_is_clean() {
    let temp = temp_dir_in_workspace();
    let path = temp.path().join("binary.tron");
    std::fs::write(&path, [0x40, 0x5b, 0xff, 0x5d, 0x40]).unwrap();

    tronlab()
        .current_dir(temp.path())
        .args(["validate", "--strict"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No problems found"));
}
