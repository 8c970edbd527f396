#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Runs the binary against an empty config directory so the host config never leaks in.
fn multitap_cmd(config_dir: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("multitap"));
    cmd.env("MULTITAP_CONFIG_DIR", config_dir.path())
        .env_remove("MULTITAP_LOG");
    cmd
}

#[test]
fn test_decode_arguments() {
    let temp = TempDir::new().unwrap();

    multitap_cmd(&temp)
        .args(["decode", "33#", "227*#", "4433555 555666#", "8 88777444 666*664#"])
        .assert()
        .success()
        .stdout("E\nB\nHELLO\nTURING\n");
}

#[test]
fn test_decode_reads_stdin_lines() {
    let temp = TempDir::new().unwrap();

    multitap_cmd(&temp)
        .arg("decode")
        .write_stdin("4433555 555666#\n\n9666777555 3#\n")
        .assert()
        .success()
        .stdout("HELLO\nWORLD\n");
}

#[test]
fn test_decode_failure_keeps_batch_going() {
    let temp = TempDir::new().unwrap();

    multitap_cmd(&temp)
        .args(["decode", "22234", "2#"])
        .assert()
        .failure()
        .code(1)
        .stdout("A\n")
        .stderr(predicate::str::contains("send character '#'"));
}

#[test]
fn test_decode_strict_flag() {
    let temp = TempDir::new().unwrap();

    multitap_cmd(&temp)
        .args(["decode", "2x#"])
        .assert()
        .success()
        .stdout("A\n");

    multitap_cmd(&temp)
        .args(["decode", "--strict", "2x#"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unexpected symbol 'x' at position 1"));
}

#[test]
fn test_decode_json_output() {
    let temp = TempDir::new().unwrap();

    let output = multitap_cmd(&temp)
        .args(["decode", "--output", "json", "33#", "3"])
        .assert()
        .failure()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed[0]["input"], "33#");
    assert_eq!(parsed[0]["output"], "E");
    assert!(parsed[1]["error"].as_str().unwrap().contains("'#'"));
}

#[test]
fn test_config_sets_defaults() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("config.json"),
        r#"{"strict": true, "output": "json"}"#,
    )
    .unwrap();

    multitap_cmd(&temp)
        .args(["decode", "2x#"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"error\""));

    // Flags win over config
    multitap_cmd(&temp)
        .args(["decode", "-o", "text", "22#"])
        .assert()
        .success()
        .stdout("B\n");
}

#[test]
fn test_unreadable_config_falls_back_to_defaults() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("config.json"), "not json").unwrap();

    multitap_cmd(&temp)
        .args(["decode", "2#"])
        .assert()
        .success()
        .stdout("A\n");
}

#[test]
fn test_encode() {
    let temp = TempDir::new().unwrap();

    multitap_cmd(&temp)
        .args(["encode", "hello", "sos"])
        .assert()
        .success()
        .stdout("4433555 555666#\n77776667777#\n");

    multitap_cmd(&temp)
        .args(["encode", "hi!"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("not on the keypad"));
}

#[test]
fn test_keypad() {
    let temp = TempDir::new().unwrap();

    multitap_cmd(&temp)
        .arg("keypad")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1  & ' (\n"))
        .stdout(predicate::str::contains("7  p q r s\n"))
        .stdout(predicate::str::ends_with("0  (space)\n"));
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let temp = TempDir::new().unwrap();

    multitap_cmd(&temp)
        .args(["-v", "decode", "33#"])
        .assert()
        .success()
        .stdout("E\n")
        .stderr(predicate::str::contains("decoded keypad input"));
}
