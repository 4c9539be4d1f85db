//! Config command behavior.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

fn readapt(home: &std::path::Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("readapt");
    cmd.env("READAPT_HOME", home);
    cmd.env_remove("READAPT_BASE_URL");
    cmd
}

#[test]
fn test_config_path_respects_home() {
    let home = tempdir().unwrap();
    readapt(home.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(home.path().to_str().unwrap()))
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_init_creates_template() {
    let home = tempdir().unwrap();
    readapt(home.path())
        .args(["config", "init"])
        .assert()
        .success();

    let contents = std::fs::read_to_string(home.path().join("config.toml")).unwrap();
    assert!(contents.contains("# ReadApt Configuration"));

    // A second init refuses to overwrite.
    readapt(home.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_config_show_prints_resolved_values() {
    let home = tempdir().unwrap();
    readapt(home.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("timeout_secs = 10"))
        .stdout(predicate::str::contains("voice = \"default\""));
}

#[test]
fn test_config_set_url_roundtrip() {
    let home = tempdir().unwrap();
    readapt(home.path())
        .args(["config", "set-url", "https://readapt.example.com/api"])
        .assert()
        .success();

    readapt(home.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://readapt.example.com/api"));
}
