//! Profile resolution from the assessment store.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

fn readapt(home: &std::path::Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("readapt");
    cmd.env("READAPT_HOME", home);
    cmd
}

#[test]
fn test_profile_without_store_is_none() {
    let home = tempdir().unwrap();
    readapt(home.path())
        .arg("profile")
        .assert()
        .success()
        .stdout(predicate::str::contains("profile: none"));
}

#[test]
fn test_profile_reads_default_store_location() {
    let home = tempdir().unwrap();
    std::fs::write(
        home.path().join("assessment.json"),
        r#"{"dyslexia": {"severity": "severe", "score": 0.93}}"#,
    )
    .unwrap();

    readapt(home.path())
        .arg("profile")
        .assert()
        .success()
        .stdout(predicate::str::contains("profile: dyslexia (severe)"))
        .stdout(predicate::str::contains("OpenDyslexic"));
}

#[test]
fn test_profile_notes_multiple_conditions() {
    let home = tempdir().unwrap();
    let store = home.path().join("results.json");
    std::fs::write(
        &store,
        r#"{
            "adhd": {"type": "combined", "score": 0.7},
            "vision": {"level": "mild", "power": 0.5}
        }"#,
    )
    .unwrap();

    readapt(home.path())
        .args(["profile", "--assessment"])
        .arg(&store)
        .assert()
        .success()
        .stdout(predicate::str::contains("profile: adhd (combined)"))
        .stdout(predicate::str::contains("multiple conditions"));
}

#[test]
fn test_profile_unknown_values_resolve_to_none() {
    let home = tempdir().unwrap();
    let store = home.path().join("results.json");
    std::fs::write(&store, r#"{"vision": {"level": "cloudy"}}"#).unwrap();

    readapt(home.path())
        .args(["profile", "--assessment"])
        .arg(&store)
        .assert()
        .success()
        .stdout(predicate::str::contains("profile: none"));
}
