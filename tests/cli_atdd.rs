#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

// Each test gets its own HOME so a developer's global config cannot leak in.
fn later(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("later").expect("binary should compile");
    cmd.env("HOME", home.path()).env_remove("LATER_LOG");
    cmd
}

#[test]
fn submit_requires_a_selection() {
    let home = TempDir::new().expect("temp dir should be created");
    later(&home)
        .arg("submit")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("select at least one"));
}

#[test]
fn submit_updates_probabilities_and_swaps_video() {
    let home = TempDir::new().expect("temp dir should be created");
    let output = later(&home)
        .args(["--quiet", "submit", "--todo", "1", "--routine", "2"])
        .args(["--format", "json", "--seed", "7"])
        .output()
        .expect("submit should run");
    assert_eq!(output.status.code(), Some(0));

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be json");
    // high (5) then medium (3)
    assert_eq!(value["positive"][0]["probability"], 83);
    assert_eq!(value["negative"][0]["probability"], 17);
    assert_eq!(value["todos"][0]["completed"], true);
    assert_eq!(value["routines"][1]["streak"], 9);
    assert_eq!(value["submission"]["applied"].as_array().map(Vec::len), Some(2));
    let video = value["video"].as_str().expect("video should be a string");
    assert!(video.starts_with("/hero-video.mp4?t="));
}

#[test]
fn submit_prints_progress_until_complete() {
    let home = TempDir::new().expect("temp dir should be created");
    later(&home)
        .args(["submit", "--todo", "2", "--seed", "1"])
        .assert()
        .code(0)
        .stderr(predicate::str::contains("recalculating your future: 100%"))
        .stderr(predicate::str::contains("recalculation complete"))
        .stdout(predicate::str::contains("- completed todo 2 (high)"));
}

#[test]
fn submit_warns_when_items_were_already_done() {
    let home = TempDir::new().expect("temp dir should be created");
    later(&home)
        .args(["--quiet", "submit", "--todo", "3"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("skipped todo 3"));
}

#[test]
fn submit_rejects_unknown_routine() {
    let home = TempDir::new().expect("temp dir should be created");
    later(&home)
        .args(["submit", "--routine", "42"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown routine id: 42"));
}

#[test]
fn submit_rejects_negative_interval_in_config() {
    let home = TempDir::new().expect("temp dir should be created");
    let root = TempDir::new().expect("temp dir should be created");
    fs::write(
        root.path().join("later.toml"),
        r#"
[recalculation]
tick_interval_ms = -200
"#,
    )
    .expect("repo config should write");

    later(&home)
        .arg("--root")
        .arg(root.path())
        .args(["submit", "--todo", "1"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid configuration"));
}

#[test]
fn add_todo_rejects_unknown_impact() {
    let home = TempDir::new().expect("temp dir should be created");
    later(&home)
        .args(["add-todo", "Stretch", "--impact", "urgent"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown impact level"));
}

#[test]
fn add_todo_appends_to_dashboard() {
    let home = TempDir::new().expect("temp dir should be created");
    later(&home)
        .args(["add-todo", "Stretch for ten minutes", "--impact", "low"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("- [ ] 6: Stretch for ten minutes (low)"))
        .stdout(predicate::str::contains("tasks completed: 1/6"));
}

#[test]
fn intro_walks_through_phases() {
    let home = TempDir::new().expect("temp dir should be created");
    later(&home)
        .args(["intro", "--seed", "3"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Calculating Your Future"))
        .stdout(predicate::str::contains("100% complete"))
        .stdout(predicate::str::contains("30 Days Later"))
        .stdout(predicate::str::contains("Welcome to your future."));
}

#[test]
fn onboard_requires_name() {
    let home = TempDir::new().expect("temp dir should be created");
    later(&home)
        .args(["onboard", "--face", "me.png"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("a name is required"));
}

#[test]
fn onboard_requires_face_image() {
    let home = TempDir::new().expect("temp dir should be created");
    later(&home)
        .args(["onboard", "--name", "Sam"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("a face image is required"));
}

#[test]
fn onboard_prints_profile_and_greeting() {
    let home = TempDir::new().expect("temp dir should be created");
    later(&home)
        .args(["onboard", "--name", "Sam", "--google", "--face", "me.png"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("google: connected"))
        .stdout(predicate::str::contains("Welcome back, Sam"));
}
