//! Integration tests for the save, show, and list commands

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_save_creates_snapshot() {
    let env = TestEnv::new();
    env.create_save_dir("skyrim");
    env.register("Skyrim", "skyrim", None);

    env.cmd()
        .args(["save", "Skyrim"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved snapshot"))
        .stdout(predicate::str::contains("Archived: 2 files"));

    let files = env.snapshot_files("skyrim");
    assert_eq!(files.len(), 1);
    assert!(files[0].starts_with("skyrim_"));
    assert!(files[0].ends_with(".zip"));
}

#[test]
fn test_save_by_alias_with_tag() {
    let env = TestEnv::new();
    env.create_save_dir("skyrim");
    env.register("Skyrim", "skyrim", Some("sky"));

    env.cmd()
        .args(["save", "sky", "--tag", "boss-fight"])
        .assert()
        .success()
        .stdout(predicate::str::contains("boss-fight"));

    let files = env.snapshot_files("skyrim");
    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("_boss-fight.zip"));
}

#[test]
fn test_save_invalid_tag_fails() {
    let env = TestEnv::new();
    env.create_save_dir("skyrim");
    env.register("Skyrim", "skyrim", None);

    env.cmd()
        .args(["save", "Skyrim", "--tag", "a/b"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid snapshot tag"));

    assert!(env.snapshot_files("skyrim").is_empty());
}

#[test]
fn test_save_empty_dir() {
    let env = TestEnv::new();
    let dir = env.temp.path().join("saves/minimal");
    std::fs::create_dir_all(&dir).unwrap();
    env.register("Minimal", "minimal", None);

    env.cmd()
        .args(["save", "Minimal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Archived: 0 files"));

    assert_eq!(env.snapshot_files("minimal").len(), 1);
}

#[test]
fn test_save_missing_save_dir_fails() {
    let env = TestEnv::new();
    env.create_save_dir("skyrim");
    env.register("Skyrim", "skyrim", None);

    // The directory disappears after registration
    std::fs::remove_dir_all(env.temp.path().join("saves/skyrim")).unwrap();

    env.cmd()
        .args(["save", "Skyrim"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Save directory does not exist"));
}

#[test]
fn test_show_lists_snapshots_newest_first() {
    let env = TestEnv::new();
    env.create_save_dir("skyrim");
    env.register("Skyrim", "skyrim", None);

    env.cmd().args(["save", "Skyrim"]).assert().success();

    // Plant older snapshots alongside the real one
    let backup_dir = env.backup_dir("skyrim");
    std::fs::write(
        backup_dir.join("skyrim_2020-01-01_00-00-00.zip"),
        "old archive",
    )
    .unwrap();
    std::fs::write(
        backup_dir.join("skyrim_2020-06-15_12-00-00_midyear.zip"),
        "tagged archive",
    )
    .unwrap();
    // Foreign files are ignored
    std::fs::write(backup_dir.join("notes.txt"), "not a snapshot").unwrap();
    std::fs::write(backup_dir.join("fallout4_2020-01-01_00-00-00.zip"), "other").unwrap();

    let output = env
        .cmd()
        .args(["show", "Skyrim"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Snapshots for Skyrim (3)"))
        .stdout(predicate::str::contains("midyear"))
        .get_output()
        .stdout
        .clone();

    // Oldest timestamp appears after the midyear one
    let stdout = String::from_utf8_lossy(&output);
    let oldest = stdout.find("2020-01-01_00-00-00").unwrap();
    let midyear = stdout.find("2020-06-15_12-00-00").unwrap();
    assert!(midyear < oldest);
}

#[test]
fn test_show_detailed_reads_manifest() {
    let env = TestEnv::new();
    env.create_save_dir("skyrim");
    env.register("Skyrim", "skyrim", None);

    env.cmd().args(["save", "Skyrim"]).assert().success();

    env.cmd()
        .args(["show", "Skyrim", "--detailed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contents: 2 files"))
        .stdout(predicate::str::contains("Created by: quicksave"));
}

#[test]
fn test_show_detailed_tolerates_foreign_archive() {
    let env = TestEnv::new();
    env.create_save_dir("skyrim");
    env.register("Skyrim", "skyrim", None);

    let backup_dir = env.backup_dir("skyrim");
    std::fs::create_dir_all(&backup_dir).unwrap();
    std::fs::write(backup_dir.join("skyrim_2020-01-01_00-00-00.zip"), "not a zip").unwrap();

    env.cmd()
        .args(["show", "Skyrim", "--detailed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("unreadable archive"));
}

#[test]
fn test_list_detailed_shows_latest() {
    let env = TestEnv::new();
    env.create_save_dir("skyrim");
    env.register("Skyrim", "skyrim", None);

    env.cmd()
        .args(["save", "Skyrim", "--tag", "latest-run"])
        .assert()
        .success();

    env.cmd()
        .args(["list", "--detailed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Snapshots: 1"))
        .stdout(predicate::str::contains("Latest:"))
        .stdout(predicate::str::contains("latest-run"));
}

#[test]
fn test_exclude_patterns_skip_files() {
    let env = TestEnv::new();
    let save_dir = env.create_save_dir("skyrim");
    env.write_save_file("skyrim", "cache.tmp", "scratch");
    env.write_save_file("skyrim", "logs/session.log", "log");

    let backup_dir = env.backup_dir("skyrim");
    env.write_config(&format!(
        "version: \"0.1.0\"\ngames:\n  Skyrim:\n    save_dir: {}\n    backup_dir: {}\n    exclude:\n      - \"*.tmp\"\n      - \"logs/**\"\n",
        save_dir.display(),
        backup_dir.display()
    ));

    env.cmd()
        .args(["save", "Skyrim"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Archived: 2 files"));
}
