//! CLI integration tests using the REAL quicksave binary

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_help_output() {
    let env = TestEnv::new();
    env.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("timestamped zip snapshots"))
        .stdout(predicate::str::contains("register"))
        .stdout(predicate::str::contains("save"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("restore"))
        .stdout(predicate::str::contains("prune"))
        .stdout(predicate::str::contains("sync"));
}

#[test]
fn test_version_subcommand() {
    let env = TestEnv::new();
    env.cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("quicksave"))
        .stdout(predicate::str::contains("Build info"));
}

#[test]
fn test_version_flag() {
    let env = TestEnv::new();
    env.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("quicksave"));
}

#[test]
fn test_unknown_command_fails() {
    let env = TestEnv::new();
    env.cmd().arg("frobnicate").assert().failure();
}

#[test]
fn test_list_empty_config() {
    let env = TestEnv::new();
    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No games registered"));
}

#[test]
fn test_list_creates_default_config() {
    let env = TestEnv::new();
    env.cmd().arg("list").assert().success();
    assert!(env.config_dir.join("quicksave.yaml").exists());
}

#[test]
fn test_save_unknown_game_fails() {
    let env = TestEnv::new();
    env.cmd()
        .args(["save", "nonexistent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Game not found"));
}

#[test]
fn test_show_unknown_game_fails() {
    let env = TestEnv::new();
    env.cmd()
        .args(["show", "nonexistent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Game not found"));
}

#[test]
fn test_corrupted_config_warns_and_continues() {
    let env = TestEnv::new();
    env.write_config("games: [unclosed");

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No games registered"))
        .stderr(predicate::str::contains("Warning"));
}

#[test]
fn test_completions_bash() {
    let env = TestEnv::new();
    env.cmd()
        .args(["completions", "--shell", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("quicksave"));
}

#[test]
fn test_completions_unknown_shell_fails() {
    let env = TestEnv::new();
    env.cmd()
        .args(["completions", "--shell", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown shell"));
}
