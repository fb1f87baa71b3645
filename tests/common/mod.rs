//! Common test utilities for Quicksave integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// An isolated environment for integration tests: its own config directory,
/// save directories, and backup directories under one temp root
#[allow(dead_code)]
pub struct TestEnv {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Configuration directory passed via QUICKSAVE_CONFIG_DIR
    pub config_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let config_dir = temp.path().join("config");
        Self { temp, config_dir }
    }

    /// Command with the config directory pinned to this environment
    // Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
    #[allow(deprecated)]
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("quicksave").expect("Failed to find quicksave binary");
        cmd.env("QUICKSAVE_CONFIG_DIR", &self.config_dir);
        cmd
    }

    /// Create a save directory with a couple of sample files
    pub fn create_save_dir(&self, name: &str) -> PathBuf {
        let dir = self.temp.path().join("saves").join(name);
        std::fs::create_dir_all(&dir).expect("Failed to create save directory");
        std::fs::write(dir.join("quicksave.ess"), format!("{} main save", name))
            .expect("Failed to write save file");
        std::fs::create_dir_all(dir.join("profiles")).expect("Failed to create profiles dir");
        std::fs::write(dir.join("profiles/hero.dat"), "profile data")
            .expect("Failed to write profile file");
        dir
    }

    /// Path a game's backups go to (created lazily by the tool)
    pub fn backup_dir(&self, name: &str) -> PathBuf {
        self.temp.path().join("backups").join(name)
    }

    /// Register a game with save/backup dirs under this environment
    pub fn register(&self, name: &str, dir_key: &str, alias: Option<&str>) {
        let save_dir = self.temp.path().join("saves").join(dir_key);
        let backup_dir = self.backup_dir(dir_key);

        let mut cmd = self.cmd();
        cmd.args(["register", "-n", name])
            .arg("-s")
            .arg(&save_dir)
            .arg("-b")
            .arg(&backup_dir);
        if let Some(alias) = alias {
            cmd.args(["-a", alias]);
        }
        cmd.assert().success();
    }

    /// Write quicksave.yaml directly
    pub fn write_config(&self, content: &str) {
        std::fs::create_dir_all(&self.config_dir).expect("Failed to create config directory");
        std::fs::write(self.config_dir.join("quicksave.yaml"), content)
            .expect("Failed to write config file");
    }

    /// Write a file inside a game's save directory
    pub fn write_save_file(&self, dir_key: &str, rel: &str, content: &str) {
        let path = self.temp.path().join("saves").join(dir_key).join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, content).expect("Failed to write save file");
    }

    /// Read a file from a game's save directory
    pub fn read_save_file(&self, dir_key: &str, rel: &str) -> String {
        let path = self.temp.path().join("saves").join(dir_key).join(rel);
        std::fs::read_to_string(&path).expect("Failed to read save file")
    }

    /// Snapshot archive file names for a game, unsorted
    pub fn snapshot_files(&self, dir_key: &str) -> Vec<String> {
        let backup_dir = self.backup_dir(dir_key);
        if !backup_dir.exists() {
            return Vec::new();
        }
        std::fs::read_dir(&backup_dir)
            .expect("Failed to read backup directory")
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().to_string())
            .filter(|n| n.ends_with(".zip"))
            .collect()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
