//! Registered game entry data structure

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A registered game in quicksave.yaml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameEntry {
    /// Directory the game writes its saves to
    pub save_dir: PathBuf,

    /// Directory snapshots are stored in
    pub backup_dir: PathBuf,

    /// Alternative names accepted wherever a game name is expected
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,

    /// Glob patterns skipped when archiving (matched against the
    /// forward-slash relative path inside the save directory)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,
}

impl GameEntry {
    /// Create a new game entry
    pub fn new(save_dir: impl Into<PathBuf>, backup_dir: impl Into<PathBuf>) -> Self {
        Self {
            save_dir: save_dir.into(),
            backup_dir: backup_dir.into(),
            aliases: Vec::new(),
            exclude: Vec::new(),
        }
    }

    /// Check whether this game answers to the given alias
    pub fn has_alias(&self, candidate: &str) -> bool {
        self.aliases.iter().any(|a| a == candidate)
    }
}
