//! Snapshot manifest embedded in each archive
//!
//! The manifest records what was archived and per-file BLAKE3 hashes so a
//! restore can be verified. Archives created by other tools simply lack the
//! entry and restore without verification.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Manifest entry name at the archive root
pub const MANIFEST_FILE_NAME: &str = "quicksave.manifest.json";

/// Snapshot manifest (quicksave.manifest.json)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Registered game name
    pub game: String,

    /// Snapshot timestamp (same value as in the archive file name)
    pub created: String,

    /// Optional snapshot tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// quicksave version that wrote the archive
    pub tool_version: String,

    /// Archived files with sizes and content hashes
    #[serde(default)]
    pub files: Vec<ManifestFile>,
}

/// A single archived file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestFile {
    /// Forward-slash path relative to the save directory
    pub path: String,

    /// Size in bytes
    pub size: u64,

    /// BLAKE3 content hash (`blake3:`-prefixed hex)
    pub hash: String,
}

impl Manifest {
    /// Create an empty manifest for a snapshot being written
    pub fn new(game: impl Into<String>, created: impl Into<String>, tag: Option<String>) -> Self {
        Self {
            game: game.into(),
            created: created.into(),
            tag,
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            files: Vec::new(),
        }
    }

    /// Total size of all archived files
    pub fn total_size(&self) -> u64 {
        self.files.iter().map(|f| f.size).sum()
    }

    /// Parse a manifest from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let manifest: Self = serde_json::from_str(json)?;
        Ok(manifest)
    }

    /// Serialize the manifest to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string_pretty(self)?;
        Ok(json)
    }
}
