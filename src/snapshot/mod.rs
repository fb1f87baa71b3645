//! Snapshot naming, discovery, and ordering
//!
//! A snapshot is a zip archive in the game's backup directory named
//! `{source_name}_{timestamp}.zip` or `{source_name}_{timestamp}_{tag}.zip`,
//! where `source_name` is the file name of the save directory and the
//! timestamp is `YYYY-MM-DD_HH-MM-SS` in local time.

pub mod archive;
pub mod manifest;

use std::fs;
use std::path::{Path, PathBuf};

use time::format_description::FormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

use crate::error::{QuicksaveError, Result};

/// Snapshot archive file extension
pub const SNAPSHOT_EXT: &str = "zip";

/// Timestamp layout used in snapshot file names
pub const TIMESTAMP_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day]_[hour]-[minute]-[second]");

/// A snapshot archive found in a backup directory
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Archive file name (e.g. `skyrim_2025-06-01_12-30-45_boss-fight.zip`)
    pub file_name: String,

    /// Timestamp component (e.g. `2025-06-01_12-30-45`)
    pub timestamp: String,

    /// Optional tag component
    pub tag: Option<String>,

    /// Full path to the archive
    pub path: PathBuf,

    /// Archive size in bytes
    pub size: u64,
}

impl Snapshot {
    /// Human-facing name: timestamp with the tag appended when present
    pub fn display_name(&self) -> String {
        match &self.tag {
            Some(tag) => format!("{} ({})", self.timestamp, tag),
            None => self.timestamp.clone(),
        }
    }
}

/// Current timestamp in snapshot format (local time, UTC fallback)
pub fn timestamp_now() -> Result<String> {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    now.format(&TIMESTAMP_FORMAT)
        .map_err(|e| QuicksaveError::IoError {
            message: format!("Failed to format timestamp: {}", e),
        })
}

/// File name of the save directory, used as the snapshot name prefix
pub fn source_name(save_dir: &Path) -> Result<String> {
    crate::path_utils::dir_name(save_dir).ok_or_else(|| QuicksaveError::SaveDirMissing {
        path: save_dir.display().to_string(),
    })
}

/// Validate a user-supplied snapshot tag
///
/// Tags become part of a file name, so path separators and leading dots are
/// rejected. Underscores are allowed and survive a parse round trip.
pub fn validate_tag(tag: &str) -> Result<()> {
    let invalid = tag.is_empty()
        || tag.starts_with('.')
        || tag.chars().any(|c| c == '/' || c == '\\' || c == '\0');

    if invalid {
        return Err(QuicksaveError::InvalidTag {
            tag: tag.to_string(),
        });
    }
    Ok(())
}

/// Build a snapshot archive file name
pub fn file_name_for(source_name: &str, timestamp: &str, tag: Option<&str>) -> String {
    match tag {
        Some(tag) => format!("{}_{}_{}.{}", source_name, timestamp, tag, SNAPSHOT_EXT),
        None => format!("{}_{}.{}", source_name, timestamp, SNAPSHOT_EXT),
    }
}

/// Parse timestamp and tag out of a snapshot file name
///
/// Returns `None` for files that do not belong to the given source: wrong
/// prefix, wrong extension, or a timestamp that does not parse. The
/// timestamp is the first two `_`-separated parts after the prefix; anything
/// after it is the tag (which may itself contain underscores).
pub fn parse_file_name(file_name: &str, source_name: &str) -> Option<(String, Option<String>)> {
    let prefix = format!("{}_", source_name);
    let suffix = format!(".{}", SNAPSHOT_EXT);

    let name_part = file_name.strip_prefix(&prefix)?.strip_suffix(&suffix)?;

    let parts: Vec<&str> = name_part.split('_').collect();
    if parts.len() < 2 {
        return None;
    }

    let timestamp = format!("{}_{}", parts[0], parts[1]);
    PrimitiveDateTime::parse(&timestamp, &TIMESTAMP_FORMAT).ok()?;

    let tag = if parts.len() > 2 {
        Some(parts[2..].join("_"))
    } else {
        None
    };

    Some((timestamp, tag))
}

/// List all snapshots for a source in a backup directory, newest first
///
/// A missing backup directory yields an empty list (nothing has been saved
/// yet); foreign files are ignored.
pub fn list_snapshots(backup_dir: &Path, source_name: &str) -> Result<Vec<Snapshot>> {
    let mut snapshots = Vec::new();

    if !backup_dir.exists() {
        return Ok(snapshots);
    }

    for entry in fs::read_dir(backup_dir).map_err(|e| QuicksaveError::FileReadFailed {
        path: backup_dir.display().to_string(),
        reason: e.to_string(),
    })? {
        let entry = entry.map_err(|e| QuicksaveError::FileReadFailed {
            path: backup_dir.display().to_string(),
            reason: e.to_string(),
        })?;

        if !entry.path().is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().to_string();
        let Some((timestamp, tag)) = parse_file_name(&file_name, source_name) else {
            continue;
        };

        let size = entry.metadata().map(|m| m.len()).unwrap_or(0);

        snapshots.push(Snapshot {
            path: entry.path(),
            file_name,
            timestamp,
            tag,
            size,
        });
    }

    // Zero-padded timestamps sort correctly as strings; newest first
    snapshots.sort_by(|a, b| {
        b.timestamp
            .cmp(&a.timestamp)
            .then_with(|| b.file_name.cmp(&a.file_name))
    });

    Ok(snapshots)
}

/// Find a snapshot by file name, timestamp, or `timestamp_tag`
pub fn find_snapshot<'a>(snapshots: &'a [Snapshot], selector: &str) -> Option<&'a Snapshot> {
    snapshots.iter().find(|s| {
        if s.file_name == selector || s.timestamp == selector {
            return true;
        }
        s.tag
            .as_ref()
            .is_some_and(|tag| format!("{}_{}", s.timestamp, tag) == selector)
    })
}
