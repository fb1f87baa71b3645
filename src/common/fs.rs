//! Common file system operations with unified error handling

use std::fs;
use std::path::Path;

use crate::error::{QuicksaveError, Result};

/// Remove everything inside a directory without removing the directory itself
///
/// The directory may be a mount point or otherwise special; only its contents
/// are replaced on restore.
pub fn clear_dir_contents(dir: &Path) -> Result<()> {
    for entry in fs::read_dir(dir).map_err(|e| QuicksaveError::FileReadFailed {
        path: dir.display().to_string(),
        reason: e.to_string(),
    })? {
        let entry = entry.map_err(|e| QuicksaveError::FileReadFailed {
            path: dir.display().to_string(),
            reason: e.to_string(),
        })?;

        let path = entry.path();
        let removed = if path.is_dir() {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        };

        removed.map_err(|e| QuicksaveError::FileWriteFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
    }

    Ok(())
}

/// Check whether a directory exists and contains at least one entry
pub fn dir_has_entries(dir: &Path) -> bool {
    fs::read_dir(dir)
        .map(|mut entries| entries.next().is_some())
        .unwrap_or(false)
}
