//! Path helpers shared across commands

use std::path::{Path, PathBuf};

use crate::error::{QuicksaveError, Result};

/// Canonicalize a path that must already exist
///
/// Uses `dunce` so Windows paths come back without the `\\?\` prefix.
pub fn canonicalize_existing(path: &Path) -> Result<PathBuf> {
    dunce::canonicalize(path).map_err(|e| QuicksaveError::SaveDirMissing {
        path: format!("{} ({})", path.display(), e),
    })
}

/// Normalize a path for display and storage without requiring it to exist
///
/// Relative paths are resolved against the current directory so registrations
/// survive later invocations from elsewhere.
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }

    let cwd = std::env::current_dir().map_err(|e| QuicksaveError::IoError {
        message: format!("Failed to get current directory: {}", e),
    })?;
    Ok(cwd.join(path))
}

/// File name of a directory as a UTF-8 string
pub fn dir_name(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(ToString::to_string)
}
