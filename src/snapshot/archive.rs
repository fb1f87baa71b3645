//! Zip archive creation and extraction for snapshots

use std::fs::{self, File};
use std::io::{self, Read, Seek, Write};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

use crate::error::{QuicksaveError, Result};
use crate::hash;
use crate::progress::ArchiveProgress;

use super::manifest::{MANIFEST_FILE_NAME, Manifest, ManifestFile};

/// Result of creating an archive
#[derive(Debug, Clone, Copy)]
pub struct ArchiveSummary {
    /// Number of files archived (manifest excluded)
    pub files: usize,

    /// Total uncompressed bytes archived
    pub bytes: u64,
}

/// Result of extracting an archive
#[derive(Debug, Clone, Copy)]
pub struct RestoreSummary {
    /// Number of files written
    pub files: usize,

    /// Total bytes written
    pub bytes: u64,

    /// Whether extracted files were verified against a manifest
    pub verified: bool,
}

struct ArchiveEntry {
    path: PathBuf,
    rel: String,
    is_dir: bool,
}

/// Validate exclude patterns before any archive work starts
pub fn validate_excludes(patterns: &[String]) -> Result<()> {
    for pattern in patterns {
        Glob::new(pattern).map_err(|e| QuicksaveError::InvalidExcludePattern {
            pattern: pattern.clone(),
            reason: e.to_string(),
        })?;
    }
    Ok(())
}

/// Create a snapshot archive of `source_dir` at `dest_path`
///
/// Walks the save directory recursively, skipping paths matched by the
/// exclude globs, and finishes by embedding a manifest with per-file BLAKE3
/// hashes. An empty save directory produces an archive holding only the
/// manifest.
pub fn create_archive(
    source_dir: &Path,
    dest_path: &Path,
    game: &str,
    created: &str,
    tag: Option<&str>,
    exclude_patterns: &[String],
    show_progress: bool,
) -> Result<ArchiveSummary> {
    validate_excludes(exclude_patterns)?;
    let entries = collect_entries(source_dir, exclude_patterns)?;
    let file_total = entries.iter().filter(|e| !e.is_dir).count();

    let progress = show_progress.then(|| ArchiveProgress::new(file_total as u64));

    let file = File::create(dest_path).map_err(|e| QuicksaveError::ArchiveCreateFailed {
        path: dest_path.display().to_string(),
        reason: e.to_string(),
    })?;

    let mut zip = ZipWriter::new(file);
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut manifest = Manifest::new(game, created, tag.map(ToString::to_string));

    for entry in &entries {
        if entry.is_dir {
            zip.add_directory(&entry.rel, options)?;
            continue;
        }

        zip.start_file(&entry.rel, options)?;
        let mut source = File::open(&entry.path).map_err(|e| QuicksaveError::FileReadFailed {
            path: entry.path.display().to_string(),
            reason: e.to_string(),
        })?;
        let size = io::copy(&mut source, &mut zip).map_err(|e| {
            QuicksaveError::ArchiveCreateFailed {
                path: dest_path.display().to_string(),
                reason: e.to_string(),
            }
        })?;

        manifest.files.push(ManifestFile {
            path: entry.rel.clone(),
            size,
            hash: hash::hash_file(&entry.path)?,
        });

        if let Some(ref progress) = progress {
            progress.update_file(&entry.rel);
        }
    }

    zip.start_file(MANIFEST_FILE_NAME, options)?;
    zip.write_all(manifest.to_json()?.as_bytes())
        .map_err(|e| QuicksaveError::ArchiveCreateFailed {
            path: dest_path.display().to_string(),
            reason: e.to_string(),
        })?;
    zip.finish()?;

    if let Some(ref progress) = progress {
        progress.finish();
    }

    Ok(ArchiveSummary {
        files: file_total,
        bytes: manifest.total_size(),
    })
}

/// Extract a snapshot archive into `dest_dir`
///
/// The embedded manifest entry is skipped and, when present, used afterwards
/// to verify every extracted file's hash. Entries that would escape the
/// destination are rejected.
pub fn extract_archive(
    archive_path: &Path,
    dest_dir: &Path,
    show_progress: bool,
) -> Result<RestoreSummary> {
    let file = File::open(archive_path).map_err(|e| QuicksaveError::ArchiveReadFailed {
        path: archive_path.display().to_string(),
        reason: e.to_string(),
    })?;
    let mut archive = ZipArchive::new(file).map_err(|e| QuicksaveError::ArchiveReadFailed {
        path: archive_path.display().to_string(),
        reason: e.to_string(),
    })?;

    let manifest = read_manifest_from(&mut archive)?;
    let progress = show_progress.then(|| ArchiveProgress::new(archive.len() as u64));

    let mut files = 0usize;
    let mut bytes = 0u64;

    for i in 0..archive.len() {
        let mut entry = archive.by_index(i)?;

        if entry.name() == MANIFEST_FILE_NAME {
            continue;
        }

        let Some(rel) = entry.enclosed_name().map(Path::to_path_buf) else {
            return Err(QuicksaveError::UnsafeArchiveEntry {
                entry: entry.name().to_string(),
            });
        };
        let dest = dest_dir.join(&rel);

        if entry.is_dir() {
            fs::create_dir_all(&dest).map_err(|e| QuicksaveError::FileWriteFailed {
                path: dest.display().to_string(),
                reason: e.to_string(),
            })?;
            continue;
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(|e| QuicksaveError::FileWriteFailed {
                path: parent.display().to_string(),
                reason: e.to_string(),
            })?;
        }

        let mut out = File::create(&dest).map_err(|e| QuicksaveError::FileWriteFailed {
            path: dest.display().to_string(),
            reason: e.to_string(),
        })?;
        bytes += io::copy(&mut entry, &mut out).map_err(|e| {
            QuicksaveError::ArchiveExtractFailed {
                path: archive_path.display().to_string(),
                reason: e.to_string(),
            }
        })?;
        files += 1;

        if let Some(ref progress) = progress {
            progress.update_file(&rel.to_string_lossy());
        }
    }

    if let Some(ref progress) = progress {
        progress.finish();
    }

    if let Some(ref manifest) = manifest {
        verify_extracted(manifest, dest_dir)?;
    }

    Ok(RestoreSummary {
        files,
        bytes,
        verified: manifest.is_some(),
    })
}

/// Read the embedded manifest of an archive, if any
pub fn read_manifest(archive_path: &Path) -> Result<Option<Manifest>> {
    let file = File::open(archive_path).map_err(|e| QuicksaveError::ArchiveReadFailed {
        path: archive_path.display().to_string(),
        reason: e.to_string(),
    })?;
    let mut archive = ZipArchive::new(file).map_err(|e| QuicksaveError::ArchiveReadFailed {
        path: archive_path.display().to_string(),
        reason: e.to_string(),
    })?;

    read_manifest_from(&mut archive)
}

fn read_manifest_from<R: Read + Seek>(archive: &mut ZipArchive<R>) -> Result<Option<Manifest>> {
    let mut entry = match archive.by_name(MANIFEST_FILE_NAME) {
        Ok(entry) => entry,
        Err(zip::result::ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let mut json = String::new();
    entry
        .read_to_string(&mut json)
        .map_err(|e| QuicksaveError::ArchiveOperationFailed {
            message: format!("failed to read manifest: {}", e),
        })?;

    Ok(Some(Manifest::from_json(&json)?))
}

fn verify_extracted(manifest: &Manifest, dest_dir: &Path) -> Result<()> {
    for file in &manifest.files {
        let path: PathBuf = dest_dir.join(file.path.split('/').collect::<PathBuf>());
        let actual = hash::hash_file(&path)?;
        if !hash::verify_hash(&file.hash, &actual) {
            return Err(QuicksaveError::ChecksumMismatch {
                path: file.path.clone(),
            });
        }
    }
    Ok(())
}

fn collect_entries(source_dir: &Path, exclude_patterns: &[String]) -> Result<Vec<ArchiveEntry>> {
    let mut entries = Vec::new();

    let walker = WalkDir::new(source_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            if e.depth() == 0 {
                return true;
            }
            match rel_path_str(e.path(), source_dir) {
                Some(rel) => !is_excluded(&rel, exclude_patterns),
                None => true,
            }
        });

    for entry in walker {
        let entry = entry.map_err(|e| QuicksaveError::FileReadFailed {
            path: source_dir.display().to_string(),
            reason: e.to_string(),
        })?;

        if entry.depth() == 0 {
            continue;
        }

        let rel = match rel_path_str(entry.path(), source_dir) {
            Some(rel) => rel,
            None => continue,
        };

        let is_dir = entry.file_type().is_dir();
        entries.push(ArchiveEntry {
            path: entry.into_path(),
            rel,
            is_dir,
        });
    }

    Ok(entries)
}

/// Path relative to `base` with forward-slash separators
fn rel_path_str(path: &Path, base: &Path) -> Option<String> {
    let rel = path.strip_prefix(base).ok()?;
    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().to_string())
        .collect();
    if parts.is_empty() {
        return None;
    }
    Some(parts.join("/"))
}

/// Check a relative path against the exclude patterns
///
/// Patterns that fail to compile never match; `validate_excludes` has
/// already rejected them on the save path.
fn is_excluded(rel: &str, exclude_patterns: &[String]) -> bool {
    let candidate = CandidatePath::from(rel);
    exclude_patterns.iter().any(|pattern| {
        Glob::new(pattern)
            .map(|glob| glob.matched(&candidate).is_some())
            .unwrap_or(false)
    })
}
