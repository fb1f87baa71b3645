//! Error types and handling for Quicksave
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Quicksave operations
#[derive(Error, Diagnostic, Debug)]
pub enum QuicksaveError {
    // Game registry errors
    #[error("Game not found: {name}")]
    #[diagnostic(
        code(quicksave::game::not_found),
        help("Run 'quicksave list' to see registered games and their aliases")
    )]
    GameNotFound { name: String },

    #[error("Game already registered: {name}")]
    #[diagnostic(
        code(quicksave::game::already_registered),
        help("Use --force to replace the existing registration")
    )]
    GameAlreadyRegistered { name: String },

    #[error("Invalid game name: {name}")]
    #[diagnostic(code(quicksave::game::invalid_name))]
    InvalidGameName { name: String, reason: String },

    #[error("Invalid alias: {alias}")]
    #[diagnostic(
        code(quicksave::game::invalid_alias),
        help("Aliases may not be empty or contain path separators")
    )]
    InvalidAlias { alias: String },

    #[error("Alias '{alias}' is already used by game '{game}'")]
    #[diagnostic(
        code(quicksave::game::alias_in_use),
        help("Aliases must be unique across all registered games")
    )]
    AliasInUse { alias: String, game: String },

    // Snapshot errors
    #[error("Save directory does not exist: {path}")]
    #[diagnostic(
        code(quicksave::snapshot::save_dir_missing),
        help("Check the registered save directory path, or re-register the game")
    )]
    SaveDirMissing { path: String },

    #[error("Failed to create backup directory: {path}")]
    #[diagnostic(code(quicksave::snapshot::backup_dir_failed))]
    BackupDirFailed { path: String, reason: String },

    #[error("No snapshots found for game: {game}")]
    #[diagnostic(
        code(quicksave::snapshot::none),
        help("Run 'quicksave save <game>' to create a snapshot first")
    )]
    NoSnapshots { game: String },

    #[error("Snapshot not found: {name}")]
    #[diagnostic(
        code(quicksave::snapshot::not_found),
        help("Run 'quicksave show <game>' to list available snapshots")
    )]
    SnapshotNotFound { name: String },

    #[error("Invalid snapshot tag: {tag}")]
    #[diagnostic(
        code(quicksave::snapshot::invalid_tag),
        help("Tags may not be empty or contain path separators")
    )]
    InvalidTag { tag: String },

    #[error("Invalid exclude pattern: {pattern}")]
    #[diagnostic(code(quicksave::snapshot::invalid_exclude))]
    InvalidExcludePattern { pattern: String, reason: String },

    // Archive errors
    #[error("Failed to create archive: {path}")]
    #[diagnostic(code(quicksave::archive::create_failed))]
    ArchiveCreateFailed { path: String, reason: String },

    #[error("Failed to read archive: {path}")]
    #[diagnostic(code(quicksave::archive::read_failed))]
    ArchiveReadFailed { path: String, reason: String },

    #[error("Failed to extract archive: {path}")]
    #[diagnostic(code(quicksave::archive::extract_failed))]
    ArchiveExtractFailed { path: String, reason: String },

    #[error("Archive entry escapes the destination directory: {entry}")]
    #[diagnostic(code(quicksave::archive::unsafe_entry))]
    UnsafeArchiveEntry { entry: String },

    #[error("Checksum mismatch for restored file: {path}")]
    #[diagnostic(
        code(quicksave::archive::checksum_mismatch),
        help("The archive may be corrupted. The pre-restore snapshot holds the previous state")
    )]
    ChecksumMismatch { path: String },

    #[error("Archive operation failed: {message}")]
    #[diagnostic(code(quicksave::archive::operation_failed))]
    ArchiveOperationFailed { message: String },

    // Configuration errors
    #[error("Could not determine a configuration directory")]
    #[diagnostic(
        code(quicksave::config::dir_unavailable),
        help("Set QUICKSAVE_CONFIG_DIR or pass --config-dir")
    )]
    ConfigDirUnavailable,

    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(quicksave::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Configuration already locked by another process")]
    #[diagnostic(
        code(quicksave::config::locked),
        help("Wait for the other quicksave invocation to finish")
    )]
    ConfigLocked,

    #[error("Failed to acquire configuration lock")]
    #[diagnostic(code(quicksave::config::lock_failed))]
    ConfigLockFailed { reason: String },

    // Remote errors
    #[error("No remote endpoint configured")]
    #[diagnostic(
        code(quicksave::remote::not_configured),
        help("Add a 'remote:' section with an 'endpoint' to quicksave.yaml")
    )]
    RemoteNotConfigured,

    #[error("Remote token environment variable '{env}' is not set")]
    #[diagnostic(
        code(quicksave::remote::token_missing),
        help("Export the token before running 'quicksave sync'")
    )]
    RemoteTokenMissing { env: String },

    #[error("Remote endpoint rejected the provided credentials")]
    #[diagnostic(
        code(quicksave::remote::auth_rejected),
        help("Confirm the token environment variable and its permissions")
    )]
    RemoteAuthRejected { endpoint: String },

    #[error("Failed to upload snapshot '{name}': {reason}")]
    #[diagnostic(code(quicksave::remote::upload_failed))]
    RemoteUploadFailed { name: String, reason: String },

    #[error("Remote request failed: {message}")]
    #[diagnostic(code(quicksave::remote::request_failed))]
    RemoteRequestFailed { message: String },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(quicksave::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(quicksave::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(quicksave::fs::io_error))]
    IoError { message: String },

    // Interactive prompt errors
    #[error("Prompt cancelled")]
    #[diagnostic(code(quicksave::ui::cancelled))]
    PromptCancelled,

    #[error("Prompt failed: {message}")]
    #[diagnostic(code(quicksave::ui::prompt_failed))]
    PromptFailed { message: String },
}

impl From<std::io::Error> for QuicksaveError {
    fn from(err: std::io::Error) -> Self {
        QuicksaveError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for QuicksaveError {
    fn from(err: serde_yaml::Error) -> Self {
        QuicksaveError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for QuicksaveError {
    fn from(err: serde_json::Error) -> Self {
        QuicksaveError::ArchiveOperationFailed {
            message: format!("manifest serialization failed: {}", err),
        }
    }
}

impl From<zip::result::ZipError> for QuicksaveError {
    fn from(err: zip::result::ZipError) -> Self {
        QuicksaveError::ArchiveOperationFailed {
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for QuicksaveError {
    fn from(err: reqwest::Error) -> Self {
        QuicksaveError::RemoteRequestFailed {
            message: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for QuicksaveError {
    fn from(err: inquire::InquireError) -> Self {
        match err {
            inquire::InquireError::OperationCanceled
            | inquire::InquireError::OperationInterrupted => QuicksaveError::PromptCancelled,
            other => QuicksaveError::PromptFailed {
                message: other.to_string(),
            },
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, QuicksaveError>;
