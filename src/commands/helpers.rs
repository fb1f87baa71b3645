//! Shared helpers for command implementations

use std::fs;
use std::path::PathBuf;

use crate::config::{ConfigGuard, ConfigStore, GameEntry, resolve_config_dir};
use crate::error::{QuicksaveError, Result};

/// Open the configuration store for read-only commands
pub fn open_store(config_dir: Option<PathBuf>) -> Result<ConfigStore> {
    let dir = resolve_config_dir(config_dir)?;
    ConfigStore::open(&dir)
}

/// Open the configuration store for mutating commands
///
/// The advisory lock is taken before the configuration is read, so the
/// read-modify-write cycle cannot interleave with another invocation.
pub fn open_store_locked(config_dir: Option<PathBuf>) -> Result<(ConfigStore, ConfigGuard)> {
    let dir = resolve_config_dir(config_dir)?;
    fs::create_dir_all(&dir).map_err(|e| QuicksaveError::FileWriteFailed {
        path: dir.display().to_string(),
        reason: e.to_string(),
    })?;

    let guard = ConfigGuard::acquire(&dir)?;
    let store = ConfigStore::open(&dir)?;
    Ok((store, guard))
}

/// Resolve a game by name or alias, returning the canonical name and entry
pub fn resolve_game(store: &ConfigStore, name_or_alias: &str) -> Result<(String, GameEntry)> {
    store
        .config
        .find_game(name_or_alias)
        .map(|(name, entry)| (name.to_string(), entry.clone()))
        .ok_or_else(|| QuicksaveError::GameNotFound {
            name: name_or_alias.to_string(),
        })
}
