//! Configuration management for Quicksave
//!
//! The registry of games lives in a single YAML file in an OS-specific
//! configuration directory:
//!
//! ```text
//! <config dir>/
//! ├── quicksave.yaml   # Registered games and optional remote endpoint
//! └── .lock            # Advisory lock file
//! ```
//!
//! The configuration directory resolves to `%APPDATA%\Quicksave` on Windows,
//! `~/Library/Application Support/Quicksave` on macOS, and
//! `$XDG_CONFIG_HOME/quicksave` (or `~/.config/quicksave`) on Linux, unless
//! overridden with `--config-dir` / `QUICKSAVE_CONFIG_DIR`.

mod game;
mod remote;

pub use game::GameEntry;
pub use remote::RemoteConfig;

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use console::Style;
use fslock::LockFile;
use serde::{Deserialize, Serialize};

use crate::error::{QuicksaveError, Result};

/// Configuration filename
pub const CONFIG_FILE: &str = "quicksave.yaml";

/// Lock file for configuration locking
pub const LOCK_FILE: &str = ".lock";

/// Quicksave configuration (quicksave.yaml)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Configuration schema version
    pub version: String,

    /// Registered games, keyed by game name
    #[serde(default)]
    pub games: BTreeMap<String, GameEntry>,

    /// Optional remote storage endpoint for `quicksave sync`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<RemoteConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            games: BTreeMap::new(),
            remote: None,
        }
    }
}

impl Config {
    /// Parse configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Serialize configuration to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        let yaml = serde_yaml::to_string(self)?;
        Ok(yaml)
    }

    /// Find a game by name or alias
    ///
    /// Direct name lookup wins; otherwise aliases are scanned. Returns the
    /// canonical game name alongside the entry.
    pub fn find_game(&self, name_or_alias: &str) -> Option<(&str, &GameEntry)> {
        if let Some((name, entry)) = self.games.get_key_value(name_or_alias) {
            return Some((name.as_str(), entry));
        }

        self.games
            .iter()
            .find(|(_, entry)| entry.has_alias(name_or_alias))
            .map(|(name, entry)| (name.as_str(), entry))
    }

    /// Find which game (if any) already owns a name or alias
    pub fn alias_owner(&self, candidate: &str) -> Option<&str> {
        self.games
            .iter()
            .find(|(name, entry)| name.as_str() == candidate || entry.has_alias(candidate))
            .map(|(name, _)| name.as_str())
    }

    /// Register a new game
    pub fn add_game(&mut self, name: impl Into<String>, entry: GameEntry) {
        self.games.insert(name.into(), entry);
    }

    /// Add an alias to an existing game (exact-name lookup)
    pub fn add_alias(&mut self, name: &str, alias: &str) -> Result<()> {
        let entry = self.games.get(name).ok_or_else(|| QuicksaveError::GameNotFound {
            name: name.to_string(),
        })?;

        // Re-adding an existing alias of the same game is a no-op
        if entry.has_alias(alias) {
            return Ok(());
        }

        if let Some(owner) = self.alias_owner(alias) {
            return Err(QuicksaveError::AliasInUse {
                alias: alias.to_string(),
                game: owner.to_string(),
            });
        }

        if let Some(entry) = self.games.get_mut(name) {
            entry.aliases.push(alias.to_string());
        }
        Ok(())
    }
}

/// Resolve the configuration directory
///
/// An explicit override (flag or `QUICKSAVE_CONFIG_DIR`) wins; otherwise the
/// platform configuration directory is used.
pub fn resolve_config_dir(override_dir: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        return Ok(dir);
    }

    let base = dirs::config_dir().ok_or(QuicksaveError::ConfigDirUnavailable)?;
    // Lowercase on Linux (XDG convention), capitalized elsewhere.
    let name = if cfg!(target_os = "linux") {
        "quicksave"
    } else {
        "Quicksave"
    };
    Ok(base.join(name))
}

/// An opened configuration store
#[derive(Debug)]
pub struct ConfigStore {
    /// Configuration directory
    pub dir: PathBuf,

    /// Parsed configuration
    pub config: Config,
}

/// RAII guard for configuration locking
///
/// Acquires an advisory file lock on creation and releases it on drop, so
/// concurrent invocations cannot interleave config read-modify-write cycles.
#[derive(Debug)]
pub struct ConfigGuard {
    lock: LockFile,
    lock_path: PathBuf,
}

impl ConfigStore {
    /// Open the configuration store, creating the directory and a default
    /// configuration file if none exists yet
    pub fn open(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir).map_err(|e| QuicksaveError::FileWriteFailed {
            path: dir.display().to_string(),
            reason: e.to_string(),
        })?;

        let path = dir.join(CONFIG_FILE);
        let config = if path.exists() {
            Self::load_config(&path)
        } else {
            let config = Config::default();
            Self::write_config(dir, &config)?;
            config
        };

        Ok(Self {
            dir: dir.to_path_buf(),
            config,
        })
    }

    /// Path to the configuration file
    pub fn config_path(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE)
    }

    /// Persist the current configuration
    pub fn save(&self) -> Result<()> {
        Self::write_config(&self.dir, &self.config)
    }

    /// Acquire an advisory lock on the configuration directory
    pub fn lock(&self) -> Result<ConfigGuard> {
        ConfigGuard::acquire(&self.dir)
    }

    fn load_config(path: &Path) -> Config {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn_unreadable(path, &e.to_string());
                return Config::default();
            }
        };

        match Config::from_yaml(&content) {
            Ok(config) => config,
            Err(e) => {
                warn_unreadable(path, &e.to_string());
                Config::default()
            }
        }
    }

    /// Write the configuration atomically (temp file in the same directory,
    /// then rename over the target)
    fn write_config(dir: &Path, config: &Config) -> Result<()> {
        let path = dir.join(CONFIG_FILE);
        let yaml = config.to_yaml()?;

        let mut tmp =
            tempfile::NamedTempFile::new_in(dir).map_err(|e| QuicksaveError::FileWriteFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        tmp.write_all(yaml.as_bytes())
            .map_err(|e| QuicksaveError::FileWriteFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        tmp.persist(&path)
            .map_err(|e| QuicksaveError::FileWriteFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        Ok(())
    }
}

/// A corrupted or unreadable configuration falls back to the default rather
/// than blocking every command; the user is told before anything overwrites it.
fn warn_unreadable(path: &Path, reason: &str) {
    eprintln!(
        "{} configuration file {} could not be read ({}); starting with an empty configuration",
        Style::new().yellow().bold().apply_to("Warning:"),
        path.display(),
        reason
    );
}

impl ConfigGuard {
    /// Acquire a lock on the configuration directory
    pub fn acquire(dir: &Path) -> Result<Self> {
        let lock_path = dir.join(LOCK_FILE);

        let mut lock = LockFile::open(&lock_path).map_err(|e| QuicksaveError::ConfigLockFailed {
            reason: format!("Failed to open lock file: {}", e),
        })?;

        lock.lock().map_err(|_| QuicksaveError::ConfigLocked)?;

        Ok(Self { lock, lock_path })
    }

    /// Try to acquire a lock without blocking
    pub fn try_acquire(dir: &Path) -> Result<Option<Self>> {
        let lock_path = dir.join(LOCK_FILE);

        let mut lock = LockFile::open(&lock_path).map_err(|e| QuicksaveError::ConfigLockFailed {
            reason: format!("Failed to open lock file: {}", e),
        })?;

        let acquired = lock
            .try_lock()
            .map_err(|e| QuicksaveError::ConfigLockFailed {
                reason: format!("Failed to try lock: {}", e),
            })?;

        if acquired {
            Ok(Some(Self { lock, lock_path }))
        } else {
            Ok(None)
        }
    }
}

impl Drop for ConfigGuard {
    fn drop(&mut self) {
        let _ = self.lock.unlock();

        // Lock file is recreated when needed
        let _ = fs::remove_file(&self.lock_path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_entry() -> GameEntry {
        GameEntry::new("/saves/skyrim", "/backups/skyrim")
    }

    #[test]
    fn test_config_default_is_empty() {
        let config = Config::default();
        assert!(config.games.is_empty());
        assert!(config.remote.is_none());
        assert_eq!(config.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_config_from_yaml() {
        let yaml = r#"
version: "0.1.0"
games:
  Skyrim:
    save_dir: /saves/skyrim
    backup_dir: /backups/skyrim
    aliases: [sky]
  Stardew Valley:
    save_dir: /saves/stardew
    backup_dir: /backups/stardew
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.games.len(), 2);

        let (name, entry) = config.find_game("Skyrim").unwrap();
        assert_eq!(name, "Skyrim");
        assert_eq!(entry.save_dir, PathBuf::from("/saves/skyrim"));
        assert!(entry.has_alias("sky"));
    }

    #[test]
    fn test_config_yaml_round_trip() {
        let mut config = Config::default();
        let mut entry = sample_entry();
        entry.aliases.push("sky".to_string());
        entry.exclude.push("*.tmp".to_string());
        config.add_game("Skyrim", entry);

        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("Skyrim"));
        assert!(yaml.contains("sky"));

        let parsed = Config::from_yaml(&yaml).unwrap();
        assert_eq!(parsed.games.len(), 1);
        let (_, entry) = parsed.find_game("sky").unwrap();
        assert_eq!(entry.exclude, vec!["*.tmp"]);
    }

    #[test]
    fn test_find_game_by_alias() {
        let mut config = Config::default();
        let mut entry = sample_entry();
        entry.aliases.push("sky".to_string());
        config.add_game("Skyrim", entry);

        let (name, _) = config.find_game("sky").unwrap();
        assert_eq!(name, "Skyrim");
        assert!(config.find_game("unknown").is_none());
    }

    #[test]
    fn test_direct_name_wins_over_alias() {
        let mut config = Config::default();
        let mut first = sample_entry();
        first.aliases.push("fo4".to_string());
        config.add_game("Fallout 4", first);
        config.add_game("fo4", sample_entry());

        // Exact key lookup resolves to the game literally named "fo4"
        let (name, _) = config.find_game("fo4").unwrap();
        assert_eq!(name, "fo4");
    }

    #[test]
    fn test_add_alias() {
        let mut config = Config::default();
        config.add_game("Skyrim", sample_entry());

        config.add_alias("Skyrim", "sky").unwrap();
        assert!(config.games["Skyrim"].has_alias("sky"));

        // Re-adding the same alias is a no-op
        config.add_alias("Skyrim", "sky").unwrap();
        assert_eq!(config.games["Skyrim"].aliases.len(), 1);
    }

    #[test]
    fn test_add_alias_unknown_game() {
        let mut config = Config::default();
        let result = config.add_alias("Skyrim", "sky");
        assert!(matches!(result, Err(QuicksaveError::GameNotFound { .. })));
    }

    #[test]
    fn test_add_alias_collision() {
        let mut config = Config::default();
        let mut skyrim = sample_entry();
        skyrim.aliases.push("sky".to_string());
        config.add_game("Skyrim", skyrim);
        config.add_game("Skies of Arcadia", sample_entry());

        let result = config.add_alias("Skies of Arcadia", "sky");
        assert!(matches!(result, Err(QuicksaveError::AliasInUse { .. })));

        // A game's own name is also reserved
        let result = config.add_alias("Skies of Arcadia", "Skyrim");
        assert!(matches!(result, Err(QuicksaveError::AliasInUse { .. })));
    }

    #[test]
    fn test_resolve_config_dir_override() {
        let dir = resolve_config_dir(Some(PathBuf::from("/tmp/custom"))).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/custom"));
    }

    #[test]
    fn test_store_open_creates_default() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("quicksave");

        let store = ConfigStore::open(&dir).unwrap();
        assert!(store.config_path().exists());
        assert!(store.config.games.is_empty());
    }

    #[test]
    fn test_store_save_and_reopen() {
        let temp = TempDir::new().unwrap();

        let mut store = ConfigStore::open(temp.path()).unwrap();
        store.config.add_game("Skyrim", sample_entry());
        store.save().unwrap();

        let reopened = ConfigStore::open(temp.path()).unwrap();
        assert!(reopened.config.find_game("Skyrim").is_some());
    }

    #[test]
    fn test_store_open_corrupted_falls_back_to_default() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "games: [unclosed").unwrap();

        let store = ConfigStore::open(temp.path()).unwrap();
        assert!(store.config.games.is_empty());
    }

    #[test]
    fn test_config_lock_acquire_release() {
        let temp = TempDir::new().unwrap();
        let store = ConfigStore::open(temp.path()).unwrap();

        let guard = store.lock().unwrap();
        let lock_path = temp.path().join(LOCK_FILE);
        assert!(lock_path.exists());

        drop(guard);
        assert!(!lock_path.exists());
    }
}
