//! Register command implementation

use std::path::PathBuf;

use console::Style;

use crate::cli::RegisterArgs;
use crate::config::GameEntry;
use crate::error::{QuicksaveError, Result};
use crate::path_utils;

use super::helpers;

/// Run register command
pub fn run(config_dir: Option<PathBuf>, args: RegisterArgs) -> Result<()> {
    if args.name.trim().is_empty() {
        return Err(QuicksaveError::InvalidGameName {
            name: args.name,
            reason: "name cannot be empty".to_string(),
        });
    }

    let (mut store, _guard) = helpers::open_store_locked(config_dir)?;

    if store.config.games.contains_key(&args.name) && !args.force {
        return Err(QuicksaveError::GameAlreadyRegistered { name: args.name });
    }

    // The save directory must exist up front; the backup directory is
    // created lazily on the first save.
    let save_dir = path_utils::canonicalize_existing(&args.save_dir)?;
    let backup_dir = path_utils::absolutize(&args.backup_dir)?;

    if let Some(ref alias) = args.alias {
        if let Some(owner) = store.config.alias_owner(alias) {
            if owner != args.name {
                return Err(QuicksaveError::AliasInUse {
                    alias: alias.clone(),
                    game: owner.to_string(),
                });
            }
        }
    }

    let mut entry = GameEntry::new(&save_dir, &backup_dir);
    if let Some(ref alias) = args.alias {
        entry.aliases.push(alias.clone());
    }

    store.config.add_game(&args.name, entry);
    store.save()?;

    println!(
        "{} {}",
        Style::new().green().bold().apply_to("Registered"),
        Style::new().yellow().bold().apply_to(&args.name)
    );
    println!(
        "  {} {}",
        Style::new().bold().apply_to("Save directory:"),
        save_dir.display()
    );
    println!(
        "  {} {}",
        Style::new().bold().apply_to("Backup directory:"),
        backup_dir.display()
    );
    if let Some(ref alias) = args.alias {
        println!("  {} {}", Style::new().bold().apply_to("Alias:"), alias);
    }

    Ok(())
}
