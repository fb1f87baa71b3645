//! List command implementation
//!
//! Lists all registered games with their aliases, directories, and
//! snapshot counts.

use std::path::PathBuf;

use console::Style;

use crate::cli::ListArgs;
use crate::error::Result;
use crate::snapshot;

use super::helpers;

/// Run list command
pub fn run(config_dir: Option<PathBuf>, args: ListArgs) -> Result<()> {
    let store = helpers::open_store(config_dir)?;

    if store.config.games.is_empty() {
        println!("No games registered.");
        return Ok(());
    }

    println!("Registered games ({}):", store.config.games.len());
    println!();

    for (name, entry) in &store.config.games {
        println!("  {}", Style::new().bold().yellow().apply_to(name));

        if !entry.aliases.is_empty() {
            println!(
                "    {} {}",
                Style::new().bold().apply_to("Aliases:"),
                Style::new().cyan().apply_to(entry.aliases.join(", "))
            );
        }

        println!(
            "    {} {}",
            Style::new().bold().apply_to("Save directory:"),
            entry.save_dir.display()
        );
        println!(
            "    {} {}",
            Style::new().bold().apply_to("Backup directory:"),
            entry.backup_dir.display()
        );

        // A save directory that no longer resolves still lists; snapshot
        // information is simply unavailable for it.
        if let Ok(source) = snapshot::source_name(&entry.save_dir) {
            let snapshots =
                snapshot::list_snapshots(&entry.backup_dir, &source).unwrap_or_default();
            println!(
                "    {} {}",
                Style::new().bold().apply_to("Snapshots:"),
                snapshots.len()
            );

            if args.detailed {
                if let Some(latest) = snapshots.first() {
                    println!(
                        "    {} {}",
                        Style::new().bold().apply_to("Latest:"),
                        latest.display_name()
                    );
                }
            }
        }

        println!();
    }

    Ok(())
}
