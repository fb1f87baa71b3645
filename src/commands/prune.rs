//! Prune command implementation
//!
//! Deletes all but the N newest snapshots of a game.

use std::fs;
use std::path::PathBuf;

use console::Style;
use inquire::Confirm;

use crate::cli::PruneArgs;
use crate::common::display::{format_size, plural};
use crate::error::{QuicksaveError, Result};
use crate::snapshot;

use super::helpers;

/// Run prune command
pub fn run(config_dir: Option<PathBuf>, args: PruneArgs) -> Result<()> {
    let store = helpers::open_store(config_dir)?;
    let (name, game) = helpers::resolve_game(&store, &args.game)?;

    let source = snapshot::source_name(&game.save_dir)?;
    let snapshots = snapshot::list_snapshots(&game.backup_dir, &source)?;

    if snapshots.len() <= args.keep {
        println!(
            "Nothing to prune for {} ({} {}, keeping {}).",
            Style::new().bold().yellow().apply_to(&name),
            snapshots.len(),
            plural(snapshots.len(), "snapshot", "snapshots"),
            args.keep
        );
        return Ok(());
    }

    let doomed = &snapshots[args.keep..];
    let reclaim: u64 = doomed.iter().map(|s| s.size).sum();

    println!(
        "Pruning {} of {} snapshots for {} (keeping the {} newest):",
        doomed.len(),
        snapshots.len(),
        Style::new().bold().yellow().apply_to(&name),
        args.keep
    );
    for snapshot in doomed {
        println!("  {}", Style::new().dim().apply_to(&snapshot.file_name));
    }

    if !args.yes {
        let proceed = Confirm::new("Delete these snapshots?")
            .with_default(false)
            .prompt()?;
        if !proceed {
            println!("Prune cancelled.");
            return Ok(());
        }
    }

    for snapshot in doomed {
        fs::remove_file(&snapshot.path).map_err(|e| QuicksaveError::FileWriteFailed {
            path: snapshot.path.display().to_string(),
            reason: e.to_string(),
        })?;
    }

    println!(
        "{} {} {} ({} reclaimed)",
        Style::new().green().bold().apply_to("Deleted"),
        doomed.len(),
        plural(doomed.len(), "snapshot", "snapshots"),
        format_size(reclaim)
    );

    Ok(())
}
