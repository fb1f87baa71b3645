//! Show command implementation
//!
//! Lists the snapshots saved for one game, newest first.

use std::path::PathBuf;

use console::Style;

use crate::cli::ShowArgs;
use crate::common::display::format_size;
use crate::error::Result;
use crate::snapshot::{self, archive};

use super::helpers;

/// Run show command
pub fn run(config_dir: Option<PathBuf>, args: ShowArgs) -> Result<()> {
    let store = helpers::open_store(config_dir)?;
    let (name, game) = helpers::resolve_game(&store, &args.game)?;

    let source = snapshot::source_name(&game.save_dir)?;
    let snapshots = snapshot::list_snapshots(&game.backup_dir, &source)?;

    if snapshots.is_empty() {
        println!(
            "No snapshots for {}.",
            Style::new().bold().yellow().apply_to(&name)
        );
        return Ok(());
    }

    println!(
        "Snapshots for {} ({}):",
        Style::new().bold().yellow().apply_to(&name),
        snapshots.len()
    );
    println!();

    for snapshot in &snapshots {
        println!("  {}", Style::new().bold().apply_to(&snapshot.timestamp));

        if let Some(ref tag) = snapshot.tag {
            println!(
                "    {} {}",
                Style::new().bold().apply_to("Tag:"),
                Style::new().cyan().apply_to(tag)
            );
        }

        println!(
            "    {} {}",
            Style::new().bold().apply_to("Size:"),
            format_size(snapshot.size)
        );

        if args.detailed {
            display_manifest(snapshot);
        }

        println!("    {}", Style::new().dim().apply_to(&snapshot.file_name));
        println!();
    }

    Ok(())
}

/// Display manifest details for one snapshot, tolerating archives written
/// without one
fn display_manifest(snapshot: &snapshot::Snapshot) {
    match archive::read_manifest(&snapshot.path) {
        Ok(Some(manifest)) => {
            let files_label = if manifest.files.len() == 1 {
                "file"
            } else {
                "files"
            };
            println!(
                "    {} {} {} ({})",
                Style::new().bold().apply_to("Contents:"),
                manifest.files.len(),
                files_label,
                format_size(manifest.total_size())
            );
            println!(
                "    {} quicksave {}",
                Style::new().bold().apply_to("Created by:"),
                manifest.tool_version
            );
        }
        Ok(None) => {
            println!(
                "    {} {}",
                Style::new().bold().apply_to("Contents:"),
                Style::new().dim().apply_to("no manifest")
            );
        }
        Err(_) => {
            println!(
                "    {} {}",
                Style::new().bold().apply_to("Contents:"),
                Style::new().dim().apply_to("unreadable archive")
            );
        }
    }
}
