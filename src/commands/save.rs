//! Save command implementation
//!
//! Creates a timestamped zip snapshot of a registered game's save directory
//! in its backup directory.

use std::fs;
use std::path::PathBuf;

use console::Style;

use crate::cli::SaveArgs;
use crate::common::display::{format_size, plural};
use crate::error::{QuicksaveError, Result};
use crate::snapshot::{self, archive};

use super::helpers;

/// Run save command
pub fn run(config_dir: Option<PathBuf>, verbose: bool, args: SaveArgs) -> Result<()> {
    let store = helpers::open_store(config_dir)?;
    let (name, game) = helpers::resolve_game(&store, &args.game)?;

    if let Some(ref tag) = args.tag {
        snapshot::validate_tag(tag)?;
    }

    if !game.save_dir.is_dir() {
        return Err(QuicksaveError::SaveDirMissing {
            path: game.save_dir.display().to_string(),
        });
    }

    fs::create_dir_all(&game.backup_dir).map_err(|e| QuicksaveError::BackupDirFailed {
        path: game.backup_dir.display().to_string(),
        reason: e.to_string(),
    })?;

    let source = snapshot::source_name(&game.save_dir)?;
    let timestamp = snapshot::timestamp_now()?;
    let file_name = snapshot::file_name_for(&source, &timestamp, args.tag.as_deref());
    let dest = game.backup_dir.join(&file_name);

    if verbose {
        println!(
            "  {} {}",
            Style::new().bold().apply_to("Save directory:"),
            game.save_dir.display()
        );
        println!(
            "  {} {}",
            Style::new().bold().apply_to("Archive:"),
            dest.display()
        );
    }

    let summary = archive::create_archive(
        &game.save_dir,
        &dest,
        &name,
        &timestamp,
        args.tag.as_deref(),
        &game.exclude,
        true,
    )?;

    let display_name = match args.tag.as_deref() {
        Some(tag) => format!("{} ({})", timestamp, tag),
        None => timestamp.clone(),
    };

    println!(
        "{} snapshot {} for {}",
        Style::new().green().bold().apply_to("Saved"),
        Style::new().yellow().bold().apply_to(display_name),
        Style::new().yellow().bold().apply_to(&name)
    );
    println!(
        "  {} {} {} ({})",
        Style::new().bold().apply_to("Archived:"),
        summary.files,
        plural(summary.files, "file", "files"),
        format_size(summary.bytes)
    );
    println!("  {}", Style::new().dim().apply_to(dest.display().to_string()));

    Ok(())
}
