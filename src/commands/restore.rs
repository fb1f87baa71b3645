//! Restore command implementation
//!
//! Replaces the contents of a game's save directory with a chosen snapshot.
//! A safety snapshot (tagged `pre-restore`) is taken first so the previous
//! state is never lost.

use std::fs;
use std::path::PathBuf;

use console::Style;
use inquire::{Confirm, Select};

use crate::cli::RestoreArgs;
use crate::common::display::{format_size, plural};
use crate::common::fs as fs_utils;
use crate::error::{QuicksaveError, Result};
use crate::snapshot::{self, Snapshot, archive};

use super::helpers;

/// Run restore command
pub fn run(config_dir: Option<PathBuf>, verbose: bool, args: RestoreArgs) -> Result<()> {
    let store = helpers::open_store(config_dir)?;
    let (name, game) = helpers::resolve_game(&store, &args.game)?;

    let source = snapshot::source_name(&game.save_dir)?;
    let snapshots = snapshot::list_snapshots(&game.backup_dir, &source)?;

    if snapshots.is_empty() {
        return Err(QuicksaveError::NoSnapshots { game: name });
    }

    let selected = match args.snapshot {
        Some(ref selector) => snapshot::find_snapshot(&snapshots, selector)
            .cloned()
            .ok_or_else(|| QuicksaveError::SnapshotNotFound {
                name: selector.clone(),
            })?,
        None => select_snapshot(&snapshots)?,
    };

    if verbose {
        println!(
            "  {} {}",
            Style::new().bold().apply_to("Archive:"),
            selected.path.display()
        );
    }

    if !args.yes {
        let prompt = format!(
            "Replace the contents of {} with snapshot {}?",
            game.save_dir.display(),
            selected.display_name()
        );
        let proceed = Confirm::new(&prompt).with_default(false).prompt()?;
        if !proceed {
            println!("Restore cancelled.");
            return Ok(());
        }
    }

    // Keep the current state recoverable before anything is overwritten
    if fs_utils::dir_has_entries(&game.save_dir) {
        let timestamp = snapshot::timestamp_now()?;
        let safety_name = snapshot::file_name_for(&source, &timestamp, Some("pre-restore"));

        fs::create_dir_all(&game.backup_dir).map_err(|e| QuicksaveError::BackupDirFailed {
            path: game.backup_dir.display().to_string(),
            reason: e.to_string(),
        })?;

        archive::create_archive(
            &game.save_dir,
            &game.backup_dir.join(&safety_name),
            &name,
            &timestamp,
            Some("pre-restore"),
            &game.exclude,
            false,
        )?;

        println!(
            "{} pre-restore snapshot {}",
            Style::new().green().apply_to("Saved"),
            Style::new().dim().apply_to(&safety_name)
        );
    }

    fs::create_dir_all(&game.save_dir).map_err(|e| QuicksaveError::FileWriteFailed {
        path: game.save_dir.display().to_string(),
        reason: e.to_string(),
    })?;
    fs_utils::clear_dir_contents(&game.save_dir)?;

    let summary = archive::extract_archive(&selected.path, &game.save_dir, true)?;

    println!(
        "{} snapshot {} for {}",
        Style::new().green().bold().apply_to("Restored"),
        Style::new().yellow().bold().apply_to(selected.display_name()),
        Style::new().yellow().bold().apply_to(&name)
    );
    println!(
        "  {} {} {} ({})",
        Style::new().bold().apply_to("Extracted:"),
        summary.files,
        plural(summary.files, "file", "files"),
        format_size(summary.bytes)
    );
    if summary.verified {
        println!(
            "  {} {}",
            Style::new().bold().apply_to("Integrity:"),
            Style::new().green().apply_to("verified")
        );
    } else {
        println!(
            "  {} {}",
            Style::new().bold().apply_to("Integrity:"),
            Style::new().dim().apply_to("no manifest, not verified")
        );
    }

    Ok(())
}

/// Interactive snapshot selection, newest first
fn select_snapshot(snapshots: &[Snapshot]) -> Result<Snapshot> {
    let options: Vec<String> = snapshots
        .iter()
        .map(|s| format!("{}  ({})", s.display_name(), format_size(s.size)))
        .collect();

    let choice = Select::new("Select a snapshot to restore", options.clone()).prompt()?;

    let index = options.iter().position(|o| *o == choice).unwrap_or(0);
    Ok(snapshots[index].clone())
}
