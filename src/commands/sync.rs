//! Sync command implementation
//!
//! Uploads snapshot archives to the configured remote endpoint.

use std::path::PathBuf;

use console::Style;

use crate::cli::SyncArgs;
use crate::common::display::plural;
use crate::error::{QuicksaveError, Result};
use crate::remote::RemoteClient;
use crate::snapshot;

use super::helpers;

/// Run sync command
pub fn run(config_dir: Option<PathBuf>, args: SyncArgs) -> Result<()> {
    let store = helpers::open_store(config_dir)?;
    let (name, game) = helpers::resolve_game(&store, &args.game)?;

    let remote = store
        .config
        .remote
        .as_ref()
        .ok_or(QuicksaveError::RemoteNotConfigured)?;
    let client = RemoteClient::from_config(remote)?;

    let source = snapshot::source_name(&game.save_dir)?;
    let snapshots = snapshot::list_snapshots(&game.backup_dir, &source)?;

    if snapshots.is_empty() {
        return Err(QuicksaveError::NoSnapshots { game: name });
    }

    let selected: Vec<_> = if args.latest {
        snapshots.iter().take(1).collect()
    } else {
        snapshots.iter().collect()
    };

    println!(
        "Uploading {} {} for {} to {}",
        selected.len(),
        plural(selected.len(), "snapshot", "snapshots"),
        Style::new().bold().yellow().apply_to(&name),
        client.endpoint()
    );

    // First failure aborts; already-uploaded archives are idempotent to re-send
    for snapshot in &selected {
        client.upload_snapshot(&name, snapshot)?;
        println!(
            "  {} {}",
            Style::new().green().apply_to("Uploaded"),
            Style::new().dim().apply_to(&snapshot.file_name)
        );
    }

    println!(
        "{} {} {}",
        Style::new().green().bold().apply_to("Synced"),
        selected.len(),
        plural(selected.len(), "snapshot", "snapshots")
    );

    Ok(())
}
