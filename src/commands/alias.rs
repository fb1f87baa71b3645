//! Alias command implementation

use std::path::PathBuf;

use console::Style;

use crate::cli::AliasArgs;
use crate::error::{QuicksaveError, Result};
use crate::snapshot;

use super::helpers;

/// Run alias command
///
/// The game is looked up by its exact name, not by alias; the new alias is
/// validated like a tag since both end up in file-name and lookup positions.
pub fn run(config_dir: Option<PathBuf>, args: AliasArgs) -> Result<()> {
    snapshot::validate_tag(&args.alias).map_err(|_| QuicksaveError::InvalidAlias {
        alias: args.alias.clone(),
    })?;

    let (mut store, _guard) = helpers::open_store_locked(config_dir)?;

    store.config.add_alias(&args.game, &args.alias)?;
    store.save()?;

    println!(
        "{} alias {} for {}",
        Style::new().green().bold().apply_to("Added"),
        Style::new().cyan().apply_to(&args.alias),
        Style::new().yellow().bold().apply_to(&args.game)
    );

    Ok(())
}
