//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Quicksave - game save snapshot manager
///
/// Save, list, restore, and upload snapshots of game save directories.
#[derive(Parser, Debug)]
#[command(
    name = "quicksave",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "A command line tool for saving snapshots of game saves",
    long_about = "Quicksave registers game save directories and captures them as \
                  timestamped zip snapshots in a per-game backup directory, with \
                  optional upload to a remote storage endpoint.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  quicksave register -n Skyrim -s ~/saves/skyrim -b ~/backups/skyrim -a sky\n    \
                  quicksave save sky --tag before-final-quest\n    \
                  quicksave list\n    \
                  quicksave show Skyrim\n    \
                  quicksave restore Skyrim\n\n\
                  \x1b[1m\x1b[32mDocumentation:\x1b[0m\n    \
                  https://github.com/quicksave-cli/quicksave"
)]
pub struct Cli {
    /// Configuration directory (defaults to the platform config dir)
    #[arg(long, short = 'c', global = true, env = "QUICKSAVE_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a new game save directory
    Register(RegisterArgs),

    /// Save a snapshot of a registered game
    Save(SaveArgs),

    /// List all registered games
    List(ListArgs),

    /// List saved snapshots for a game
    Show(ShowArgs),

    /// Restore a snapshot into the save directory
    Restore(RestoreArgs),

    /// Add an alias to a registered game
    Alias(AliasArgs),

    /// Delete old snapshots, keeping the newest
    Prune(PruneArgs),

    /// Upload snapshots to the configured remote endpoint
    Sync(SyncArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the register command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Register a game:\n    quicksave register -n Skyrim -s ~/saves/skyrim -b ~/backups/skyrim\n\n\
                  Register with an alias:\n    quicksave register -n \"Fallout 4\" -s ~/saves/fo4 -b ~/backups/fo4 -a fo4\n\n\
                  Replace an existing registration:\n    quicksave register -n Skyrim -s ~/saves/new -b ~/backups/skyrim --force")]
pub struct RegisterArgs {
    /// Name of the game
    #[arg(long, short = 'n')]
    pub name: String,

    /// Path to the save directory
    #[arg(long, short = 's')]
    pub save_dir: PathBuf,

    /// Path to the backup directory
    #[arg(long, short = 'b')]
    pub backup_dir: PathBuf,

    /// Optional alias for the game
    #[arg(long, short = 'a')]
    pub alias: Option<String>,

    /// Replace an existing registration with the same name
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the save command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Save a snapshot:\n    quicksave save Skyrim\n\n\
                  Save with a tag:\n    quicksave save sky --tag boss-fight")]
pub struct SaveArgs {
    /// Name or alias of the game to save
    pub game: String,

    /// Optional tag to add to the snapshot name
    #[arg(long, short = 't')]
    pub tag: Option<String>,
}

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List all registered games:\n    quicksave list\n\n\
                  Show latest snapshots as well:\n    quicksave list --detailed")]
pub struct ListArgs {
    /// Show detailed output
    #[arg(long)]
    pub detailed: bool,
}

/// Arguments for the show command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List snapshots for a game:\n    quicksave show Skyrim\n\n\
                  Include archive manifests:\n    quicksave show sky --detailed")]
pub struct ShowArgs {
    /// Name or alias of the game to show snapshots for
    pub game: String,

    /// Read each archive's manifest for file counts
    #[arg(long)]
    pub detailed: bool,
}

/// Arguments for the restore command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Pick a snapshot interactively:\n    quicksave restore Skyrim\n\n\
                  Restore a specific snapshot:\n    quicksave restore sky 2025-06-02_08-15-22\n\n\
                  Restore without confirmation:\n    quicksave restore sky 2025-06-02_08-15-22 -y")]
pub struct RestoreArgs {
    /// Name or alias of the game to restore
    pub game: String,

    /// Snapshot file name or timestamp (interactive selection if omitted)
    pub snapshot: Option<String>,

    /// Skip confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Arguments for the alias command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Add an alias:\n    quicksave alias \"Stardew Valley\" stardew")]
pub struct AliasArgs {
    /// Exact name of the registered game
    pub game: String,

    /// Alias to add
    pub alias: String,
}

/// Arguments for the prune command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Keep the five newest snapshots:\n    quicksave prune Skyrim\n\n\
                  Keep only the newest:\n    quicksave prune sky --keep 1 -y")]
pub struct PruneArgs {
    /// Name or alias of the game to prune
    pub game: String,

    /// Number of newest snapshots to keep
    #[arg(long, default_value_t = 5)]
    pub keep: usize,

    /// Skip confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Arguments for the sync command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Upload all snapshots of a game:\n    quicksave sync Skyrim\n\n\
                  Upload only the newest snapshot:\n    quicksave sync sky --latest")]
pub struct SyncArgs {
    /// Name or alias of the game to sync
    pub game: String,

    /// Upload only the newest snapshot
    #[arg(long)]
    pub latest: bool,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    quicksave completions --shell bash > ~/.bash_completion.d/quicksave\n\n\
                  Generate zsh completions:\n    quicksave completions --shell zsh > ~/.zfunc/_quicksave")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
