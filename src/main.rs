//! Quicksave - game save snapshot manager
//!
//! A command line tool for saving snapshots of game saves: register a game's
//! save directory once, then capture, list, restore, prune, and upload
//! timestamped zip snapshots of it.

use clap::Parser;

mod cli;
mod commands;
mod common;
mod config;
mod error;
mod hash;
mod path_utils;
mod progress;
mod remote;
mod snapshot;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Register(args) => commands::register::run(cli.config_dir, args),
        Commands::Save(args) => commands::save::run(cli.config_dir, cli.verbose, args),
        Commands::List(args) => commands::list::run(cli.config_dir, args),
        Commands::Show(args) => commands::show::run(cli.config_dir, args),
        Commands::Restore(args) => commands::restore::run(cli.config_dir, cli.verbose, args),
        Commands::Alias(args) => commands::alias::run(cli.config_dir, args),
        Commands::Prune(args) => commands::prune::run(cli.config_dir, args),
        Commands::Sync(args) => commands::sync::run(cli.config_dir, args),
        Commands::Version => commands::version::run(cli.config_dir),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
