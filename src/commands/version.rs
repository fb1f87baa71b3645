//! Version command implementation

use std::path::PathBuf;

use crate::config::resolve_config_dir;
use crate::error::Result;

/// Run version command
pub fn run(config_dir: Option<PathBuf>) -> Result<()> {
    println!("quicksave {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", rustc_version());
    println!("  Profile: {}", build_profile());

    if let Ok(dir) = resolve_config_dir(config_dir) {
        println!();
        println!("Config directory: {}", dir.display());
    }

    Ok(())
}

fn rustc_version() -> &'static str {
    // This will be the version of rustc used to compile
    env!("CARGO_PKG_RUST_VERSION")
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
