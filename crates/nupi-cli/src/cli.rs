//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

/// Build and install a Nushell plugin crate, then register it with the shell
#[derive(Parser, Debug)]
#[command(name = "nupi")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the plugin crate's package descriptor (Cargo.toml)
    pub package_file: PathBuf,

    /// Plugin manager home directory (defaults to $NUPM_HOME)
    #[arg(long, value_name = "DIR")]
    pub plugin_home: Option<PathBuf>,

    /// Print the build and registration commands without running them
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
