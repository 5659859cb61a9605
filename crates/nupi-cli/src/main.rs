//! nupi - Nushell plugin installer
//!
//! Builds a plugin crate with `cargo install` into `$NUPM_HOME/plugins` and
//! registers the produced binary with the shell.

mod cli;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::Cli;
use error::Result;
use nupi_core::{InstallConfig, PluginInstaller, SystemRunner};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let config = match cli.plugin_home {
        Some(home) => InstallConfig::with_home(home),
        None => InstallConfig::from_env()?,
    };
    let host = config.host_program.clone();
    let installer = PluginInstaller::new(config, SystemRunner);

    let plan = installer.plan(&cli.package_file)?;

    if cli.dry_run {
        println!(
            "{} would install '{}' to {}",
            "dry-run".cyan().bold(),
            plan.package_name,
            plan.binary_path.display()
        );
        println!("  build:    {}", plan.build);
        println!("  register: {}", plan.register);
        return Ok(());
    }

    println!(
        "{} building '{}' (this may take a while)",
        "==>".green().bold(),
        plan.package_name.bold()
    );
    installer.execute(&plan)?;

    println!(
        "{} installed {}",
        "==>".green().bold(),
        plan.binary_path.display()
    );
    println!(
        "{} restart {} before the plugin is available",
        "note".yellow().bold(),
        host.cyan()
    );
    Ok(())
}
