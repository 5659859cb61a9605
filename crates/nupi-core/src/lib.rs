//! Core library for the `nupi` plugin installer.
//!
//! This crate provides descriptor parsing, configuration resolution, a
//! subprocess runner abstraction, and the installer that ties them together:
//! build a plugin crate with `cargo install` into the plugin manager's home
//! directory, then register the produced binary with the host shell.

pub mod config;
pub mod error;
pub mod installer;
pub mod manifest;
pub mod runner;

/// The canonical filename for package descriptor files.
///
/// Plugin crates are ordinary cargo packages, so the descriptor handed to
/// the installer is the crate's `Cargo.toml`.
pub const DESCRIPTOR_FILENAME: &str = "Cargo.toml";

pub use config::{InstallConfig, HOST_PROGRAM, PLUGIN_HOME_VAR, PLUGIN_SUBDIR};
pub use error::{Error, Result};
pub use installer::{binary_extension, CommandSpec, InstallPlan, InstallReport, PluginInstaller};
pub use manifest::{PackageManifest, PackageMeta};
pub use runner::{CommandOutput, CommandRunner, SystemRunner};
