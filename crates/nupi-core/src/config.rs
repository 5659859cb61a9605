//! Installer configuration derived from the environment.

use std::path::PathBuf;

use crate::error::{Error, Result};

/// Environment variable naming the plugin manager's home directory.
pub const PLUGIN_HOME_VAR: &str = "NUPM_HOME";

/// Subdirectory of the plugin home that `cargo install` targets.
pub const PLUGIN_SUBDIR: &str = "plugins";

/// Host shell binary used to register installed plugins.
pub const HOST_PROGRAM: &str = "nu";

/// Configuration for a plugin installation.
///
/// Carries the plugin manager's home directory as an explicit value so
/// callers (and tests) can inject one instead of reading the environment
/// ad hoc.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallConfig {
    /// The plugin manager's home directory.
    pub plugin_home: PathBuf,
    /// Host shell binary invoked for registration.
    pub host_program: String,
}

impl InstallConfig {
    /// Build a configuration from the [`PLUGIN_HOME_VAR`] environment
    /// variable.
    ///
    /// Fails with [`Error::MissingEnvironment`] when the variable is unset
    /// or empty, before any subprocess runs.
    pub fn from_env() -> Result<Self> {
        home_from_env(PLUGIN_HOME_VAR).map(Self::with_home)
    }

    /// Build a configuration with an explicit plugin home directory.
    pub fn with_home(plugin_home: PathBuf) -> Self {
        Self {
            plugin_home,
            host_program: HOST_PROGRAM.to_string(),
        }
    }

    /// The install root that build artifacts land under.
    ///
    /// The build tool places binaries at `<install_root>/bin/<name>`.
    pub fn install_root(&self) -> PathBuf {
        self.plugin_home.join(PLUGIN_SUBDIR)
    }
}

fn home_from_env(var: &'static str) -> Result<PathBuf> {
    match std::env::var_os(var) {
        Some(value) if !value.is_empty() => Ok(PathBuf::from(value)),
        _ => Err(Error::MissingEnvironment { var }),
    }
}
