//! Plugin installation orchestration.
//!
//! The installer is a sequential pipeline over two external tools: a build
//! step (`cargo install`) that compiles the plugin crate and places its
//! binary under the plugin manager's install root, and a registration step
//! that tells the host shell about the produced binary. Derivation of paths
//! and command lines is kept separate from execution ([`InstallPlan`]) so the
//! pipeline can be inspected without side effects.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::InstallConfig;
use crate::error::{Error, Result};
use crate::manifest::PackageManifest;
use crate::runner::{CommandOutput, CommandRunner};

/// Platform-specific suffix of compiled binaries.
///
/// `os` is an OS name as reported by [`std::env::consts::OS`].
pub fn binary_extension(os: &str) -> &'static str {
    if os == "windows" { ".exe" } else { "" }
}

/// An external command the installer intends to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Fully derived installation pipeline, before any side effects.
#[derive(Debug, Clone)]
pub struct InstallPlan {
    /// Name of the package being installed.
    pub package_name: String,
    /// Directory containing the package sources.
    pub repo_root: PathBuf,
    /// Where the build step is expected to place the binary.
    pub binary_path: PathBuf,
    /// The build command.
    pub build: CommandSpec,
    /// The host registration command.
    pub register: CommandSpec,
}

/// Outcome of a completed installation.
#[derive(Debug, Clone)]
pub struct InstallReport {
    pub package_name: String,
    pub binary_path: PathBuf,
}

/// Installs a plugin package and registers it with the host shell.
pub struct PluginInstaller<R: CommandRunner> {
    config: InstallConfig,
    runner: R,
}

impl<R: CommandRunner> PluginInstaller<R> {
    pub fn new(config: InstallConfig, runner: R) -> Self {
        Self { config, runner }
    }

    /// Derive the installation pipeline for the given package descriptor.
    ///
    /// Pure with respect to subprocesses: only the descriptor file is read.
    pub fn plan(&self, package_file: &Path) -> Result<InstallPlan> {
        let repo_root = match package_file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => {
                return Err(Error::InvalidPackagePath {
                    path: package_file.to_path_buf(),
                });
            }
        };

        let manifest = PackageManifest::from_path(package_file)?;
        let package_name = manifest.name().to_string();

        let install_root = self.config.install_root();
        let build = CommandSpec {
            program: "cargo".to_string(),
            args: vec![
                "install".to_string(),
                "--path".to_string(),
                repo_root.to_string_lossy().into_owned(),
                "--root".to_string(),
                install_root.to_string_lossy().into_owned(),
            ],
        };

        // The build tool's output layout convention: <install_root>/bin/<name>
        let binary_name = format!(
            "{package_name}{}",
            binary_extension(std::env::consts::OS)
        );
        let binary_path = install_root.join("bin").join(binary_name);

        let register = CommandSpec {
            program: self.config.host_program.clone(),
            args: vec![
                "--commands".to_string(),
                format!("plugin add '{}'", binary_path.display()),
            ],
        };

        Ok(InstallPlan {
            package_name,
            repo_root,
            binary_path,
            build,
            register,
        })
    }

    /// Install the package: build, then register the produced binary.
    ///
    /// Blocking for the full duration of the build. The first failure aborts
    /// the remaining steps; registration never runs after a failed build.
    pub fn install(&self, package_file: &Path) -> Result<InstallReport> {
        let plan = self.plan(package_file)?;
        self.execute(&plan)?;
        Ok(InstallReport {
            package_name: plan.package_name,
            binary_path: plan.binary_path,
        })
    }

    /// Execute a previously derived plan.
    pub fn execute(&self, plan: &InstallPlan) -> Result<()> {
        tracing::info!(
            "building '{}' into {}",
            plan.package_name,
            self.config.install_root().display()
        );
        let output = self.run_build(&plan.build)?;
        tracing::debug!("build finished: exit code {:?}", output.exit_code);

        // The host would reject a path that doesn't exist; fail fast with
        // the expected location in the message instead.
        if !plan.binary_path.exists() {
            return Err(Error::RegistrationFailed {
                path: plan.binary_path.clone(),
                exit_code: None,
                reason: "build produced no binary at the expected path".to_string(),
            });
        }

        self.run_register(plan)?;
        tracing::info!("registered plugin at {}", plan.binary_path.display());
        Ok(())
    }

    fn run_build(&self, build: &CommandSpec) -> Result<CommandOutput> {
        let output = self
            .runner
            .run(&build.program, &build.args, None)
            .map_err(|e| Error::BuildFailed {
                exit_code: None,
                stdout: String::new(),
                stderr: format!("failed to spawn {}: {e}", build.program),
            })?;

        if !output.success() {
            return Err(Error::BuildFailed {
                exit_code: output.exit_code,
                stdout: output.stdout,
                stderr: output.stderr,
            });
        }
        Ok(output)
    }

    fn run_register(&self, plan: &InstallPlan) -> Result<CommandOutput> {
        let output = self
            .runner
            .run(&plan.register.program, &plan.register.args, None)
            .map_err(|e| Error::RegistrationFailed {
                path: plan.binary_path.clone(),
                exit_code: None,
                reason: format!("failed to spawn {}: {e}", plan.register.program),
            })?;

        if !output.success() {
            return Err(Error::RegistrationFailed {
                path: plan.binary_path.clone(),
                exit_code: output.exit_code,
                reason: if output.stderr.trim().is_empty() {
                    "host rejected the plugin".to_string()
                } else {
                    output.stderr.trim().to_string()
                },
            });
        }
        Ok(output)
    }
}
