//! Subprocess invocation behind a substitutable capability.
//!
//! The installer never spawns processes directly; it goes through
//! [`CommandRunner`] so tests can script subprocess behavior without running
//! a real compiler.

use std::io;
use std::path::Path;
use std::process::Command;

/// Captured result of a finished subprocess.
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    /// Exit code, or `None` if the process was terminated by a signal.
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Capability to run an external command to completion.
pub trait CommandRunner {
    /// Run `program` with `args`, blocking until it exits, capturing output.
    ///
    /// `cwd` overrides the working directory when set. An `Err` means the
    /// process could not be spawned at all; a non-zero exit is reported
    /// through [`CommandOutput::exit_code`].
    fn run(&self, program: &str, args: &[String], cwd: Option<&Path>) -> io::Result<CommandOutput>;
}

/// [`CommandRunner`] backed by [`std::process::Command`].
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String], cwd: Option<&Path>) -> io::Result<CommandOutput> {
        let mut command = Command::new(program);
        command.args(args);
        if let Some(dir) = cwd {
            command.current_dir(dir);
        }

        tracing::debug!("running: {} {}", program, args.join(" "));
        let output = command.output()?;

        Ok(CommandOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}
