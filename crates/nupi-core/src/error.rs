use std::path::PathBuf;

/// Errors that can occur while installing a plugin.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The package descriptor path has no usable parent directory.
    #[error("package path has no parent directory: {path}")]
    InvalidPackagePath { path: PathBuf },

    /// A required environment variable is unset or empty.
    #[error("required environment variable {var} is not set")]
    MissingEnvironment { var: &'static str },

    /// Package descriptor file not found at the expected path.
    #[error("package descriptor not found: {0}")]
    ManifestNotFound(PathBuf),

    /// Failed to read the package descriptor file.
    #[error("failed to read package descriptor {path}: {source}")]
    ManifestRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to parse the package descriptor TOML.
    #[error("failed to parse package descriptor: {0}")]
    ManifestParse(#[from] toml::de::Error),

    /// Invalid package name.
    #[error("invalid package name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// Invalid semver version string in the descriptor.
    #[error("invalid version '{version}': {source}")]
    InvalidVersion {
        version: String,
        source: semver::Error,
    },

    /// The build subprocess could not be spawned or exited non-zero.
    ///
    /// Carries the captured output verbatim so the caller can surface the
    /// build tool's own diagnostics.
    #[error("build failed{}\n{stdout}{stderr}", .exit_code.map(|c| format!(" (exit code {c})")).unwrap_or_default())]
    BuildFailed {
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
    },

    /// The host application rejected the plugin binary.
    #[error("failed to register plugin {path}: {reason}")]
    RegistrationFailed {
        path: PathBuf,
        exit_code: Option<i32>,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
