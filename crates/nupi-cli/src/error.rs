//! Error types for nupi-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from nupi-core
    #[error(transparent)]
    Core(#[from] nupi_core::Error),
}
