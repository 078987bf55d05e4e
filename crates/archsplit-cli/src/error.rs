//! Error types for archsplit-cli

use std::path::PathBuf;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Wrong arguments; carries the rendered usage text
    #[error("{usage}")]
    Usage { usage: String },

    /// The input header does not exist
    #[error("Error: Input file {} does not exist", path.display())]
    MissingInput { path: PathBuf },

    /// Error from archsplit-fs
    #[error(transparent)]
    Fs(#[from] archsplit_fs::Error),
}

impl CliError {
    /// Validation failures are reported on stdout; everything else on stderr.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Usage { .. } | Self::MissingInput { .. })
    }
}
