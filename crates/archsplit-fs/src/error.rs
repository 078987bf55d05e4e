//! Error types for archsplit-fs

use std::path::PathBuf;

/// Result type for archsplit-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in archsplit-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not valid UTF-8 text")]
    InvalidUtf8 { path: PathBuf },
}

impl Error {
    /// Wraps an I/O error with the path it occurred on.
    ///
    /// `InvalidData` from a text read means the file failed to decode.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::InvalidData {
            return Self::InvalidUtf8 { path };
        }
        Self::Io { path, source }
    }
}
