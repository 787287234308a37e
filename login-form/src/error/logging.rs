//! Logging setup error types

use std::path::PathBuf;

/// Errors that can occur while installing the file logger.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The log file or its directory could not be created.
    #[error("Failed to create log file {}: {source}", .path.display())]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A global logger is already installed.
    #[error("Logger already initialized: {0}")]
    AlreadySet(#[from] log::SetLoggerError),
}
