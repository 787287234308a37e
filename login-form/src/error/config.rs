//! Configuration error types

use std::path::PathBuf;

/// Errors that can occur while loading or applying a form configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON for a form config.
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configuration's top level is not a JSON object.
    #[error("Config must be a JSON object")]
    NotAnObject,

    /// The configured email pattern does not compile.
    #[error("Invalid email pattern '{pattern}': {source}")]
    EmailPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
