//! File logging setup.

use std::fs::{self, File};
use std::path::Path;

use simplelog::{Config, LevelFilter, WriteLogger};

use crate::error::LoggingError;

/// Install a global logger writing to `path`, truncating any previous log.
pub fn init_file_logger(path: impl AsRef<Path>, level: LevelFilter) -> Result<(), LoggingError> {
    let path = path.as_ref();
    let create_error = |source| LoggingError::CreateFile {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(create_error)?;
    }
    let log_file = File::create(path).map_err(create_error)?;
    WriteLogger::init(level, Config::default(), log_file)?;
    Ok(())
}
