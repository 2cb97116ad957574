//! Errors from loading and saving `config.ron`.

use std::path::PathBuf;

/// A config file operation that failed, with the file it failed on.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config directory or file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid RON, or names an unknown setting value.
    #[error("invalid config in {}: {source}", path.display())]
    ParseError {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    /// The settings could not be turned into RON.
    #[error("failed to serialize config: {0}")]
    SerializeError(#[source] ron::Error),
}

impl ConfigError {
    /// The file or directory involved, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::ReadError { path, .. }
            | Self::WriteError { path, .. }
            | Self::ParseError { path, .. } => Some(path.as_path()),
            Self::SerializeError(_) => None,
        }
    }
}
