//! Platform directory resolution.
//!
//! Config and log locations follow OS conventions (XDG on Linux, Known Folders on
//! Windows, Library on macOS). All platform-specific lookups go through `dirs`.

use std::fmt;
use std::path::{Path, PathBuf};

/// Errors that can occur during platform operations.
#[derive(Debug)]
pub enum PlatformError {
    /// The OS did not provide a configuration directory.
    NoConfigDir,
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoConfigDir => write!(f, "could not determine OS configuration directory"),
        }
    }
}

impl std::error::Error for PlatformError {}

/// Directories used by the `vista` binary.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformDirs {
    /// Holds `config.ron`.
    pub config_dir: PathBuf,
    /// JSON log files from debug builds.
    pub log_dir: PathBuf,
}

const APP_NAME: &str = "vista";

impl PlatformDirs {
    /// Resolve the OS config location without touching the disk.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::NoConfigDir`] if the OS does not expose a
    /// configuration directory.
    pub fn resolve() -> Result<Self, PlatformError> {
        let config_base = dirs::config_dir().ok_or(PlatformError::NoConfigDir)?;
        Ok(Self::resolve_with_root(&config_base))
    }

    /// Use an explicit config directory, as given by `--config`.
    ///
    /// Logs go to a `logs` directory beside `config.ron`.
    pub fn from_config_dir(config_dir: &Path) -> Self {
        Self {
            config_dir: config_dir.to_path_buf(),
            log_dir: config_dir.join("logs"),
        }
    }

    /// Resolve directories rooted under a custom base path.
    pub fn resolve_with_root(root: &Path) -> Self {
        Self::from_config_dir(&root.join(APP_NAME))
    }
}
