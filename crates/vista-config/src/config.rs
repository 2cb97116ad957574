//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use vista_sky::ProjectionMode;

use crate::error::ConfigError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Output area settings.
    pub viewport: ViewportConfig,
    /// Sky map settings.
    pub sky: SkyConfig,
    /// Horizon terrain settings.
    pub terrain: TerrainConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Output area in pixels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewportConfig {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

/// Sky map configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SkyConfig {
    /// Fixed rotation of the galactic grid on screen, degrees.
    pub display_rotation_deg: f64,
    /// Star marker size used for visibility culling, pixels.
    pub marker_size: f64,
    /// Horizontal field of view, degrees.
    pub horizontal_fov: f64,
    /// Vertical field of view, degrees.
    pub vertical_fov: f64,
    /// How the sky is laid out on screen.
    pub projection: ProjectionMode,
    /// Initial galactic longitude of the view, degrees.
    pub longitude: f64,
    /// Initial galactic latitude of the view, degrees.
    pub latitude: f64,
    /// Observer tilt relative to galactic coordinates, degrees.
    pub rotation: f64,
    /// Bright star catalog to load, if any.
    pub catalog: Option<PathBuf>,
}

/// Horizon ridge configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TerrainConfig {
    /// Width of the ridge in pixels.
    pub width: f64,
    /// Horizontal distance between control points, pixels.
    pub step: f64,
    /// Noise octaves for the ridge line.
    pub octaves: u32,
    /// Enable sparkle (randomized lattice) mode.
    pub randomized: bool,
    /// Seed for the sparkle source. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Sample offset for the crest line.
    pub upper_offset: f64,
    /// Sample offset for the foothill line.
    pub lower_offset: f64,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

impl Default for SkyConfig {
    fn default() -> Self {
        Self {
            display_rotation_deg: 45.0,
            marker_size: 50.0,
            horizontal_fov: 120.0,
            vertical_fov: 90.0,
            projection: ProjectionMode::EquirectangularHorizontal,
            longitude: 0.0,
            latitude: 0.0,
            rotation: 0.0,
            catalog: None,
        }
    }
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            step: 20.0,
            octaves: 2,
            randomized: false,
            seed: None,
            upper_offset: 333.0,
            lower_offset: 555.0,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let config = read_config(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::WriteError {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(|source| ConfigError::WriteError {
            path: config_path.clone(),
            source,
        })?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = read_config(&config_dir.join("config.ron"))?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}

fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    ron::from_str(&contents).map_err(|source| ConfigError::ParseError {
        path: path.to_path_buf(),
        source,
    })
}
