//! Command-line argument parsing for the `vista` tool.

use std::path::PathBuf;

use clap::Parser;
use vista_sky::ProjectionMode;

use crate::Config;

/// Vista command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "vista", about = "Project a star catalog and a horizon ridge onto a viewport")]
pub struct CliArgs {
    /// Viewport width in pixels.
    #[arg(long)]
    pub width: Option<f64>,

    /// Viewport height in pixels.
    #[arg(long)]
    pub height: Option<f64>,

    /// Display rotation of the galactic grid, degrees.
    #[arg(long, allow_hyphen_values = true)]
    pub rotation: Option<f64>,

    /// Projection (equirectangular, equirectangular-vertical, orthographic).
    #[arg(long)]
    pub projection: Option<ProjectionMode>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Bright star catalog (RON).
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Pan the view before projecting, as `<up|down|left|right>:<degrees>`. Repeatable.
    #[arg(long = "pan", value_name = "DIR:DEG")]
    pub pans: Vec<String>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.viewport.width = w;
        }
        if let Some(h) = args.height {
            self.viewport.height = h;
        }
        if let Some(r) = args.rotation {
            self.sky.display_rotation_deg = r;
        }
        if let Some(projection) = args.projection {
            self.sky.projection = projection;
        }
        if let Some(ref catalog) = args.catalog {
            self.sky.catalog = Some(catalog.clone());
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            width: Some(1920.0),
            rotation: Some(-90.0),
            catalog: Some(PathBuf::from("bright.ron")),
            ..Default::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.viewport.width, 1920.0);
        assert_eq!(config.sky.display_rotation_deg, -90.0);
        assert_eq!(config.sky.catalog, Some(PathBuf::from("bright.ron")));
        // Non-overridden fields retain defaults
        assert_eq!(config.viewport.height, 720.0);
        assert_eq!(config.sky.projection, ProjectionMode::EquirectangularHorizontal);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_cli_parses_flags() {
        let args = CliArgs::try_parse_from([
            "vista",
            "--width",
            "800",
            "--rotation",
            "-90",
            "--projection",
            "equirectangular-vertical",
            "--pan",
            "up:10",
            "--pan",
            "left:5.5",
        ])
        .unwrap();
        assert_eq!(args.width, Some(800.0));
        assert_eq!(args.rotation, Some(-90.0));
        assert_eq!(args.projection, Some(ProjectionMode::EquirectangularVertical));
        assert_eq!(args.pans, vec!["up:10".to_string(), "left:5.5".to_string()]);
    }

    #[test]
    fn test_cli_rejects_unknown_projection() {
        let result = CliArgs::try_parse_from(["vista", "--projection", "mercator"]);
        assert!(result.is_err());
    }
}
