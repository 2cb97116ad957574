//! The binary entry point for the `vista` tool.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, warn};
use vista_app::{PanStep, PlatformDirs, Scene, SceneError};
use vista_config::{CliArgs, Config};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Resolve config directory
    let dirs = match &args.config {
        Some(dir) => PlatformDirs::from_config_dir(dir),
        None => match PlatformDirs::resolve() {
            Ok(dirs) => dirs,
            Err(e) => {
                eprintln!("Failed to resolve platform directories: {e}");
                return ExitCode::FAILURE;
            }
        },
    };

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&dirs.config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    vista_log::init_logging(Some(&dirs.log_dir), cfg!(debug_assertions), Some(&config));

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("vista: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs, config: &Config) -> Result<(), SceneError> {
    let pans = args
        .pans
        .iter()
        .map(|pan| pan.parse::<PanStep>())
        .collect::<Result<Vec<_>, _>>()?;

    let mut scene = Scene::from_config(config)?;
    for step in pans {
        scene.pan(step)?;
    }

    info!(
        "Viewport {}x{}, display rotation {} deg",
        config.viewport.width, config.viewport.height, config.sky.display_rotation_deg
    );
    if scene.ridge().is_empty() {
        warn!("Ridge profile is empty; check terrain.step");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    scene.write_report(&mut out)?;
    out.flush()?;
    Ok(())
}
