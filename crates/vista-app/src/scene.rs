//! A configured sky view plus horizon ridge, ready to report.

use std::io::Write;
use std::str::FromStr;

use glam::DVec2;
use vista_config::{Config, SkyConfig, TerrainConfig};
use vista_sky::{
    BrightStar, CatalogError, DisplayRotation, Observer, PanDirection, ProjectionMode, Rgba,
    SkyError, SkyProjector, Viewport, load_catalog,
};
use vista_terrain::{NoiseField, RidgeParams, RidgeProfile};

/// Errors from building or reporting a scene.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// Projection or observer update failed.
    #[error(transparent)]
    Sky(#[from] SkyError),

    /// The star catalog could not be loaded.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// A pan argument was not `<direction>:<degrees>`.
    #[error("invalid pan {0:?}: expected <up|down|left|right>:<degrees>")]
    InvalidPan(String),

    /// Writing the report failed.
    #[error("failed to write report: {0}")]
    Write(#[from] std::io::Error),
}

/// One pan instruction, parsed from `<direction>:<degrees>`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanStep {
    pub direction: PanDirection,
    pub degrees: f64,
}

impl FromStr for PanStep {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SceneError::InvalidPan(s.to_string());
        let (direction, degrees) = s.split_once(':').ok_or_else(invalid)?;
        Ok(Self {
            direction: direction.parse()?,
            degrees: degrees.trim().parse().map_err(|_| invalid())?,
        })
    }
}

/// A star placed on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedStar {
    pub id: String,
    pub name: Option<String>,
    pub position: DVec2,
    pub color: Rgba,
    pub size: f64,
}

/// Observer, projector, catalog and ridge for one viewport.
#[derive(Debug)]
pub struct Scene {
    projector: SkyProjector,
    observer: Observer,
    viewport: Viewport,
    stars: Vec<BrightStar>,
    ridge: RidgeProfile,
}

impl Scene {
    /// Build a scene from config, loading the catalog if one is configured.
    pub fn from_config(config: &Config) -> Result<Self, SceneError> {
        let stars = match &config.sky.catalog {
            Some(path) => load_catalog(path)?,
            None => {
                log::info!("No star catalog configured");
                Vec::new()
            }
        };
        Self::with_stars(config, stars)
    }

    /// Build a scene from config with an already loaded catalog.
    pub fn with_stars(config: &Config, stars: Vec<BrightStar>) -> Result<Self, SceneError> {
        let projector = SkyProjector::new(DisplayRotation::from_degrees(
            config.sky.display_rotation_deg,
        ))
        .with_marker_size(config.sky.marker_size);
        let observer = observer_from_config(&config.sky)?;
        let viewport = Viewport::new(config.viewport.width, config.viewport.height);
        viewport.validate()?;

        Ok(Self {
            projector,
            observer,
            viewport,
            stars,
            ridge: ridge_from_config(&config.terrain),
        })
    }

    pub fn observer(&self) -> &Observer {
        &self.observer
    }

    pub fn ridge(&self) -> &RidgeProfile {
        &self.ridge
    }

    /// Pan the observer by one step.
    pub fn pan(&mut self, step: PanStep) -> Result<(), SceneError> {
        self.observer = self
            .projector
            .pan(&self.observer, step.direction, step.degrees)?;
        log::debug!(
            "Panned {:?} {}: now at ({:.3}, {:.3})",
            step.direction,
            step.degrees,
            self.observer.longitude,
            self.observer.latitude
        );
        Ok(())
    }

    /// Stars that land on screen, in catalog order.
    pub fn visible_stars(&self) -> Result<Vec<PlacedStar>, SceneError> {
        let frame = self.projector.frame(&self.observer, self.viewport)?;
        Ok(frame
            .visible_stars(&self.stars)
            .map(|(bright, position)| PlacedStar {
                id: bright.star().id().to_string(),
                name: bright.name().map(str::to_string),
                position,
                color: bright.star().color(),
                size: bright.star().marker_size(),
            })
            .collect())
    }

    /// Write a plain-text report of the view and the ridge.
    pub fn write_report(&self, out: &mut impl Write) -> Result<(), SceneError> {
        let o = &self.observer;
        writeln!(
            out,
            "observer lon={:.3} lat={:.3} rotation={:.3} fov={}x{} projection={}",
            o.longitude, o.latitude, o.rotation, o.horizontal_fov, o.vertical_fov, o.projection
        )?;

        let stars = self.visible_stars()?;
        writeln!(out, "stars {} of {} visible", stars.len(), self.stars.len())?;
        for star in &stars {
            let [r, g, b, _] = star.color;
            writeln!(
                out,
                "  {} {:>9.2} {:>9.2} size={:.2} #{r:02x}{g:02x}{b:02x} {}",
                star.id,
                star.position.x,
                star.position.y,
                star.size,
                star.name.as_deref().unwrap_or("")
            )?;
        }

        writeln!(out, "ridge {} columns", self.ridge.len())?;
        for point in self.ridge.points() {
            writeln!(
                out,
                "  x={:>7.1} crest={:>4} foot={:>4}{}",
                point.x,
                point.crest,
                point.foot,
                if point.rising { " rising" } else { "" }
            )?;
        }
        Ok(())
    }
}

/// Observer at the configured pointing.
///
/// # Errors
///
/// Fails on a degenerate field of view.
pub fn observer_from_config(sky: &SkyConfig) -> Result<Observer, SkyError> {
    let observer = Observer {
        longitude: sky.longitude,
        latitude: sky.latitude,
        rotation: sky.rotation,
        horizontal_fov: sky.horizontal_fov,
        vertical_fov: sky.vertical_fov,
        projection: sky.projection,
    };
    observer.validate_fov()?;
    Ok(observer)
}

/// Horizon ridge from terrain config.
pub fn ridge_from_config(terrain: &TerrainConfig) -> RidgeProfile {
    let params = RidgeParams {
        step: terrain.step,
        octaves: terrain.octaves,
        randomized: terrain.randomized,
        upper_offset: terrain.upper_offset,
        lower_offset: terrain.lower_offset,
        ..Default::default()
    };
    let field = match terrain.seed {
        Some(seed) => NoiseField::with_seed(params.noise_params(), seed),
        None => NoiseField::new(params.noise_params()),
    };
    RidgeProfile::generate_with(terrain.width, &params, &field)
}
