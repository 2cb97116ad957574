//! Observer pointing state and pan transforms.

use std::fmt;
use std::str::FromStr;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::coords::wrap_degrees;
use crate::{DisplayRotation, SkyError};

/// Projection used to lay the sky out on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectionMode {
    /// Orthographic globe view. Not implemented; projecting with it fails.
    Orthographic,
    /// Equirectangular map with the galactic plane running horizontally.
    #[default]
    EquirectangularHorizontal,
    /// Equirectangular map with the galactic plane running vertically.
    EquirectangularVertical,
}

impl fmt::Display for ProjectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Orthographic => "orthographic",
            Self::EquirectangularHorizontal => "equirectangular",
            Self::EquirectangularVertical => "equirectangular-vertical",
        };
        f.write_str(name)
    }
}

impl FromStr for ProjectionMode {
    type Err = SkyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "orthographic" => Ok(Self::Orthographic),
            "equirectangular" | "equirectangular-horizontal" | "horizontal" => {
                Ok(Self::EquirectangularHorizontal)
            }
            "equirectangular-vertical" | "vertical" => Ok(Self::EquirectangularVertical),
            _ => Err(SkyError::UnknownProjection(s.to_string())),
        }
    }
}

/// Screen-relative pan direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanDirection {
    /// Toward the top of the screen.
    Up,
    /// Toward the bottom of the screen.
    Down,
    /// Toward the left of the screen.
    Left,
    /// Toward the right of the screen.
    Right,
}

impl FromStr for PanDirection {
    type Err = SkyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(SkyError::UnknownPanDirection(s.to_string())),
        }
    }
}

/// Where the observer is looking, in galactic degrees, and how wide they see.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Observer {
    /// Galactic longitude of the view direction, degrees.
    pub longitude: f64,
    /// Galactic latitude of the view direction, degrees.
    pub latitude: f64,
    /// Tilt of the field of view relative to galactic coordinates, degrees.
    pub rotation: f64,
    /// Horizontal field of view, degrees.
    pub horizontal_fov: f64,
    /// Vertical field of view, degrees.
    pub vertical_fov: f64,
    /// Projection used by the renderer.
    pub projection: ProjectionMode,
}

impl Default for Observer {
    fn default() -> Self {
        Self {
            longitude: 0.0,
            latitude: 0.0,
            rotation: 0.0,
            horizontal_fov: 120.0,
            vertical_fov: 90.0,
            projection: ProjectionMode::default(),
        }
    }
}

impl Observer {
    /// Default observer pointed at the given galactic direction (degrees).
    pub fn looking_at(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
            ..Default::default()
        }
    }

    /// Pan by `degrees` in a screen direction.
    ///
    /// The step is turned back through `rotation + display.degrees()`, the same
    /// way [`DisplayRotation::remap`] turns the map, so "up" moves the map along
    /// the same screen axis whatever the display rotation. Longitude and
    /// latitude come back wrapped into `[-180, 180)`.
    ///
    /// The pointing offset divides both axes by 360 while the map spans only
    /// 180 degrees of latitude, so a degree of latitude moves the map half as
    /// far as a degree of longitude. The step is built in those screen units and
    /// latitude is scaled back up after the turn.
    ///
    /// # Errors
    ///
    /// Returns [`SkyError::InvalidPanDistance`] if `degrees` is negative or not finite.
    pub fn pan(
        &self,
        direction: PanDirection,
        degrees: f64,
        display: DisplayRotation,
    ) -> Result<Self, SkyError> {
        if !degrees.is_finite() || degrees < 0.0 {
            return Err(SkyError::InvalidPanDistance(degrees));
        }

        // Map movement on screen, in longitude-degree units, before the turn.
        let step = match direction {
            PanDirection::Up => DVec2::new(0.0, 0.5),
            PanDirection::Down => DVec2::new(0.0, -0.5),
            PanDirection::Left => DVec2::new(1.0, 0.0),
            PanDirection::Right => DVec2::new(-1.0, 0.0),
        } * degrees;
        let turn = (self.rotation + display.degrees()).to_radians();
        let offset = DVec2::from_angle(-turn).rotate(step);

        Ok(Self {
            longitude: wrap_degrees(self.longitude - offset.x),
            latitude: wrap_degrees(self.latitude - 2.0 * offset.y),
            ..*self
        })
    }

    /// Pan toward the top of the screen.
    pub fn pan_up(&self, degrees: f64, display: DisplayRotation) -> Result<Self, SkyError> {
        self.pan(PanDirection::Up, degrees, display)
    }

    /// Pan toward the bottom of the screen.
    pub fn pan_down(&self, degrees: f64, display: DisplayRotation) -> Result<Self, SkyError> {
        self.pan(PanDirection::Down, degrees, display)
    }

    /// Pan toward the left of the screen.
    pub fn pan_left(&self, degrees: f64, display: DisplayRotation) -> Result<Self, SkyError> {
        self.pan(PanDirection::Left, degrees, display)
    }

    /// Pan toward the right of the screen.
    pub fn pan_right(&self, degrees: f64, display: DisplayRotation) -> Result<Self, SkyError> {
        self.pan(PanDirection::Right, degrees, display)
    }

    /// Check that both fields of view are finite and positive.
    ///
    /// # Errors
    ///
    /// Returns [`SkyError::InvalidFieldOfView`] otherwise.
    pub fn validate_fov(&self) -> Result<(), SkyError> {
        let valid = |fov: f64| fov.is_finite() && fov > 0.0;
        if valid(self.horizontal_fov) && valid(self.vertical_fov) {
            Ok(())
        } else {
            Err(SkyError::InvalidFieldOfView {
                horizontal: self.horizontal_fov,
                vertical: self.vertical_fov,
            })
        }
    }
}
