//! Equirectangular projection of galactic coordinates onto a viewport.
//!
//! A [`SkyProjector`] holds the fixed display settings. For each observer and
//! viewport it builds a [`SkyFrame`], which caches the map size and centre so that
//! projecting each star afterwards is a handful of arithmetic operations.

use std::f64::consts::{PI, TAU};

use glam::DVec2;

use crate::observer::{Observer, PanDirection, ProjectionMode};
use crate::rotation::DisplayRotation;
use crate::star::Star;
use crate::SkyError;

/// Default star marker size in pixels, used for visibility culling.
pub const DEFAULT_MARKER_SIZE: f64 = 50.0;

/// Drawable area in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Check that both dimensions are finite and positive.
    pub fn validate(&self) -> Result<(), SkyError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if valid(self.width) && valid(self.height) {
            Ok(())
        } else {
            Err(SkyError::InvalidViewport {
                width: self.width,
                height: self.height,
            })
        }
    }

    fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }
}

/// Where a star lands on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenPoint {
    /// Projected star position after wrapping into the background's period.
    pub position: DVec2,
    /// Whether any part of the marker overlaps the viewport.
    pub visible: bool,
}

/// Fixed display settings for projecting stars.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkyProjector {
    display_rotation: DisplayRotation,
    marker_size: f64,
}

impl Default for SkyProjector {
    fn default() -> Self {
        Self::new(DisplayRotation::default())
    }
}

impl SkyProjector {
    pub fn new(display_rotation: DisplayRotation) -> Self {
        Self {
            display_rotation,
            marker_size: DEFAULT_MARKER_SIZE,
        }
    }

    /// Override the marker size used for visibility culling.
    pub fn with_marker_size(mut self, marker_size: f64) -> Self {
        self.marker_size = marker_size;
        self
    }

    pub fn display_rotation(&self) -> DisplayRotation {
        self.display_rotation
    }

    pub fn marker_size(&self) -> f64 {
        self.marker_size
    }

    /// Compute the map layout for one observer and viewport.
    ///
    /// # Errors
    ///
    /// Fails for an orthographic observer, a degenerate field of view, or a
    /// degenerate viewport.
    pub fn frame(&self, observer: &Observer, viewport: Viewport) -> Result<SkyFrame, SkyError> {
        if observer.projection == ProjectionMode::Orthographic {
            return Err(SkyError::UnsupportedProjection(observer.projection));
        }
        let rotation = self.map_rotation(observer.projection);
        observer.validate_fov()?;
        viewport.validate()?;

        let size = viewport.size();
        let fov = DVec2::new(observer.horizontal_fov, observer.vertical_fov);
        let pixels_per_degree = size / fov;

        // Stretch the tighter axis so both axes share the larger pixel density.
        let mut scale = size;
        if pixels_per_degree.x > pixels_per_degree.y {
            scale.y = size.y * pixels_per_degree.x / pixels_per_degree.y;
        } else {
            scale.x = size.x * pixels_per_degree.y / pixels_per_degree.x;
        }

        let background = if rotation.swaps_axes() {
            DVec2::new(scale.x * 180.0 / fov.x, scale.y * 360.0 / fov.y)
        } else {
            DVec2::new(scale.x * 360.0 / fov.x, scale.y * 180.0 / fov.y)
        };

        let origin = (size - background) / 2.0
            + rotation.remap(observer.longitude / 360.0, observer.latitude / 360.0, background);
        let center = origin + background / 2.0;

        log::debug!(
            "Sky frame: viewport {}x{}, background {:.1}x{:.1}, centre ({:.1}, {:.1}), rotation {:?}",
            size.x,
            size.y,
            background.x,
            background.y,
            center.x,
            center.y,
            rotation
        );

        Ok(SkyFrame {
            viewport: size,
            rotation,
            background,
            origin,
            center,
            marker_size: self.marker_size,
        })
    }

    /// Project a single star. Prefer [`SkyProjector::frame`] when projecting many.
    pub fn project(
        &self,
        observer: &Observer,
        viewport: Viewport,
        star: &Star,
    ) -> Result<ScreenPoint, SkyError> {
        Ok(self.frame(observer, viewport)?.project(star))
    }

    /// Pan the observer in a screen direction, compensating for the map's turn
    /// under the observer's projection.
    pub fn pan(
        &self,
        observer: &Observer,
        direction: PanDirection,
        degrees: f64,
    ) -> Result<Observer, SkyError> {
        observer.pan(direction, degrees, self.map_rotation(observer.projection))
    }

    fn map_rotation(&self, projection: ProjectionMode) -> DisplayRotation {
        match projection {
            // The vertical layout is the horizontal one turned a further quarter.
            ProjectionMode::EquirectangularVertical => self.display_rotation.quarter_turned(),
            ProjectionMode::EquirectangularHorizontal | ProjectionMode::Orthographic => {
                self.display_rotation
            }
        }
    }
}

/// Map layout for one observer and viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkyFrame {
    viewport: DVec2,
    rotation: DisplayRotation,
    background: DVec2,
    origin: DVec2,
    center: DVec2,
    marker_size: f64,
}

impl SkyFrame {
    /// Pixel size of the full-sky map.
    pub fn background_size(&self) -> DVec2 {
        self.background
    }

    /// Top-left corner of the full-sky map, before wrapping.
    pub fn background_origin(&self) -> DVec2 {
        self.origin
    }

    /// Screen position of galactic (0, 0).
    pub fn center(&self) -> DVec2 {
        self.center
    }

    /// Effective rotation, including the vertical layout's extra quarter turn.
    pub fn rotation(&self) -> DisplayRotation {
        self.rotation
    }

    /// Unwrapped screen position of a star.
    pub fn raw_position(&self, star: &Star) -> DVec2 {
        self.center
            + self
                .rotation
                .remap(star.longitude() / TAU, star.latitude() / PI, self.background)
    }

    /// Wrap a position so the map tiles across the viewport.
    ///
    /// Each axis is reduced modulo the map size; anything past the viewport edge
    /// is moved back one period.
    pub fn wrap(&self, position: DVec2) -> DVec2 {
        let wrap_axis = |value: f64, period: f64, extent: f64| {
            let reduced = value.rem_euclid(period);
            if reduced < extent { reduced } else { reduced - period }
        };
        DVec2::new(
            wrap_axis(position.x, self.background.x, self.viewport.x),
            wrap_axis(position.y, self.background.y, self.viewport.y),
        )
    }

    /// Whether a marker at `position` overlaps the viewport.
    pub fn is_visible(&self, position: DVec2) -> bool {
        position.x + self.marker_size > 0.0
            && position.x < self.viewport.x
            && position.y + self.marker_size > 0.0
            && position.y < self.viewport.y
    }

    pub fn project(&self, star: &Star) -> ScreenPoint {
        let position = self.wrap(self.raw_position(star));
        ScreenPoint {
            position,
            visible: self.is_visible(position),
        }
    }

    /// Project every star, keeping only those on screen.
    pub fn visible_stars<'s, S: AsRef<Star>>(
        &self,
        stars: &'s [S],
    ) -> impl Iterator<Item = (&'s S, DVec2)> {
        stars.iter().filter_map(|star| {
            let point = self.project(star.as_ref());
            point.visible.then_some((star, point.position))
        })
    }
}
