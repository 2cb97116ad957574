//! Fixed display rotation of the galactic map relative to the screen.
//!
//! The four right-angle cases are exact axis swaps and sign flips; any other
//! angle rotates the canonical offset about the map centre. Map placement and
//! star placement share [`DisplayRotation::remap`], so both always turn together.

use glam::DVec2;

use crate::coords::wrap_degrees;

/// Rotation of the galactic coordinate grid on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DisplayRotation {
    /// Galactic longitude runs right-to-left, latitude bottom-to-top.
    #[default]
    Identity,
    /// Turned 90 degrees: longitude runs bottom-to-top.
    QuarterTurn,
    /// Turned -90 degrees: longitude runs top-to-bottom.
    NegQuarterTurn,
    /// Turned 180 degrees (also -180).
    HalfTurn,
    /// Any other angle, in degrees within `[-180, 180)`.
    Arbitrary(f64),
}

impl DisplayRotation {
    /// Classify an angle in degrees, folding equivalent angles together
    /// (270 is a negative quarter turn, -180 is a half turn).
    pub fn from_degrees(degrees: f64) -> Self {
        let wrapped = wrap_degrees(degrees);
        if wrapped == 0.0 {
            Self::Identity
        } else if wrapped == 90.0 {
            Self::QuarterTurn
        } else if wrapped == -90.0 {
            Self::NegQuarterTurn
        } else if wrapped == -180.0 {
            Self::HalfTurn
        } else {
            Self::Arbitrary(wrapped)
        }
    }

    /// The rotation angle in degrees.
    pub fn degrees(self) -> f64 {
        match self {
            Self::Identity => 0.0,
            Self::QuarterTurn => 90.0,
            Self::NegQuarterTurn => -90.0,
            Self::HalfTurn => 180.0,
            Self::Arbitrary(degrees) => degrees,
        }
    }

    /// Whether the map's width and height trade places.
    pub fn swaps_axes(self) -> bool {
        matches!(self, Self::QuarterTurn | Self::NegQuarterTurn)
    }

    /// This rotation turned a further 90 degrees.
    pub fn quarter_turned(self) -> Self {
        Self::from_degrees(self.degrees() + 90.0)
    }

    /// Map longitude/latitude fractions of a full turn to a screen offset.
    ///
    /// `lon` and `lat` are fractions of the map's extent along each galactic
    /// axis (for example `longitude / 360` and `latitude / 360` for observer
    /// pointing, `longitude / 2π` and `latitude / π` for a star). `span` is the
    /// pixel size of the map.
    pub fn remap(self, lon: f64, lat: f64, span: DVec2) -> DVec2 {
        match self {
            Self::Identity => DVec2::new(-lon, -lat) * span,
            Self::QuarterTurn => DVec2::new(lat, -lon) * span,
            Self::NegQuarterTurn => DVec2::new(-lat, lon) * span,
            Self::HalfTurn => DVec2::new(lon, lat) * span,
            Self::Arbitrary(degrees) => {
                DVec2::from_angle(degrees.to_radians()).rotate(DVec2::new(-lon, -lat) * span)
            }
        }
    }
}
