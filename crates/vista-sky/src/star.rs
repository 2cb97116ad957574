//! Star records: the minimal projected star and the named bright-star variant.

use serde::{Deserialize, Serialize};

use crate::appearance::{Rgba, bright_marker_size, bv_to_rgba};
use crate::coords::{GalacticCoords, equatorial_to_galactic_rad};

/// A star positioned in galactic coordinates.
///
/// Longitude and latitude are stored in radians; degree conversion happens only
/// in the constructors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Star {
    id: String,
    longitude: f64,
    latitude: f64,
    magnitude: f64,
    bv_index: f64,
}

impl Star {
    /// Create a star from galactic coordinates in radians.
    pub fn new(
        id: impl Into<String>,
        longitude: f64,
        latitude: f64,
        magnitude: f64,
        bv_index: f64,
    ) -> Self {
        Self {
            id: id.into(),
            longitude,
            latitude,
            magnitude,
            bv_index,
        }
    }

    /// Create a star from galactic coordinates in degrees.
    pub fn from_degrees(
        id: impl Into<String>,
        longitude: f64,
        latitude: f64,
        magnitude: f64,
        bv_index: f64,
    ) -> Self {
        Self::new(
            id,
            longitude.to_radians(),
            latitude.to_radians(),
            magnitude,
            bv_index,
        )
    }

    /// Create a star from equatorial coordinates in degrees.
    pub fn from_equatorial_deg(
        id: impl Into<String>,
        right_ascension: f64,
        declination: f64,
        magnitude: f64,
        bv_index: f64,
    ) -> Self {
        let g = equatorial_to_galactic_rad(right_ascension.to_radians(), declination.to_radians());
        Self::new(id, g.longitude, g.latitude, magnitude, bv_index)
    }

    /// Stable identifier, unique within a catalog.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Galactic longitude in radians.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Galactic latitude in radians.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Galactic position in radians.
    pub fn galactic(&self) -> GalacticCoords {
        GalacticCoords {
            longitude: self.longitude,
            latitude: self.latitude,
        }
    }

    /// Apparent visual magnitude (lower is brighter).
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// B-V colour index.
    pub fn bv_index(&self) -> f64 {
        self.bv_index
    }

    /// Display colour derived from the B-V index.
    pub fn color(&self) -> Rgba {
        bv_to_rgba(self.bv_index)
    }

    /// Marker diameter in pixels derived from the magnitude.
    pub fn marker_size(&self) -> f64 {
        bright_marker_size(self.magnitude)
    }
}

impl AsRef<Star> for Star {
    fn as_ref(&self) -> &Star {
        self
    }
}

/// Catalog metadata for a named bright star.
///
/// RA/DEC are in degrees. `glon`/`glat` are galactic radians; when absent they
/// are derived from RA/DEC.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogEntry {
    /// Proper name, often empty.
    pub name: String,
    /// Bayer letter or Greek abbreviation; may contain `_` and `^`.
    pub bayer_star: String,
    /// Three-letter constellation abbreviation, such as `Ori`.
    pub bayer_constellation: String,
    /// Component designation in a multiple system (`A`, `AB`, ...).
    pub multi_star_designation: String,
    /// Right ascension, degrees.
    pub ra: f64,
    /// Declination, degrees.
    pub dec: f64,
    /// Galactic longitude, radians.
    pub glon: Option<f64>,
    /// Galactic latitude, radians.
    pub glat: Option<f64>,
    /// Apparent visual magnitude.
    pub magnitude: f64,
    /// B-V colour index.
    pub bv_index: f64,
    /// Spectral classification.
    pub spectral_type: String,
    /// Parallax angle, arcseconds.
    pub parallax: Option<f64>,
    /// Absolute visual magnitude.
    pub absolute_magnitude: Option<f64>,
    /// Distance, light-years.
    pub distance_ly: Option<f64>,
    /// Proper motion, arcseconds per year.
    pub proper_motion: Option<f64>,
    /// Position angle of the proper motion, degrees.
    pub position_angle: Option<f64>,
    /// Radial velocity, km/s.
    pub radial_velocity: Option<f64>,
    /// Free-form remarks.
    pub remarks: String,
}

/// A named star from the bright star catalog.
#[derive(Clone, Debug, PartialEq)]
pub struct BrightStar {
    star: Star,
    entry: CatalogEntry,
}

impl BrightStar {
    /// Build a bright star from its catalog entry.
    pub fn from_entry(entry: CatalogEntry) -> Self {
        let galactic = match (entry.glon, entry.glat) {
            (Some(longitude), Some(latitude)) => GalacticCoords {
                longitude,
                latitude,
            },
            _ => equatorial_to_galactic_rad(entry.ra.to_radians(), entry.dec.to_radians()),
        };
        let id = bayer_id(&entry.bayer_star, &entry.bayer_constellation);
        let star = Star::new(
            id,
            galactic.longitude,
            galactic.latitude,
            entry.magnitude,
            entry.bv_index,
        );
        Self { star, entry }
    }

    /// The projectable star.
    pub fn star(&self) -> &Star {
        &self.star
    }

    /// The catalog metadata this star was built from.
    pub fn entry(&self) -> &CatalogEntry {
        &self.entry
    }

    /// Proper name, or `None` when the catalog has none.
    pub fn name(&self) -> Option<&str> {
        Some(self.entry.name.as_str()).filter(|n| !n.is_empty())
    }
}

impl AsRef<Star> for BrightStar {
    fn as_ref(&self) -> &Star {
        &self.star
    }
}

/// Identifier for a Bayer-designated star, safe for use as an element id.
///
/// The first `_` in the letter becomes `_sub_` and the first `^` becomes `_sup_`.
pub fn bayer_id(bayer_star: &str, constellation: &str) -> String {
    let letter = bayer_star.replacen('_', "_sub_", 1).replacen('^', "_sup_", 1);
    format!("star_bayer_{letter}_{constellation}")
}
