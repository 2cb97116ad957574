//! Equatorial to galactic coordinate conversion (J2000.0) and angle wrapping.
//!
//! Reference frame constants, in radians:
//!
//! | Constant | Degrees | Meaning |
//! |----------|---------|---------|
//! | [`GALACTIC_POLE_RA`] | 192.8595 | right ascension of the north galactic pole |
//! | [`GALACTIC_POLE_DEC`] | 27.1284 | declination of the north galactic pole |
//! | [`ASCENDING_NODE_LON`] | 122.9320 | galactic longitude of the north celestial pole |

use serde::{Deserialize, Serialize};

/// Right ascension of the north galactic pole (J2000.0), radians.
pub const GALACTIC_POLE_RA: f64 = 3.366_033_268_750_004;

/// Declination of the north galactic pole (J2000.0), radians.
pub const GALACTIC_POLE_DEC: f64 = 0.473_479_900_798_029_7;

/// Galactic longitude of the north celestial pole (J2000.0), radians.
pub const ASCENDING_NODE_LON: f64 = 2.145_568_156_061_669;

/// A galactic longitude/latitude pair. Units depend on the producing function.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GalacticCoords {
    /// Galactic longitude (l).
    pub longitude: f64,
    /// Galactic latitude (b).
    pub latitude: f64,
}

/// Convert equatorial coordinates in radians to galactic coordinates in radians.
///
/// The longitude is not normalized and may fall outside `[0, 2π)`.
/// Declinations outside `[-π/2, π/2]` are not rejected; NaN input yields NaN.
pub fn equatorial_to_galactic_rad(right_ascension: f64, declination: f64) -> GalacticCoords {
    let delta_ra = right_ascension - GALACTIC_POLE_RA;
    let (sin_dec, cos_dec) = declination.sin_cos();
    let (sin_pole, cos_pole) = GALACTIC_POLE_DEC.sin_cos();
    let cos_delta_ra = delta_ra.cos();

    // tan(l0 - l) = cos(δ) sin(Δα) / (sin(δ) cos(δ0) - cos(δ) sin(δ0) cos(Δα))
    let numerator = cos_dec * delta_ra.sin();
    let denominator = sin_dec * cos_pole - cos_dec * sin_pole * cos_delta_ra;
    let longitude = ASCENDING_NODE_LON - numerator.atan2(denominator);

    // Rounding can push sin(b) a hair past ±1 at the poles.
    let sin_lat = sin_dec * sin_pole + cos_dec * cos_pole * cos_delta_ra;
    let latitude = sin_lat.clamp(-1.0, 1.0).asin();

    GalacticCoords {
        longitude,
        latitude,
    }
}

/// Convert equatorial coordinates in degrees to galactic coordinates in degrees.
///
/// The longitude is normalized into `[0, 360)`.
pub fn equatorial_to_galactic_deg(right_ascension: f64, declination: f64) -> GalacticCoords {
    let rad = equatorial_to_galactic_rad(right_ascension.to_radians(), declination.to_radians());
    let longitude = rad.longitude.to_degrees();
    GalacticCoords {
        longitude: if longitude < 0.0 {
            longitude + 360.0
        } else {
            longitude
        },
        latitude: rad.latitude.to_degrees(),
    }
}

/// Wrap an angle in degrees into `[-180, 180)`.
pub fn wrap_degrees(angle: f64) -> f64 {
    (angle + 180.0).rem_euclid(360.0) - 180.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    const TOLERANCE_DEG: f64 = 1e-6;

    #[test]
    fn test_galactic_pole_maps_to_latitude_90() {
        let g = equatorial_to_galactic_deg(192.8595, 27.1284);
        assert!(
            (g.latitude - 90.0).abs() < 1e-4,
            "Galactic pole should map to b = 90, got {}",
            g.latitude
        );
    }

    #[test]
    fn test_celestial_pole_maps_to_node_longitude() {
        let g = equatorial_to_galactic_deg(0.0, 90.0);
        assert!(
            (g.longitude - 122.932).abs() < 1e-3,
            "North celestial pole longitude should be 122.932, got {}",
            g.longitude
        );
        assert!(
            (g.latitude - 27.1284).abs() < 1e-3,
            "North celestial pole latitude should be 27.1284, got {}",
            g.latitude
        );
    }

    #[test]
    fn test_galactic_center_near_origin() {
        // Sagittarius A*
        let g = equatorial_to_galactic_deg(266.41683, -29.00781);
        let lon_offset = g.longitude.min(360.0 - g.longitude);
        assert!(lon_offset < 0.1, "Sgr A* longitude {} should be near 0", g.longitude);
        assert!(g.latitude.abs() < 0.1, "Sgr A* latitude {} should be near 0", g.latitude);
    }

    #[test]
    fn test_degree_longitude_normalized() {
        for ra in (0..36).map(|i| i as f64 * 10.0) {
            for dec in [-80.0, -30.0, 0.0, 45.0, 85.0] {
                let g = equatorial_to_galactic_deg(ra, dec);
                assert!(
                    (0.0..360.0).contains(&g.longitude),
                    "Longitude {} outside [0, 360) for ra={ra}, dec={dec}",
                    g.longitude
                );
                assert!((-90.0..=90.0).contains(&g.latitude));
            }
        }
    }

    #[test]
    fn test_radian_and_degree_variants_agree() {
        let (ra, dec) = (83.633_f64, 22.0145_f64);
        let deg = equatorial_to_galactic_deg(ra, dec);
        let rad = equatorial_to_galactic_rad(ra.to_radians(), dec.to_radians());

        let rad_lon = rad.longitude.rem_euclid(TAU).to_degrees();
        assert!((deg.longitude - rad_lon).abs() < TOLERANCE_DEG);
        assert!((deg.latitude - rad.latitude.to_degrees()).abs() < TOLERANCE_DEG);
    }

    #[test]
    fn test_radian_longitude_not_normalized() {
        // Sgr A* lands just below l0 - π in raw form, never wrapped.
        let rad = equatorial_to_galactic_rad(266.41683_f64.to_radians(), (-29.00781_f64).to_radians());
        assert!(rad.longitude < 0.0, "Raw longitude {} expected negative", rad.longitude);
    }

    #[test]
    fn test_nan_declination_propagates() {
        let g = equatorial_to_galactic_deg(10.0, f64::NAN);
        assert!(g.longitude.is_nan() && g.latitude.is_nan());
    }

    #[test]
    fn test_wrap_degrees() {
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert_eq!(wrap_degrees(180.0), -180.0);
        assert_eq!(wrap_degrees(-180.0), -180.0);
        assert_eq!(wrap_degrees(190.0), -170.0);
        assert_eq!(wrap_degrees(-190.0), 170.0);
        assert_eq!(wrap_degrees(720.0 + 45.0), 45.0);
        assert_eq!(wrap_degrees(-725.0), -5.0);
    }
}
