//! Bright star catalog loading from RON files.
//!
//! A catalog file is a RON list of [`CatalogEntry`] records:
//!
//! ```ron
//! [
//!     (name: "Sirius", bayer_star: "alp", bayer_constellation: "CMa",
//!      ra: 101.2871, dec: -16.7161, magnitude: -1.46, bv_index: 0.0),
//! ]
//! ```

use std::path::Path;

use crate::CatalogError;
use crate::star::{BrightStar, CatalogEntry};

/// Parse a catalog from RON text.
///
/// Entries with a non-finite right ascension or a declination outside
/// `[-90, 90]` are skipped with a warning.
pub fn parse_catalog(contents: &str) -> Result<Vec<BrightStar>, CatalogError> {
    let entries: Vec<CatalogEntry> = ron::from_str(contents).map_err(CatalogError::Parse)?;
    let total = entries.len();

    let stars: Vec<BrightStar> = entries
        .into_iter()
        .filter(|entry| {
            let valid = entry.ra.is_finite() && (-90.0..=90.0).contains(&entry.dec);
            if !valid {
                log::warn!(
                    "Skipping catalog entry {}{} with ra={} dec={}",
                    entry.bayer_star,
                    entry.bayer_constellation,
                    entry.ra,
                    entry.dec
                );
            }
            valid
        })
        .map(BrightStar::from_entry)
        .collect();

    log::debug!("Parsed {} of {} catalog entries", stars.len(), total);
    Ok(stars)
}

/// Read and parse a catalog file.
pub fn load_catalog(path: &Path) -> Result<Vec<BrightStar>, CatalogError> {
    let contents = std::fs::read_to_string(path).map_err(CatalogError::Read)?;
    let stars = parse_catalog(&contents)?;
    log::info!("Loaded {} stars from {}", stars.len(), path.display());
    Ok(stars)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        (
            name: "Sirius",
            bayer_star: "alp",
            bayer_constellation: "CMa",
            multi_star_designation: "A",
            ra: 101.2871,
            dec: -16.7161,
            magnitude: -1.46,
            bv_index: 0.0,
            spectral_type: "A1V",
            parallax: Some(0.37921),
            distance_ly: Some(8.6),
        ),
        (
            bayer_star: "pi_3",
            bayer_constellation: "Ori",
            ra: 72.4600,
            dec: 6.9613,
            glon: Some(3.4),
            glat: Some(-0.4),
            magnitude: 3.19,
            bv_index: 0.45,
        ),
    ]"#;

    #[test]
    fn test_parse_sample_catalog() {
        let stars = parse_catalog(SAMPLE).unwrap();
        assert_eq!(stars.len(), 2);

        let sirius = &stars[0];
        assert_eq!(sirius.name(), Some("Sirius"));
        assert_eq!(sirius.star().id(), "star_bayer_alp_CMa");
        assert_eq!(sirius.entry().spectral_type, "A1V");
        assert_eq!(sirius.entry().parallax, Some(0.37921));
        assert_eq!(sirius.entry().radial_velocity, None);

        let pi3 = &stars[1];
        assert_eq!(pi3.star().id(), "star_bayer_pi_sub_3_Ori");
        assert_eq!(pi3.star().longitude(), 3.4);
        assert_eq!(pi3.name(), None);
    }

    #[test]
    fn test_invalid_declination_is_skipped() {
        let text = r#"[
            (bayer_star: "bad", bayer_constellation: "Xyz", ra: 10.0, dec: 95.0),
            (bayer_star: "ok", bayer_constellation: "Xyz", ra: 10.0, dec: 45.0),
        ]"#;
        let stars = parse_catalog(text).unwrap();
        assert_eq!(stars.len(), 1);
        assert_eq!(stars[0].star().id(), "star_bayer_ok_Xyz");
    }

    #[test]
    fn test_empty_catalog() {
        assert!(parse_catalog("[]").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_catalog_is_parse_error() {
        let err = parse_catalog("[ (ra: \"north\") ]").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)), "Expected parse error, got {err:?}");
    }

    #[test]
    fn test_load_catalog_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bright.ron");
        std::fs::write(&path, SAMPLE).unwrap();

        let stars = load_catalog(&path).unwrap();
        assert_eq!(stars.len(), 2);
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_catalog(&dir.path().join("missing.ron")).unwrap_err();
        assert!(matches!(err, CatalogError::Read(_)), "Expected read error, got {err:?}");
    }
}
