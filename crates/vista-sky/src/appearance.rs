//! Star appearance: colour from the B-V index and marker size from magnitude.

/// An 8-bit RGBA colour.
pub type Rgba = [u8; 4];

/// Largest radius of a bright star marker, in pixels.
pub const MAX_STAR_RADIUS: f64 = 4.0;

/// Fallback colour for B-V indices outside every band.
pub const DEFAULT_STAR_COLOR: Rgba = [255, 255, 255, 255];

struct ColorBand {
    min_bv: f64,
    max_bv: f64,
    rgb: [u8; 3],
}

// Blue, white, yellow, orange, red. Each band fades toward the next one.
const COLOR_BANDS: [ColorBand; 5] = [
    ColorBand {
        min_bv: -0.5,
        max_bv: 0.5,
        rgb: [128, 128, 255],
    },
    ColorBand {
        min_bv: 0.5,
        max_bv: 1.0,
        rgb: [255, 255, 255],
    },
    ColorBand {
        min_bv: 1.0,
        max_bv: 1.5,
        rgb: [255, 255, 128],
    },
    ColorBand {
        min_bv: 1.5,
        max_bv: 2.0,
        rgb: [255, 188, 128],
    },
    ColorBand {
        min_bv: 2.0,
        max_bv: 3.0,
        rgb: [255, 128, 128],
    },
];

/// Map a B-V colour index to an opaque RGBA colour.
///
/// Bluer stars have negative indices, redder stars positive ones. Indices outside
/// `[-0.5, 3.0)` (and NaN) fall back to [`DEFAULT_STAR_COLOR`].
pub fn bv_to_rgba(bv: f64) -> Rgba {
    let Some(index) = COLOR_BANDS
        .iter()
        .position(|band| bv >= band.min_bv && bv < band.max_bv)
    else {
        return DEFAULT_STAR_COLOR;
    };

    let band = &COLOR_BANDS[index];
    // The reddest band has nothing to fade into.
    let next = COLOR_BANDS.get(index + 1).unwrap_or(band);
    let proportion = (bv - band.min_bv) / (band.max_bv - band.min_bv);

    let channel = |i: usize| {
        let from = f64::from(band.rgb[i]);
        let to = f64::from(next.rgb[i]);
        (from + proportion * (to - from)).round().clamp(0.0, 255.0) as u8
    };
    [channel(0), channel(1), channel(2), 255]
}

/// Marker diameter in pixels for a star of apparent `magnitude`.
///
/// Brighter (lower magnitude) stars get larger markers, clamped to `[1, max_size]`.
pub fn marker_size(magnitude: f64, max_size: f64) -> f64 {
    let shifted = magnitude + 2.0;
    if !(shifted > 0.0) {
        // log10 is undefined here; these are the brightest objects in the sky.
        return max_size.max(1.0);
    }
    (max_size - shifted.log10() * 5.0).clamp(1.0, max_size.max(1.0))
}

/// Marker diameter for a bright star, using the default maximum.
pub fn bright_marker_size(magnitude: f64) -> f64 {
    marker_size(magnitude, MAX_STAR_RADIUS * 2.0)
}

/// Dot radius for a low-detail background star.
pub fn background_radius(magnitude: f64) -> f64 {
    (bright_marker_size(magnitude) / 4.0).ceil()
}
