//! Horizon ridge profiles: control points for a band of noise-driven mountains.
//!
//! Each column pairs a crest height (driven by the upper noise band) with a
//! foothill height (driven by a flatter lower band). Downstream path builders
//! connect neighbouring columns with cubic segments; the `rising` flag tells
//! them which face of the peak is lit.

use crate::{NoiseField, NoiseParams};

/// Layout of a ridge band, in pixels of the target drawing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RidgeParams {
    /// Horizontal distance between columns. Also the base noise amplitude.
    pub step: f64,
    /// Baseline the crest heights are measured up from.
    pub crest_baseline: f64,
    /// Baseline the foothill heights are measured up from.
    pub foot_baseline: f64,
    /// Fraction of the lower noise band applied to the foothills.
    pub foot_scale: f64,
    /// Octaves in the shared noise field.
    pub octaves: u32,
    /// Noise-space offset of the crest band.
    pub upper_offset: f64,
    /// Noise-space offset of the foothill band.
    pub lower_offset: f64,
    /// Jitter the crest band; crests are also boosted by half a step.
    pub randomized: bool,
}

impl Default for RidgeParams {
    fn default() -> Self {
        Self {
            step: 20.0,
            crest_baseline: 40.0,
            foot_baseline: 50.0,
            foot_scale: 0.25,
            octaves: 2,
            upper_offset: 333.0,
            lower_offset: 555.0,
            randomized: false,
        }
    }
}

impl RidgeParams {
    /// Parameters of the noise field these ridge settings sample from.
    pub fn noise_params(&self) -> NoiseParams {
        NoiseParams {
            octaves: self.octaves,
            amplitude: self.step,
            randomized: self.randomized,
            ..Default::default()
        }
    }
}

/// One column of a ridge profile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RidgePoint {
    /// Horizontal position.
    pub x: f64,
    /// Raw crest noise height above the crest baseline.
    pub peak: f64,
    /// Screen-space y of the crest (rounded half-up).
    pub crest: f64,
    /// Screen-space y of the foothill line (rounded half-up).
    pub foot: f64,
    /// The crest climbs from the previous column. Always false for the first.
    pub rising: bool,
}

/// A generated sequence of ridge columns.
#[derive(Clone, Debug, Default)]
pub struct RidgeProfile {
    points: Vec<RidgePoint>,
}

impl RidgeProfile {
    /// Generate a profile covering `width`, using a fresh field built from `params`.
    pub fn generate(width: f64, params: &RidgeParams) -> Self {
        let field = NoiseField::new(params.noise_params());
        Self::generate_with(width, params, &field)
    }

    /// Generate a profile covering `width` from an existing field.
    ///
    /// Two extra columns past the right edge keep the last curve segment
    /// from ending inside the drawing.
    pub fn generate_with(width: f64, params: &RidgeParams, field: &NoiseField) -> Self {
        if !(params.step > 0.0) {
            log::warn!("Ridge step {} is not positive; empty profile", params.step);
            return Self::default();
        }

        let columns = ((width / params.step).floor() + 2.0).max(0.0) as usize;
        let peak_amplitude = if params.randomized {
            params.step * 1.5
        } else {
            params.step
        };

        let mut points = Vec::with_capacity(columns);
        let mut last_peak = None;
        for k in 0..columns {
            let column = k as f64;
            let peak = field.sample_with_amplitude(column + params.upper_offset, peak_amplitude);
            let foot = round_half_up(
                params.foot_baseline - params.foot_scale * field.sample(column + params.lower_offset),
            );

            points.push(RidgePoint {
                x: column * params.step,
                peak,
                crest: round_half_up(params.crest_baseline - peak),
                foot,
                rising: last_peak.is_some_and(|last| peak > last),
            });
            last_peak = Some(peak);
        }

        log::debug!("Generated ridge profile: {} columns over width {width}", points.len());
        Self { points }
    }

    /// All columns, left to right.
    pub fn points(&self) -> &[RidgePoint] {
        &self.points
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the profile has no columns.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Smallest crest y (the highest point on screen), if any.
    pub fn highest_crest(&self) -> Option<f64> {
        self.points.iter().map(|p| p.crest).reduce(f64::min)
    }
}

/// Round to the nearest integer, ties toward positive infinity.
pub(crate) fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}
