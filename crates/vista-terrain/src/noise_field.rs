//! One-dimensional value noise with multi-octave fractal Brownian motion (fBm).
//!
//! The lattice is two-dimensional but sampled along its diagonal: a coordinate
//! `t` selects the cell whose corners are `(i, i)`, `(i + 1, i)`, `(i, i + 1)`
//! and `(i + 1, i + 1)` with `i = floor(t)`. Corner values come from a sine
//! hash, optionally scaled by a uniform random draw ("sparkle" mode).

use std::sync::{Mutex, PoisonError};

use glam::DVec2;
use noise::NoiseFn;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::seed::{det_floor, det_sin, entropy_rng, fract, sparkle_rng};

/// Frequency of the first octave.
pub const BASE_FREQUENCY: f64 = 1.504;

const HASH_WEIGHTS: DVec2 = DVec2::new(12.9898, 78.233);
const HASH_SCALE: f64 = 43_758.545_312_3;

/// Configuration for a [`NoiseField`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoiseParams {
    /// Number of octaves to sum. Zero is valid and yields a flat field.
    pub octaves: u32,
    /// Amplitude of the first octave.
    pub amplitude: f64,
    /// Frequency multiplier between successive octaves. Default: 2.0.
    pub lacunarity: f64,
    /// Amplitude multiplier between successive octaves. Default: 0.5.
    pub gain: f64,
    /// Multiply every lattice hash by a fresh uniform draw. Sampling is then
    /// no longer repeatable, so never enable this for geometry that must stay
    /// stable across redraws.
    pub randomized: bool,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            octaves: 1,
            amplitude: 1.0,
            lacunarity: 2.0,
            gain: 0.5,
            randomized: false,
        }
    }
}

/// Value-noise fBm sampler.
///
/// Deterministic fields are pure functions of their input and take no locks.
/// Randomized fields own a seedable ChaCha source behind a mutex so a single
/// field can still be shared between threads.
pub struct NoiseField {
    params: NoiseParams,
    sparkle: Option<Mutex<ChaCha8Rng>>,
}

impl NoiseField {
    /// Create a field. A randomized field draws its jitter from a source seeded
    /// by the thread-local generator.
    pub fn new(params: NoiseParams) -> Self {
        let sparkle = params.randomized.then(|| Mutex::new(entropy_rng()));
        Self { params, sparkle }
    }

    /// Create a field whose randomized jitter sequence is reproducible.
    ///
    /// The seed is ignored when `params.randomized` is false.
    pub fn with_seed(params: NoiseParams, seed: u64) -> Self {
        let sparkle = params.randomized.then(|| Mutex::new(sparkle_rng(seed)));
        Self { params, sparkle }
    }

    /// Sample the field at `x` using the configured base amplitude.
    pub fn sample(&self, x: f64) -> f64 {
        self.sample_with_amplitude(x, self.params.amplitude)
    }

    /// Sample the field at `x`, overriding the base amplitude for this call only.
    pub fn sample_with_amplitude(&self, x: f64, amplitude: f64) -> f64 {
        match &self.sparkle {
            None => self.accumulate(x, amplitude, lattice_hash),
            Some(source) => {
                let mut rng = source.lock().unwrap_or_else(PoisonError::into_inner);
                self.accumulate(x, amplitude, |p| {
                    lattice_hash(p) * rng.random::<f64>()
                })
            }
        }
    }

    fn accumulate(&self, x: f64, amplitude: f64, mut hash: impl FnMut(DVec2) -> f64) -> f64 {
        let mut total = 0.0;
        let mut frequency = BASE_FREQUENCY;
        let mut amplitude = amplitude;

        for _ in 0..self.params.octaves {
            total += amplitude * interpolate(frequency * x, &mut hash);

            frequency *= self.params.lacunarity;
            amplitude *= self.params.gain;
        }

        total
    }

    /// Geometric sum of all octave amplitudes.
    ///
    /// Noise values lie in `[0, 1)`, so `|sample(x)|` never exceeds this.
    pub fn max_amplitude(&self) -> f64 {
        let mut sum = 0.0;
        let mut amp = self.params.amplitude;
        for _ in 0..self.params.octaves {
            sum += amp.abs();
            amp *= self.params.gain;
        }
        sum
    }

    /// Return a reference to the current parameters.
    pub fn params(&self) -> &NoiseParams {
        &self.params
    }

    /// Whether lattice hashes are jittered by the random source.
    pub fn is_randomized(&self) -> bool {
        self.sparkle.is_some()
    }
}

impl std::fmt::Debug for NoiseField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoiseField")
            .field("params", &self.params)
            .field("randomized", &self.is_randomized())
            .finish()
    }
}

impl NoiseFn<f64, 1> for NoiseField {
    fn get(&self, point: [f64; 1]) -> f64 {
        self.sample(point[0])
    }
}

/// Deterministic hash of a lattice point into `[0, 1)`.
pub fn lattice_hash(point: DVec2) -> f64 {
    fract(det_sin(point.dot(HASH_WEIGHTS)) * HASH_SCALE)
}

/// Single-octave deterministic value noise at `t`, in `[0, 1)`.
pub fn value_noise(t: f64) -> f64 {
    interpolate(t, lattice_hash)
}

fn interpolate(t: f64, mut hash: impl FnMut(DVec2) -> f64) -> f64 {
    let i = det_floor(t);
    let f = t - i;

    // Corner order matters in sparkle mode: each call consumes one random draw.
    let a = hash(DVec2::new(i, i));
    let b = hash(DVec2::new(i + 1.0, i));
    let c = hash(DVec2::new(i, i + 1.0));
    let d = hash(DVec2::new(i + 1.0, i + 1.0));

    let u = f * f * (3.0 - 2.0 * f);

    mix(a, b, u) + (c - a) * u * (1.0 - u) + (d - b) * u * u
}

#[inline]
fn mix(x: f64, y: f64, a: f64) -> f64 {
    x * (1.0 - a) + y * a
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn terrain_params() -> NoiseParams {
        NoiseParams {
            octaves: 4,
            amplitude: 20.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_determinism_same_params_same_coord() {
        let field_a = NoiseField::new(terrain_params());
        let field_b = NoiseField::new(terrain_params());

        for x in (0..200).map(|i| i as f64 * 0.37 - 20.0) {
            let h1 = field_a.sample(x);
            let h2 = field_b.sample(x);
            assert_eq!(
                h1.to_bits(),
                h2.to_bits(),
                "Deterministic fields must agree bit-for-bit at x={x}: {h1} vs {h2}"
            );
            assert_eq!(field_a.sample(x).to_bits(), h1.to_bits());
        }
    }

    #[test]
    fn test_single_octave_matches_value_noise() {
        let field = NoiseField::new(NoiseParams {
            octaves: 1,
            amplitude: 7.5,
            ..Default::default()
        });
        for x in (0..100).map(|i| i as f64 * 0.173 - 5.0) {
            assert_eq!(
                field.sample(x),
                7.5 * value_noise(BASE_FREQUENCY * x),
                "One octave must equal amplitude * value_noise(1.504 * x) at x={x}"
            );
        }
    }

    #[test]
    fn test_zero_octaves_returns_zero() {
        let field = NoiseField::new(NoiseParams {
            octaves: 0,
            ..Default::default()
        });
        assert_eq!(field.sample(12.5), 0.0);
        assert_eq!(field.max_amplitude(), 0.0);
    }

    #[test]
    fn test_zero_amplitude_returns_zero() {
        let field = NoiseField::new(NoiseParams {
            amplitude: 0.0,
            octaves: 6,
            ..Default::default()
        });
        let h = field.sample(123.0);
        assert!(
            h.abs() < EPSILON,
            "Zero amplitude should produce zero height, got {h}"
        );
    }

    #[test]
    fn test_amplitude_override_scales_linearly() {
        let field = NoiseField::new(terrain_params());
        let x = 3.3;
        let base = field.sample_with_amplitude(x, 1.0);
        let doubled = field.sample_with_amplitude(x, 2.0);
        assert!(
            (doubled - 2.0 * base).abs() < EPSILON,
            "Doubling the base amplitude must double the sample: {base} vs {doubled}"
        );
        assert_eq!(field.params().amplitude, 20.0, "Override must not persist");
    }

    #[test]
    fn test_value_noise_hits_lattice_values() {
        for i in -5..5 {
            let t = i as f64;
            let expected = lattice_hash(DVec2::splat(t));
            assert!(
                (value_noise(t) - expected).abs() < EPSILON,
                "value_noise must equal the (i, i) corner hash at integer t={t}"
            );
        }
    }

    #[test]
    fn test_hash_in_unit_interval() {
        for x in -50..50 {
            for y in -5..5 {
                let h = lattice_hash(DVec2::new(x as f64, y as f64));
                assert!((0.0..1.0).contains(&h), "hash({x}, {y}) = {h} outside [0, 1)");
            }
        }
    }

    #[test]
    fn test_height_within_expected_range() {
        let field = NoiseField::new(terrain_params());
        let max_amp = field.max_amplitude();

        for x in (0..2000).map(|i| i as f64 * 0.05) {
            let h = field.sample(x);
            assert!(
                (-EPSILON..=max_amp).contains(&h),
                "Sample {h} outside [0, {max_amp}] at x={x}"
            );
        }
    }

    #[test]
    fn test_smooth_across_cell_boundaries() {
        let field = NoiseField::new(terrain_params());
        let step = 0.001;
        let max_allowed_delta = field.max_amplitude() * 0.1;

        // Spans several lattice cells of every octave.
        for i in 0..10_000 {
            let x = i as f64 * step;
            let delta = (field.sample(x + step) - field.sample(x)).abs();
            assert!(
                delta < max_allowed_delta,
                "Discontinuity at x={x}: delta={delta} exceeds max={max_allowed_delta}"
            );
        }
    }

    #[test]
    fn test_max_amplitude_calculation() {
        let field = NoiseField::new(NoiseParams {
            amplitude: 1000.0,
            gain: 0.5,
            octaves: 4,
            ..Default::default()
        });
        let expected = 1875.0;
        assert!(
            (field.max_amplitude() - expected).abs() < EPSILON,
            "Max amplitude should be {expected}, got {}",
            field.max_amplitude()
        );
    }

    #[test]
    fn test_seeded_sparkle_reproducible() {
        let params = NoiseParams {
            randomized: true,
            ..terrain_params()
        };
        let field_a = NoiseField::with_seed(params, 99);
        let field_b = NoiseField::with_seed(params, 99);

        for x in (0..50).map(|i| i as f64 * 0.5) {
            assert_eq!(
                field_a.sample(x).to_bits(),
                field_b.sample(x).to_bits(),
                "Same seed must reproduce the sparkle sequence at x={x}"
            );
        }
    }

    #[test]
    fn test_sparkle_varies_between_calls() {
        let field = NoiseField::with_seed(
            NoiseParams {
                randomized: true,
                ..terrain_params()
            },
            7,
        );
        let samples: Vec<f64> = (0..10).map(|_| field.sample(4.2)).collect();
        assert!(
            samples.windows(2).any(|w| w[0] != w[1]),
            "Randomized sampling should not repeat: {samples:?}"
        );
    }

    #[test]
    fn test_sparkle_never_exceeds_deterministic_hash() {
        let params = NoiseParams {
            octaves: 1,
            amplitude: 1.0,
            ..Default::default()
        };
        let plain = NoiseField::new(params);
        let sparkle = NoiseField::with_seed(
            NoiseParams {
                randomized: true,
                ..params
            },
            3,
        );
        for x in (0..500).map(|i| i as f64 * 0.11) {
            let s = sparkle.sample(x);
            let p = plain.sample(x);
            assert!(
                (-EPSILON..=p + EPSILON).contains(&s),
                "Sparkle sample {s} must lie in [0, {p}] at x={x}"
            );
        }
    }

    #[test]
    fn test_seed_ignored_when_deterministic() {
        let a = NoiseField::with_seed(terrain_params(), 1);
        let b = NoiseField::with_seed(terrain_params(), 2);
        assert!(!a.is_randomized());
        assert_eq!(a.sample(9.9).to_bits(), b.sample(9.9).to_bits());
    }

    #[test]
    fn test_noise_fn_matches_sample() {
        let field = NoiseField::new(terrain_params());
        let as_noise_fn: &dyn NoiseFn<f64, 1> = &field;
        assert_eq!(as_noise_fn.get([2.75]), field.sample(2.75));
    }

    #[test]
    fn test_deterministic_on_different_threads() {
        let handle_a = std::thread::spawn(|| NoiseField::new(terrain_params()).sample(17.25));
        let handle_b = std::thread::spawn(|| NoiseField::new(terrain_params()).sample(17.25));

        let a = handle_a.join().unwrap();
        let b = handle_b.join().unwrap();
        assert_eq!(
            a.to_bits(),
            b.to_bits(),
            "Same sample on different threads must be bit-identical"
        );
    }
}
