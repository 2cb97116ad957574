//! Deterministic math and seeded random sources for noise sampling.
//!
//! The lattice hash feeds `sin` output through a large multiplier and keeps only
//! the fractional part, so tiny differences between platform `libm`s would show
//! up as completely different noise. All trig here goes through the `libm` crate.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// ---------------------------------------------------------------------------
// Deterministic math (libm)
// ---------------------------------------------------------------------------

/// Deterministic sine using libm (not platform libc).
#[inline]
pub fn det_sin(x: f64) -> f64 {
    libm::sin(x)
}

/// Deterministic floor using libm.
#[inline]
pub fn det_floor(x: f64) -> f64 {
    libm::floor(x)
}

/// Fractional part of `x`, always in `[0, 1)` for finite input.
#[inline]
pub fn fract(x: f64) -> f64 {
    x - det_floor(x)
}

// ---------------------------------------------------------------------------
// Random sources
// ---------------------------------------------------------------------------

/// Seeded random source for the sparkle (randomized) noise mode.
///
/// Two sources built from the same seed yield identical sequences, which keeps
/// randomized fields reproducible in tests.
pub fn sparkle_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Random source seeded from the thread-local generator.
///
/// Used when a randomized field is built without an explicit seed.
pub fn entropy_rng() -> ChaCha8Rng {
    ChaCha8Rng::from_rng(&mut rand::rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    #[test]
    fn test_sparkle_rng_deterministic() {
        let mut rng_a = sparkle_rng(42);
        let mut rng_b = sparkle_rng(42);

        for _ in 0..1000 {
            assert_eq!(
                rng_a.next_u64(),
                rng_b.next_u64(),
                "ChaCha8Rng sequences must match for same seed"
            );
        }
    }

    #[test]
    fn test_sparkle_rng_different_seeds() {
        let mut rng_a = sparkle_rng(0);
        let mut rng_b = sparkle_rng(1);
        assert_ne!(
            rng_a.next_u64(),
            rng_b.next_u64(),
            "Different seeds should produce different sequences"
        );
    }

    #[test]
    fn test_fract_range() {
        let values = [0.0, 0.25, 1.0, -0.25, -1.0, 123.456, -99.99, 1e9 + 0.5];
        for &v in &values {
            let f = fract(v);
            assert!((0.0..1.0).contains(&f), "fract({v}) = {f} outside [0, 1)");
        }
        assert!((fract(-0.25) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_deterministic_math_functions() {
        let x = 1.234_567_890_123_4;
        assert_eq!(det_sin(x), det_sin(x), "det_sin must be deterministic");
        assert_eq!(det_floor(-x), -2.0);
    }
}
