//! Rock scatter: noise-driven choice of outline variant plus per-vertex jitter.

use glam::DVec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::NoiseField;
use crate::seed::sparkle_rng;

/// Largest noise value used for variant selection, so index never reaches `count`.
const SELECTION_CEILING: f64 = 0.9999;

/// Picks rock outline variants and roughens their vertices.
pub struct RockScatter {
    field: NoiseField,
    rng: ChaCha8Rng,
    fuzz: DVec2,
}

impl RockScatter {
    /// Horizontal jitter half-width in outline units.
    pub const DEFAULT_X_FUZZ: f64 = 0.7;
    /// Vertical jitter half-width in outline units.
    pub const DEFAULT_Y_FUZZ: f64 = 0.1;

    /// Create a scatter using `field` for selection and a jitter source seeded by `seed`.
    pub fn new(field: NoiseField, seed: u64) -> Self {
        Self {
            field,
            rng: sparkle_rng(seed),
            fuzz: DVec2::new(Self::DEFAULT_X_FUZZ, Self::DEFAULT_Y_FUZZ),
        }
    }

    /// Override the jitter half-widths.
    pub fn with_fuzz(mut self, fuzz: DVec2) -> Self {
        self.fuzz = fuzz.abs();
        self
    }

    /// Choose one of `count` outline variants for a rock placed at `(x, y)`.
    ///
    /// Returns `None` when there are no variants to choose from.
    pub fn pick_variant(&self, x: f64, y: f64, count: usize) -> Option<usize> {
        if count == 0 {
            return None;
        }
        let selector = self
            .field
            .sample_with_amplitude(x + y, 1.0)
            .clamp(0.0, SELECTION_CEILING);
        // NaN survives the clamp and casts to 0.
        Some(((selector * count as f64) as usize).min(count - 1))
    }

    /// Draw one jitter offset, uniform in `[-fuzz, fuzz]` on each axis.
    pub fn jitter(&mut self) -> DVec2 {
        let rx: f64 = self.rng.random();
        let ry: f64 = self.rng.random();
        DVec2::new(rx * 2.0 - 1.0, ry * 2.0 - 1.0) * self.fuzz
    }

    /// Jitter every vertex of `outline`, then scale it.
    pub fn roughen(&mut self, outline: &[DVec2], scale: f64) -> Vec<DVec2> {
        outline
            .iter()
            .map(|&vertex| (vertex + self.jitter()) * scale)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NoiseParams;

    fn scatter(seed: u64) -> RockScatter {
        RockScatter::new(NoiseField::new(NoiseParams::default()), seed)
    }

    #[test]
    fn test_pick_variant_in_range() {
        let rocks = scatter(1);
        for i in 0..500 {
            let x = i as f64 * 3.7;
            let index = rocks.pick_variant(x, 12.0, 7);
            assert!(matches!(index, Some(v) if v < 7), "Variant {index:?} out of range");
        }
    }

    #[test]
    fn test_pick_variant_deterministic() {
        let a = scatter(1);
        let b = scatter(2);
        for i in 0..50 {
            let x = i as f64;
            assert_eq!(
                a.pick_variant(x, 4.0, 7),
                b.pick_variant(x, 4.0, 7),
                "Variant choice must not depend on the jitter seed"
            );
        }
    }

    #[test]
    fn test_pick_variant_depends_on_position_sum() {
        let rocks = scatter(1);
        assert_eq!(rocks.pick_variant(3.0, 5.0, 7), rocks.pick_variant(5.0, 3.0, 7));
    }

    #[test]
    fn test_no_variants() {
        assert_eq!(scatter(0).pick_variant(1.0, 1.0, 0), None);
    }

    #[test]
    fn test_jitter_within_fuzz() {
        let mut rocks = scatter(5);
        for _ in 0..1000 {
            let j = rocks.jitter();
            assert!(j.x.abs() <= RockScatter::DEFAULT_X_FUZZ, "x jitter {}", j.x);
            assert!(j.y.abs() <= RockScatter::DEFAULT_Y_FUZZ, "y jitter {}", j.y);
        }
    }

    #[test]
    fn test_roughen_reproducible_and_scaled() {
        let outline = [DVec2::new(-2.0, 0.8), DVec2::new(9.0, -0.6), DVec2::ZERO];
        let a = scatter(11).roughen(&outline, 2.0);
        let b = scatter(11).roughen(&outline, 2.0);
        assert_eq!(a, b, "Same seed must roughen identically");

        for (vertex, rough) in outline.iter().zip(&a) {
            let delta = (*rough / 2.0 - *vertex).abs();
            assert!(delta.x <= 0.7 + 1e-12 && delta.y <= 0.1 + 1e-12);
        }
    }

    #[test]
    fn test_zero_fuzz_keeps_outline() {
        let outline = [DVec2::new(1.0, 2.0), DVec2::new(-3.0, 4.0)];
        let mut rocks = scatter(3).with_fuzz(DVec2::ZERO);
        let rough = rocks.roughen(&outline, 3.0);
        assert_eq!(rough, vec![DVec2::new(3.0, 6.0), DVec2::new(-9.0, 12.0)]);
    }
}
