//! Procedural terrain primitives: value-noise fBm, horizon ridge profiles, and rock scatter.

mod noise_field;
mod ridge;
mod rock;

pub mod seed;

pub use noise_field::{BASE_FREQUENCY, NoiseField, NoiseParams, lattice_hash, value_noise};
pub use ridge::{RidgeParams, RidgePoint, RidgeProfile};
pub use rock::RockScatter;
