//! The `vista` tool: ties configuration, logging, sky projection and terrain together.

pub mod platform;
pub mod scene;

pub use platform::{PlatformDirs, PlatformError};
pub use scene::{PanStep, PlacedStar, Scene, SceneError};
