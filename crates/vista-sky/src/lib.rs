//! Sky mapping: galactic coordinates, observer state, and equirectangular screen projection.

mod appearance;
pub mod catalog;
pub mod coords;
mod error;
mod observer;
mod projector;
mod rotation;
mod star;

pub use appearance::{
    DEFAULT_STAR_COLOR, MAX_STAR_RADIUS, Rgba, background_radius, bright_marker_size, bv_to_rgba,
    marker_size,
};
pub use catalog::{load_catalog, parse_catalog};
pub use coords::{
    GalacticCoords, equatorial_to_galactic_deg, equatorial_to_galactic_rad, wrap_degrees,
};
pub use error::{CatalogError, SkyError};
pub use observer::{Observer, PanDirection, ProjectionMode};
pub use projector::{DEFAULT_MARKER_SIZE, ScreenPoint, SkyFrame, SkyProjector, Viewport};
pub use rotation::DisplayRotation;
pub use star::{BrightStar, CatalogEntry, Star, bayer_id};
