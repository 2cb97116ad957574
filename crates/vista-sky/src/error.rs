//! Sky projection and catalog error types.

use crate::ProjectionMode;

/// Errors raised by observer updates and screen projection.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SkyError {
    /// The observer selected a projection that has no implementation.
    #[error("projection mode {0} is not implemented")]
    UnsupportedProjection(ProjectionMode),

    /// Viewport dimensions must be finite and positive.
    #[error("invalid viewport {width}x{height}")]
    InvalidViewport {
        /// Requested width in pixels.
        width: f64,
        /// Requested height in pixels.
        height: f64,
    },

    /// Field of view must be finite and positive on both axes.
    #[error("invalid field of view {horizontal}x{vertical} degrees")]
    InvalidFieldOfView {
        /// Horizontal field of view in degrees.
        horizontal: f64,
        /// Vertical field of view in degrees.
        vertical: f64,
    },

    /// Pan distances must be finite and non-negative.
    #[error("pan distance must be finite and non-negative, got {0}")]
    InvalidPanDistance(f64),

    /// A projection name did not match any mode.
    #[error("unknown projection mode: {0}")]
    UnknownProjection(String),

    /// A pan direction name did not match any direction.
    #[error("unknown pan direction: {0}")]
    UnknownPanDirection(String),
}

/// Errors that can occur when loading a star catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Failed to read the catalog file from disk.
    #[error("failed to read catalog: {0}")]
    Read(#[source] std::io::Error),

    /// Failed to parse RON content.
    #[error("failed to parse catalog: {0}")]
    Parse(#[source] ron::error::SpannedError),
}
