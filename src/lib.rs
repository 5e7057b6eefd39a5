//! Spherical Motion: spherical coordinate math and steering for game objects
//!
//! This crate provides a spherical-coordinate value type with Cartesian
//! conversion, angle wrapping, direction and distance operations, plus a
//! damped spherical-velocity integrator and a steering helper built on it.
//!
//! The library has no global state and never schedules work itself: a host
//! loop calls [`SphericalMotion::step`] with its own time step.

use thiserror::Error;

pub mod constants;
pub mod coordinates;
pub mod motion;
pub mod mover;

// Re-export commonly used types
pub use coordinates::{normalize_angle, SphericalCoord};
pub use motion::{MotionConfig, SphericalMotion};
pub use mover::{SphericalMover, TargetMarkers};

/// Main error type for the spherical-motion library
#[derive(Debug, Error)]
pub enum SphericalError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Result type for spherical-motion operations
pub type Result<T> = std::result::Result<T, SphericalError>;
