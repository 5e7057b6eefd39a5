//! Constants module for spherical coordinate and motion calculations

use std::f32::consts::PI as PI_F32;

// Angles
/// Half turn in radians
pub const PI: f32 = PI_F32;
/// Tau (2*PI) for full circle, the modulus both angle fields are wrapped into
pub const TAU: f32 = 2.0 * PI_F32;

// Numeric guards
/// Smallest positive subnormal `f32`, substituted for exact zeros before division
pub const SMALLEST_POSITIVE: f32 = 1.401_298_5e-45;
/// Squared-distance threshold below which two coordinates compare as approximately equal
pub const COORD_EPSILON_SQ: f64 = 1e-10;
/// Magnitude at or below which a force direction is treated as the zero vector
pub const DIRECTION_EPSILON: f32 = 1e-5;

// Demo defaults
/// Multiplier applied to every steering force
pub const DEFAULT_FORCE_MULTIPLIER: f32 = 0.02;
/// Default cap on the spherical velocity magnitude
pub const DEFAULT_MAX_SPHERICAL_SPEED: f32 = 20.0;
/// Default fraction of velocity removed per second
pub const DEFAULT_VELOCITY_DAMPING: f32 = 1.0;
