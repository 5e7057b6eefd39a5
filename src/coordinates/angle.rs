//! # Angle Wrapping Module
//!
//! This module provides the angle normalization used by both angle fields of
//! [`SphericalCoord`](super::spherical::SphericalCoord), along with the
//! wrap-around shortcut used when measuring the difference between two
//! normalized angles.
//!
//! ## Range Convention
//!
//! All angles are wrapped into `[0, τ)` where `τ = 2π`. Unlike latitude-style
//! conventions there is no clamping: the elevation angle wraps exactly like
//! the polar angle does.
//!
//! ## Examples
//!
//! ```rust
//! use spherical_motion::coordinates::angle::normalize_angle;
//! use spherical_motion::constants::TAU;
//!
//! assert_eq!(normalize_angle(TAU), 0.0);
//! assert_eq!(normalize_angle(-0.5 * TAU), 0.5 * TAU);
//! ```

use crate::constants::TAU;

/// Wraps an angle in radians into `[0, τ)`
///
/// Non-negative inputs are reduced `mod τ`. Negative inputs are reflected to
/// `τ - (|v| mod τ)` and then reduced again, so both `0` and `τ` map to `0`.
/// The function is idempotent for finite inputs.
///
/// Behavior for `NaN` and infinite inputs is unspecified; they propagate
/// through the arithmetic unguarded.
///
/// # Examples
///
/// ```rust
/// use spherical_motion::coordinates::angle::normalize_angle;
/// use spherical_motion::constants::{PI, TAU};
///
/// assert_eq!(normalize_angle(-PI), PI);
/// assert_eq!(normalize_angle(-TAU), 0.0);
/// assert!((normalize_angle(1.5 * TAU) - PI).abs() < 1e-6);
/// ```
pub fn normalize_angle(value: f32) -> f32 {
    let flat = if value >= 0.0 {
        value
    } else {
        TAU - (value.abs() % TAU)
    };
    flat % TAU
}

/// Replaces an angle difference with its wrap-around length when that is shorter
///
/// For a difference `delta` between two normalized angles, the way around the
/// other side of the circle has length `τ - |delta|`. When that is the shorter
/// path the wrap-around length is returned as-is; its sign is not re-derived
/// from `delta`, so the result is always non-negative in that case.
pub fn wrapped_delta(delta: f32) -> f32 {
    let around = TAU - delta.abs();
    if delta.abs() > around.abs() {
        around
    } else {
        delta
    }
}
