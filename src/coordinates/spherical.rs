//! # Spherical Coordinate Module
//!
//! This module provides [`SphericalCoord`], a `(radial distance, polar,
//! elevation)` triple used to describe positions and velocities of objects
//! moving around a centre point.
//!
//! ## Coordinate System Convention
//!
//! The conversion follows the Y-up convention of game engines:
//! - **Polar angle (θ)**: azimuth in the X-Z plane, measured from +X toward +Z
//! - **Elevation angle (φ)**: latitude-style angle above the X-Z plane, toward +Y
//! - **Radial distance (r)**: distance from the origin
//!
//! ```text
//! x = r cos(φ) cos(θ)
//! y = r sin(φ)
//! z = r cos(φ) sin(θ)
//! ```
//!
//! ## Internal Storage
//!
//! - All three fields are `f32` and private
//! - Both angles are wrapped into `[0, τ)` on every construction and update
//! - The radial distance is stored as given and never wrapped or clamped
//!
//! Every operation that yields a new coordinate builds it through
//! [`SphericalCoord::new`], so values observed through the accessors always
//! hold normalized angles. Code that needs raw, un-wrapped sums (such as a
//! velocity integrator) works with the flat triple from
//! [`SphericalCoord::to_vector3`] instead.
//!
//! ## Singularities
//!
//! Cartesian input with `x == 0` or a zero radius is nudged by the smallest
//! positive `f32` to avoid dividing by zero, so points on the Y axis and the
//! origin convert to an approximation rather than an exact pole. `NaN` and
//! infinite inputs are not guarded and their results are unspecified.
//!
//! ## Examples
//!
//! ```rust
//! use spherical_motion::coordinates::spherical::SphericalCoord;
//!
//! let coord = SphericalCoord::from_cartesian(3.0, 4.0, 5.0);
//! let back = coord.to_cartesian();
//! assert!((back.x - 3.0).abs() < 1e-4);
//! assert!((back.y - 4.0).abs() < 1e-4);
//! assert!((back.z - 5.0).abs() < 1e-4);
//! ```

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::angle::{normalize_angle, wrapped_delta};
use crate::constants::{COORD_EPSILON_SQ, PI, SMALLEST_POSITIVE};

/// A point or vector in spherical form with both angles wrapped into `[0, τ)`
///
/// The type is a plain `Copy` value. Default equality compares fields
/// exactly; use [`approx_eq`](SphericalCoord::approx_eq) to tolerate
/// floating-point noise.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "RawSphericalCoord")]
pub struct SphericalCoord {
    radial_distance: f32,
    polar: f32,
    elevation: f32,
}

/// Field layout used when deserializing, so loaded values are normalized
#[derive(Deserialize)]
struct RawSphericalCoord {
    radial_distance: f32,
    polar: f32,
    elevation: f32,
}

impl From<RawSphericalCoord> for SphericalCoord {
    fn from(raw: RawSphericalCoord) -> Self {
        SphericalCoord::new(raw.radial_distance, raw.polar, raw.elevation)
    }
}

impl SphericalCoord {
    /// Creates a new spherical coordinate
    ///
    /// The radial distance is stored unchanged; both angles are normalized
    /// into `[0, τ)`.
    ///
    /// # Arguments
    ///
    /// * `radial_distance` - Distance from the origin
    /// * `polar` - Polar (azimuth) angle in radians
    /// * `elevation` - Elevation angle in radians
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spherical_motion::coordinates::spherical::SphericalCoord;
    /// use spherical_motion::constants::{PI, TAU};
    ///
    /// let coord = SphericalCoord::new(2.0, -PI, TAU);
    /// assert_eq!(coord.radial_distance(), 2.0);
    /// assert_eq!(coord.polar(), PI);
    /// assert_eq!(coord.elevation(), 0.0);
    /// ```
    pub fn new(radial_distance: f32, polar: f32, elevation: f32) -> Self {
        SphericalCoord {
            radial_distance,
            polar: normalize_angle(polar),
            elevation: normalize_angle(elevation),
        }
    }

    /// Converts Cartesian coordinates to spherical coordinates
    ///
    /// # Mathematical Conversion
    ///
    /// - `r = sqrt(x² + y² + z²)`
    /// - `θ = atan(z / x)`, plus π when `x < 0`
    /// - `φ = asin(y / r)`
    ///
    /// An exact zero `x` or `r` is replaced with the smallest positive `f32`
    /// before dividing, so the Y axis and the origin map to approximations.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spherical_motion::coordinates::spherical::SphericalCoord;
    /// use spherical_motion::constants::PI;
    ///
    /// let behind = SphericalCoord::from_cartesian(-1.0, 0.0, 0.0);
    /// assert_eq!(behind.radial_distance(), 1.0);
    /// assert_eq!(behind.polar(), PI);
    /// assert_eq!(behind.elevation(), 0.0);
    /// ```
    pub fn from_cartesian(x: f32, y: f32, z: f32) -> Self {
        let x = if x == 0.0 { SMALLEST_POSITIVE } else { x };

        let mut radial_distance = (x * x + y * y + z * z).sqrt();

        let mut polar = (z / x).atan();
        if x < 0.0 {
            polar += PI;
        }

        if radial_distance == 0.0 {
            radial_distance = SMALLEST_POSITIVE;
        }
        let elevation = (y / radial_distance).asin();

        SphericalCoord::new(radial_distance, polar, elevation)
    }

    /// Converts a Cartesian vector to spherical coordinates
    ///
    /// See [`from_cartesian`](SphericalCoord::from_cartesian).
    pub fn from_cartesian_vector(cartesian: Vector3<f32>) -> Self {
        SphericalCoord::from_cartesian(cartesian.x, cartesian.y, cartesian.z)
    }

    /// Converts a Cartesian vector straight to a flat spherical triple
    ///
    /// Convenience for seeding integrators that keep their position as a
    /// `(r, θ, φ)` vector.
    pub fn cartesian_to_spherical_vector(cartesian: Vector3<f32>) -> Vector3<f32> {
        SphericalCoord::from_cartesian_vector(cartesian).to_vector3()
    }

    /// Converts to Cartesian coordinates
    ///
    /// # Mathematical Conversion
    ///
    /// - `a = r cos(φ)`
    /// - `x = a cos(θ)`
    /// - `y = r sin(φ)`
    /// - `z = a sin(θ)`
    ///
    /// This is not an exact inverse of
    /// [`from_cartesian`](SphericalCoord::from_cartesian) at the `x == 0` and
    /// `r == 0` singularities.
    pub fn to_cartesian(&self) -> Vector3<f32> {
        let a = self.radial_distance * self.elevation.cos();
        Vector3::new(
            a * self.polar.cos(),
            self.radial_distance * self.elevation.sin(),
            a * self.polar.sin(),
        )
    }

    /// Builds a coordinate from a flat `(r, θ, φ)` triple, normalizing the angles
    pub fn from_vector3(triple: Vector3<f32>) -> Self {
        SphericalCoord::new(triple.x, triple.y, triple.z)
    }

    /// Returns the fields as a flat `(r, θ, φ)` triple
    pub fn to_vector3(&self) -> Vector3<f32> {
        Vector3::new(self.radial_distance, self.polar, self.elevation)
    }

    pub fn radial_distance(&self) -> f32 {
        self.radial_distance
    }

    pub fn polar(&self) -> f32 {
        self.polar
    }

    pub fn elevation(&self) -> f32 {
        self.elevation
    }

    /// Replaces the radial distance and returns the stored value
    pub fn set_radial_distance(&mut self, radial_distance: f32) -> f32 {
        self.radial_distance = radial_distance;
        self.radial_distance
    }

    /// Replaces the polar angle, normalizing it, and returns the stored value
    pub fn set_polar(&mut self, polar: f32) -> f32 {
        self.polar = normalize_angle(polar);
        self.polar
    }

    /// Replaces the elevation angle, normalizing it, and returns the stored value
    pub fn set_elevation(&mut self, elevation: f32) -> f32 {
        self.elevation = normalize_angle(elevation);
        self.elevation
    }

    /// Computes the component-wise direction from this coordinate to another
    ///
    /// Returns `(dr, dθ, dφ)` as a flat triple. Each angle difference whose
    /// way around the circle is shorter is replaced by that wrap-around
    /// length, which is always positive (see
    /// [`wrapped_delta`](super::angle::wrapped_delta)). The result is not
    /// normalized.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spherical_motion::coordinates::spherical::SphericalCoord;
    ///
    /// let from = SphericalCoord::new(1.0, 0.5, 0.25);
    /// let to = SphericalCoord::new(3.0, 1.0, 0.75);
    /// let direction = from.direction_to(&to);
    /// assert_eq!(direction.x, 2.0);
    /// assert_eq!(direction.y, 0.5);
    /// assert_eq!(direction.z, 0.5);
    /// ```
    pub fn direction_to(&self, other: &SphericalCoord) -> Vector3<f32> {
        Vector3::new(
            other.radial_distance - self.radial_distance,
            wrapped_delta(other.polar - self.polar),
            wrapped_delta(other.elevation - self.elevation),
        )
    }

    /// Computes the Euclidean distance between two spherical positions
    ///
    /// Uses the law of cosines with the polar angle as longitude and the
    /// elevation as latitude:
    ///
    /// ```text
    /// d² = r₁² + r₂² - 2 r₁ r₂ (cos φ₁ cos φ₂ cos(θ₁ - θ₂) + sin φ₁ sin φ₂)
    /// ```
    ///
    /// The sum is evaluated in `f64` and clamped at zero before the square
    /// root, so identical inputs give `0` rather than `NaN`.
    pub fn spherical_distance(a: &SphericalCoord, b: &SphericalCoord) -> f32 {
        let (r1, r2) = (a.radial_distance as f64, b.radial_distance as f64);
        let (e1, e2) = (a.elevation as f64, b.elevation as f64);
        let dp = (a.polar as f64 - b.polar as f64).abs();

        let cos_angle = e1.cos() * e2.cos() * dp.cos() + e1.sin() * e2.sin();
        let squared = r1 * r1 + r2 * r2 - 2.0 * r1 * r2 * cos_angle;

        squared.max(0.0).sqrt() as f32
    }

    /// Distance from this coordinate to another
    ///
    /// See [`spherical_distance`](SphericalCoord::spherical_distance).
    pub fn distance_to(&self, other: &SphericalCoord) -> f32 {
        SphericalCoord::spherical_distance(self, other)
    }

    /// Sum of the squared raw fields, treating the triple as a flat vector
    pub fn squared_magnitude(&self) -> f32 {
        let r = self.radial_distance as f64;
        let p = self.polar as f64;
        let e = self.elevation as f64;
        (r * r + p * p + e * e) as f32
    }

    /// Length of the triple treated as a flat vector
    pub fn magnitude(&self) -> f32 {
        self.squared_magnitude().sqrt()
    }

    /// Scales the triple down so its flat magnitude does not exceed `max_length`
    ///
    /// Coordinates already within the bound are returned unchanged. Otherwise
    /// every raw field, angles included, is multiplied by
    /// `max_length / magnitude`. This is a flat-vector clamp and does not
    /// correspond to shrinking a physical radius. `max_length` is expected to
    /// be non-negative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use spherical_motion::coordinates::spherical::SphericalCoord;
    ///
    /// let coord = SphericalCoord::new(3.0, 0.0, 4.0);
    /// let clamped = coord.clamp_magnitude(2.5);
    /// assert!((clamped.radial_distance() - 1.5).abs() < 1e-6);
    /// assert!((clamped.elevation() - 2.0).abs() < 1e-6);
    /// ```
    pub fn clamp_magnitude(&self, max_length: f32) -> SphericalCoord {
        let squared = self.squared_magnitude();
        if squared as f64 <= max_length as f64 * max_length as f64 {
            return *self;
        }

        let scale = max_length / squared.sqrt();
        SphericalCoord::new(
            self.radial_distance * scale,
            self.polar * scale,
            self.elevation * scale,
        )
    }

    /// Compares two coordinates field by field with a squared-distance tolerance
    ///
    /// Returns true when the sum of the squared differences of the raw fields
    /// is strictly less than `epsilon_sq`. This is not a geodesic comparison:
    /// angles just either side of `0`/`τ` differ by almost `τ`.
    pub fn approx_eq(&self, other: &SphericalCoord, epsilon_sq: f64) -> bool {
        let dr = (self.radial_distance - other.radial_distance) as f64;
        let dp = (self.polar - other.polar) as f64;
        let de = (self.elevation - other.elevation) as f64;
        dr * dr + dp * dp + de * de < epsilon_sq
    }

    /// [`approx_eq`](SphericalCoord::approx_eq) with the default tolerance of `1e-10`
    pub fn approx_eq_default(&self, other: &SphericalCoord) -> bool {
        self.approx_eq(other, COORD_EPSILON_SQ)
    }
}

impl fmt::Display for SphericalCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "S({}, {}, {})",
            self.radial_distance, self.polar, self.elevation
        )
    }
}

// Arithmetic operations, component-wise and rebuilt through `new`
impl Add for SphericalCoord {
    type Output = SphericalCoord;

    fn add(self, other: SphericalCoord) -> SphericalCoord {
        SphericalCoord::new(
            self.radial_distance + other.radial_distance,
            self.polar + other.polar,
            self.elevation + other.elevation,
        )
    }
}

impl Sub for SphericalCoord {
    type Output = SphericalCoord;

    fn sub(self, other: SphericalCoord) -> SphericalCoord {
        SphericalCoord::new(
            self.radial_distance - other.radial_distance,
            self.polar - other.polar,
            self.elevation - other.elevation,
        )
    }
}

impl Neg for SphericalCoord {
    type Output = SphericalCoord;

    fn neg(self) -> SphericalCoord {
        SphericalCoord::new(-self.radial_distance, -self.polar, -self.elevation)
    }
}

impl Mul<f32> for SphericalCoord {
    type Output = SphericalCoord;

    fn mul(self, scalar: f32) -> SphericalCoord {
        SphericalCoord::new(
            self.radial_distance * scalar,
            self.polar * scalar,
            self.elevation * scalar,
        )
    }
}

impl Mul<SphericalCoord> for f32 {
    type Output = SphericalCoord;

    fn mul(self, coord: SphericalCoord) -> SphericalCoord {
        coord * self
    }
}

impl Div<f32> for SphericalCoord {
    type Output = SphericalCoord;

    fn div(self, scalar: f32) -> SphericalCoord {
        SphericalCoord::new(
            self.radial_distance / scalar,
            self.polar / scalar,
            self.elevation / scalar,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TAU;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rstest::rstest;

    #[test]
    fn test_creation_normalizes_angles() {
        let coord = SphericalCoord::new(5.0, TAU + 1.0, -1.0);
        assert_eq!(coord.radial_distance(), 5.0);
        assert_relative_eq!(coord.polar(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(coord.elevation(), TAU - 1.0, epsilon = 1e-6);

        // The radial distance is never wrapped
        let negative = SphericalCoord::new(-20.0, 0.0, 0.0);
        assert_eq!(negative.radial_distance(), -20.0);
    }

    #[test]
    fn test_setters() {
        let mut coord = SphericalCoord::default();

        assert_eq!(coord.set_radial_distance(-3.0), -3.0);
        assert_eq!(coord.set_polar(-PI), PI);
        assert_eq!(coord.set_elevation(TAU), 0.0);

        assert_eq!(coord, SphericalCoord::new(-3.0, PI, 0.0));
    }

    #[test]
    fn test_from_cartesian_axes() {
        let forward = SphericalCoord::from_cartesian(1.0, 0.0, 0.0);
        assert_eq!(forward.radial_distance(), 1.0);
        assert_eq!(forward.polar(), 0.0);
        assert_eq!(forward.elevation(), 0.0);

        let behind = SphericalCoord::from_cartesian(-1.0, 0.0, 0.0);
        assert_eq!(behind.radial_distance(), 1.0);
        assert_relative_eq!(behind.polar(), PI);
        assert_eq!(behind.elevation(), 0.0);

        let side = SphericalCoord::from_cartesian(0.0, 0.0, 2.0);
        assert_relative_eq!(side.radial_distance(), 2.0);
        assert_relative_eq!(side.polar(), PI / 2.0, epsilon = 1e-6);
        assert_abs_diff_eq!(side.elevation(), 0.0);
    }

    #[test]
    fn test_from_cartesian_degenerate_inputs() {
        // The origin is nudged to the smallest positive radius
        let origin = SphericalCoord::from_cartesian(0.0, 0.0, 0.0);
        assert_eq!(origin.radial_distance(), SMALLEST_POSITIVE);
        assert_eq!(origin.polar(), 0.0);
        assert_eq!(origin.elevation(), 0.0);

        // Straight up: x is nudged, elevation is a quarter turn
        let up = SphericalCoord::from_cartesian(0.0, 3.0, 0.0);
        assert_relative_eq!(up.radial_distance(), 3.0);
        assert_relative_eq!(up.elevation(), PI / 2.0, epsilon = 1e-6);
        assert!(up.polar().is_finite());

        // Straight down wraps to three quarters of a turn
        let down = SphericalCoord::from_cartesian(0.0, -3.0, 0.0);
        assert_relative_eq!(down.elevation(), 1.5 * PI, epsilon = 1e-6);
    }

    #[test]
    fn test_cartesian_round_trip() {
        let coord = SphericalCoord::from_cartesian(3.0, 4.0, 5.0);
        assert_relative_eq!(coord.radial_distance(), 50.0_f32.sqrt(), epsilon = 1e-5);

        let back = coord.to_cartesian();
        assert_relative_eq!(back.x, 3.0, epsilon = 1e-4);
        assert_relative_eq!(back.y, 4.0, epsilon = 1e-4);
        assert_relative_eq!(back.z, 5.0, epsilon = 1e-4);

        let vector = SphericalCoord::from_cartesian_vector(Vector3::new(-2.0, -1.0, 7.0));
        let back = vector.to_cartesian();
        assert_relative_eq!(back.x, -2.0, epsilon = 1e-4);
        assert_relative_eq!(back.y, -1.0, epsilon = 1e-4);
        assert_relative_eq!(back.z, 7.0, epsilon = 1e-4);
    }

    #[rstest]
    #[case(2.0, 0.5, 0.3)]
    #[case(1.0, 2.0, 0.4)]
    #[case(3.0, 4.0, 5.9)]
    #[case(10.0, 5.5, 1.2)]
    #[case(0.5, 1.0, 4.8)]
    fn test_spherical_round_trip(#[case] r: f32, #[case] polar: f32, #[case] elevation: f32) {
        let original = SphericalCoord::new(r, polar, elevation);
        let round_trip = SphericalCoord::from_cartesian_vector(original.to_cartesian());

        assert_relative_eq!(round_trip.radial_distance(), r, epsilon = 1e-4);
        assert_relative_eq!(round_trip.polar(), polar, epsilon = 1e-4);
        assert_relative_eq!(round_trip.elevation(), elevation, epsilon = 1e-4);
    }

    #[test]
    fn test_round_trip_diverges_past_the_pole() {
        // Elevations beyond a quarter turn fold back: asin only covers [-π/2, π/2]
        let original = SphericalCoord::new(1.0, 0.5, 2.0);
        let round_trip = SphericalCoord::from_cartesian_vector(original.to_cartesian());

        assert_relative_eq!(round_trip.elevation(), PI - 2.0, epsilon = 1e-4);
        assert_relative_eq!(round_trip.polar(), 0.5 + PI, epsilon = 1e-4);
        assert!(!round_trip.approx_eq_default(&original));

        // Both still describe the same Cartesian point
        let a = original.to_cartesian();
        let b = round_trip.to_cartesian();
        assert_relative_eq!(a.x, b.x, epsilon = 1e-4);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-4);
        assert_relative_eq!(a.z, b.z, epsilon = 1e-4);
    }

    #[test]
    fn test_vector3_conversions() {
        let coord = SphericalCoord::new(1.0, 2.0, 3.0);
        let triple = coord.to_vector3();
        assert_eq!(triple, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(SphericalCoord::from_vector3(triple), coord);

        let wrapped = SphericalCoord::from_vector3(Vector3::new(1.0, -PI, TAU));
        assert_eq!(wrapped.polar(), PI);
        assert_eq!(wrapped.elevation(), 0.0);

        let seeded = SphericalCoord::cartesian_to_spherical_vector(Vector3::new(-1.0, 0.0, 0.0));
        assert_relative_eq!(seeded, Vector3::new(1.0, PI, 0.0));
    }

    #[test]
    fn test_direction_to() {
        let a = SphericalCoord::new(1.0, 0.5, 0.25);
        let b = SphericalCoord::new(4.0, 1.5, 0.5);

        let forward = a.direction_to(&b);
        assert_eq!(forward, Vector3::new(3.0, 1.0, 0.25));

        let backward = b.direction_to(&a);
        assert_eq!(backward, Vector3::new(-3.0, -1.0, -0.25));
    }

    #[test]
    fn test_direction_to_wraps_each_angle_independently() {
        let a = SphericalCoord::new(1.0, 0.25, 0.5);
        let b = SphericalCoord::new(1.0, TAU - 0.25, 0.75);

        // Only the polar difference wraps; elevation keeps its own delta
        let direction = a.direction_to(&b);
        assert_eq!(direction.x, 0.0);
        assert_relative_eq!(direction.y, 0.5, epsilon = 1e-5);
        assert_relative_eq!(direction.z, 0.25, epsilon = 1e-6);

        let c = SphericalCoord::new(1.0, 1.0, TAU - 0.5);
        let d = SphericalCoord::new(1.0, 1.25, 0.5);

        // Only the elevation difference wraps, and it lands in the elevation slot
        let direction = c.direction_to(&d);
        assert_relative_eq!(direction.y, 0.25, epsilon = 1e-6);
        assert_relative_eq!(direction.z, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_spherical_distance() {
        let a = SphericalCoord::new(3.0, 0.0, 0.0);
        let b = SphericalCoord::new(4.0, PI / 2.0, 0.0);

        // Perpendicular radii: 3-4-5 triangle
        assert_relative_eq!(SphericalCoord::spherical_distance(&a, &b), 5.0, epsilon = 1e-5);

        // Opposite sides of the origin
        let c = SphericalCoord::new(2.0, PI, 0.0);
        assert_relative_eq!(a.distance_to(&c), 5.0, epsilon = 1e-5);

        // Matches the Cartesian distance for a generic pair
        let p = SphericalCoord::from_cartesian(1.0, 2.0, 3.0);
        let q = SphericalCoord::from_cartesian(-4.0, 0.5, 2.0);
        let expected = (p.to_cartesian() - q.to_cartesian()).norm();
        assert_relative_eq!(p.distance_to(&q), expected, epsilon = 1e-4);
    }

    #[test]
    fn test_spherical_distance_identity_and_symmetry() {
        let coords = [
            SphericalCoord::new(1.0, 0.3, 0.2),
            SphericalCoord::new(7.5, 4.0, 5.5),
            SphericalCoord::new(0.0, 1.0, 1.0),
            SphericalCoord::new(100.0, 6.0, 0.1),
        ];

        for a in &coords {
            assert_abs_diff_eq!(SphericalCoord::spherical_distance(a, a), 0.0, epsilon = 1e-3);
            for b in &coords {
                assert_eq!(
                    SphericalCoord::spherical_distance(a, b),
                    SphericalCoord::spherical_distance(b, a)
                );
            }
        }
    }

    #[test]
    fn test_equality() {
        assert_eq!(SphericalCoord::new(1.0, 2.0, 3.0), SphericalCoord::new(1.0, 2.0, 3.0));
        assert!(SphericalCoord::new(1.0, 2.0, 3.0)
            .approx_eq_default(&SphericalCoord::new(1.0, 2.0, 3.0)));

        // Exact equality is strict, approximate equality absorbs tiny noise
        let a = SphericalCoord::new(1.0, 2.0, 3.0);
        let b = SphericalCoord::new(1.0 + 1e-6, 2.0, 3.0);
        assert_ne!(a, b);
        assert!(a.approx_eq_default(&b));

        // A difference above the tolerance in any field is not equal
        assert!(!a.approx_eq_default(&SphericalCoord::new(1.001, 2.0, 3.0)));
        assert!(!a.approx_eq_default(&SphericalCoord::new(1.0, 2.001, 3.0)));
        assert!(!a.approx_eq_default(&SphericalCoord::new(1.0, 2.0, 3.001)));

        // Custom tolerance
        assert!(a.approx_eq(&SphericalCoord::new(1.001, 2.0, 3.0), 1e-5));
    }

    #[test]
    fn test_squared_magnitude() {
        let coord = SphericalCoord::new(1.0, 2.0, 3.0);
        assert_relative_eq!(coord.squared_magnitude(), 14.0);
        assert_relative_eq!(coord.magnitude(), 14.0_f32.sqrt());
    }

    #[test]
    fn test_clamp_magnitude() {
        let small = SphericalCoord::new(1.0, 0.5, 0.5);
        assert_eq!(small.clamp_magnitude(10.0), small);

        // Exactly on the bound stays unchanged
        let on_bound = SphericalCoord::new(3.0, 0.0, 4.0);
        assert_eq!(on_bound.clamp_magnitude(5.0), on_bound);

        let large = SphericalCoord::new(12.0, 3.0, 4.0);
        let clamped = large.clamp_magnitude(2.0);
        assert_relative_eq!(clamped.squared_magnitude(), 4.0, epsilon = 1e-5);

        // Every field is scaled by the same factor, angles included
        let scale = 2.0 / 13.0;
        assert_relative_eq!(clamped.radial_distance(), 12.0 * scale, epsilon = 1e-6);
        assert_relative_eq!(clamped.polar(), 3.0 * scale, epsilon = 1e-6);
        assert_relative_eq!(clamped.elevation(), 4.0 * scale, epsilon = 1e-6);
    }

    #[test]
    fn test_arithmetic_operations() {
        let a = SphericalCoord::new(1.0, 0.5, 1.0);
        let b = SphericalCoord::new(2.0, 1.0, 0.25);

        let sum = a + b;
        assert_eq!(sum, SphericalCoord::new(3.0, 1.5, 1.25));

        let diff = b - a;
        assert_eq!(diff.radial_distance(), 1.0);
        assert_eq!(diff.polar(), 0.5);
        assert_relative_eq!(diff.elevation(), TAU - 0.75, epsilon = 1e-6);

        let scaled = a * 2.0;
        assert_eq!(scaled, SphericalCoord::new(2.0, 1.0, 2.0));
        assert_eq!(2.0 * a, scaled);

        let divided = b / 2.0;
        assert_eq!(divided, SphericalCoord::new(1.0, 0.5, 0.125));
    }

    #[test]
    fn test_arithmetic_keeps_angles_in_range() {
        let a = SphericalCoord::new(1.0, 5.0, 6.0);
        let b = SphericalCoord::new(1.0, 4.0, 3.0);

        for result in [a + b, a - b, b - a, -a, a * 3.0, a / -2.0] {
            assert!((0.0..TAU).contains(&result.polar()), "{}", result);
            assert!((0.0..TAU).contains(&result.elevation()), "{}", result);
        }

        let negated = -SphericalCoord::new(2.0, 1.0, 0.0);
        assert_eq!(negated.radial_distance(), -2.0);
        assert_relative_eq!(negated.polar(), TAU - 1.0, epsilon = 1e-6);
        assert_eq!(negated.elevation(), 0.0);
    }

    #[test]
    fn test_display() {
        let coord = SphericalCoord::new(1.5, 0.25, 2.0);
        assert_eq!(coord.to_string(), "S(1.5, 0.25, 2)");
    }

    #[test]
    fn test_serde_normalizes_on_load() {
        let coord = SphericalCoord::new(2.0, 1.0, 0.5);
        let json = serde_json::to_string(&coord).unwrap();
        assert_eq!(
            json,
            r#"{"radial_distance":2.0,"polar":1.0,"elevation":0.5}"#
        );
        let loaded: SphericalCoord = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, coord);

        let raw = r#"{
            "radial_distance": 1.0,
            "polar": -3.141592653589793,
            "elevation": 6.283185307179586
        }"#;
        let loaded: SphericalCoord = serde_json::from_str(raw).unwrap();
        assert_relative_eq!(loaded.polar(), PI, epsilon = 1e-6);
        assert_eq!(loaded.elevation(), 0.0);
    }
}
