//! Spherical-velocity motion integrator
//!
//! [`SphericalMotion`] keeps an object's position and velocity as flat
//! `(r, θ, φ)` triples and advances them with simple velocity damping. The
//! host owns the clock: it calls [`SphericalMotion::step`] with its own time
//! step, typically from a fixed-timestep loop.
//!
//! Positions are accumulated without wrapping the angles; they are only
//! normalized when converted to a world-space Cartesian position.

use std::fs;
use std::path::Path;

use log::{debug, trace, warn};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_MAX_SPHERICAL_SPEED, DEFAULT_VELOCITY_DAMPING, DIRECTION_EPSILON,
};
use crate::coordinates::SphericalCoord;
use crate::{Result, SphericalError};

/// Tuning parameters for a [`SphericalMotion`]
///
/// Every field has a default, so a JSON config only needs to list the
/// values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Fraction of the velocity removed per second
    pub velocity_damping: f32,
    /// Weight of the radial component of applied forces
    pub radius_acceleration: f32,
    /// Weight of the polar component of applied forces
    pub polar_acceleration: f32,
    /// Weight of the elevation component of applied forces
    pub elevation_acceleration: f32,
    /// Upper bound on the velocity magnitude
    pub max_spherical_speed: f32,
    /// World-space centre the spherical position is measured from
    pub world_offset: Vector3<f32>,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            velocity_damping: DEFAULT_VELOCITY_DAMPING,
            radius_acceleration: 1.0,
            polar_acceleration: 1.0,
            elevation_acceleration: 1.0,
            max_spherical_speed: DEFAULT_MAX_SPHERICAL_SPEED,
            world_offset: Vector3::zeros(),
        }
    }
}

impl MotionConfig {
    /// Checks that every parameter is finite and non-negative where required
    pub fn validate(&self) -> Result<()> {
        let non_negative = [
            ("velocity_damping", self.velocity_damping),
            ("radius_acceleration", self.radius_acceleration),
            ("polar_acceleration", self.polar_acceleration),
            ("elevation_acceleration", self.elevation_acceleration),
            ("max_spherical_speed", self.max_spherical_speed),
        ];

        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(SphericalError::InvalidConfig(format!(
                    "{} must be finite and non-negative, got {}",
                    name, value
                )));
            }
        }

        if !self.world_offset.iter().all(|c| c.is_finite()) {
            return Err(SphericalError::InvalidConfig(format!(
                "world_offset must be finite, got {:?}",
                self.world_offset
            )));
        }

        Ok(())
    }

    /// Parses and validates a config from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: MotionConfig = serde_json::from_str(json)?;
        config.validate()?;
        debug!("Loaded motion config: {:?}", config);
        Ok(config)
    }

    /// Reads, parses and validates a JSON config file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())?;
        debug!("Read motion config from {}", path.as_ref().display());
        Self::from_json_str(&contents)
    }
}

/// Object moving through spherical space under damped velocity
#[derive(Debug, Clone)]
pub struct SphericalMotion {
    config: MotionConfig,
    position: Vector3<f32>,
    velocity: Vector3<f32>,
    speed_clamped: bool,
}

impl SphericalMotion {
    /// Creates a motion at rest at the given Cartesian position
    ///
    /// The position is converted as-is, so it is interpreted relative to the
    /// origin rather than to the configured world offset.
    pub fn new(config: MotionConfig, cartesian_position: Vector3<f32>) -> Self {
        Self {
            config,
            position: SphericalCoord::cartesian_to_spherical_vector(cartesian_position),
            velocity: Vector3::zeros(),
            speed_clamped: false,
        }
    }

    /// Creates a motion at rest at the given spherical position
    pub fn at_spherical(config: MotionConfig, position: SphericalCoord) -> Self {
        Self {
            config,
            position: position.to_vector3(),
            velocity: Vector3::zeros(),
            speed_clamped: false,
        }
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    /// Current position as a flat, un-wrapped `(r, θ, φ)` triple
    pub fn position(&self) -> Vector3<f32> {
        self.position
    }

    /// Current position with the angles normalized
    pub fn spherical_position(&self) -> SphericalCoord {
        SphericalCoord::from_vector3(self.position)
    }

    /// Current velocity as a flat `(dr, dθ, dφ)` triple per second
    pub fn velocity(&self) -> Vector3<f32> {
        self.velocity
    }

    /// Whether the last step had to clamp the velocity to the maximum speed
    pub fn is_speed_clamped(&self) -> bool {
        self.speed_clamped
    }

    /// Current position in world space
    pub fn world_position(&self) -> Vector3<f32> {
        self.config.world_offset + self.spherical_position().to_cartesian()
    }

    /// Pushes the velocity toward a spherical direction
    ///
    /// The components are weighted by the configured accelerations and the
    /// result is normalized before scaling by `multiplier`. A direction whose
    /// weighted magnitude is at or below `1e-5` applies no force.
    pub fn apply_force(&mut self, radius: f32, polar: f32, elevation: f32, multiplier: f32) {
        let weighted = Vector3::new(
            radius * self.config.radius_acceleration,
            polar * self.config.polar_acceleration,
            elevation * self.config.elevation_acceleration,
        );
        let direction = weighted
            .try_normalize(DIRECTION_EPSILON)
            .unwrap_or_else(Vector3::zeros);

        trace!("Applying force {:?} x {}", direction, multiplier);
        self.velocity += direction * multiplier;
    }

    /// [`apply_force`](SphericalMotion::apply_force) with a direction triple
    pub fn apply_force_vector(&mut self, direction: Vector3<f32>, multiplier: f32) {
        self.apply_force(direction.x, direction.y, direction.z, multiplier);
    }

    /// Advances the motion by `dt` seconds and returns the new world position
    ///
    /// The velocity is damped by `1 - dt * velocity_damping`, clamped to
    /// `max_spherical_speed` and then integrated into the position. Only the
    /// first step of a run of clamped steps logs a warning.
    pub fn step(&mut self, dt: f32) -> Vector3<f32> {
        self.velocity *= 1.0 - dt * self.config.velocity_damping;

        let max_speed = self.config.max_spherical_speed;
        let speed = self.velocity.norm();
        let clamped = speed > max_speed;
        if clamped {
            if !self.speed_clamped {
                warn!("Spherical speed {} exceeds {}, clamping", speed, max_speed);
            }
            self.velocity *= max_speed / speed;
        } else if self.speed_clamped {
            debug!("Spherical speed back under {}", max_speed);
        }
        self.speed_clamped = clamped;

        self.position += self.velocity * dt;
        trace!(
            "Stepped {}s: position {:?}, velocity {:?}",
            dt,
            self.position,
            self.velocity
        );

        self.world_position()
    }
}
