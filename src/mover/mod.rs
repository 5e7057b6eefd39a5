//! Steering toward targets through spherical-direction forces
//!
//! A [`SphericalMover`] holds a Cartesian and a spherical force target and
//! pushes a [`SphericalMotion`] toward either of them. It also computes where
//! the target markers of a debug view belong; drawing them is left to the
//! host.

use log::trace;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_FORCE_MULTIPLIER;
use crate::coordinates::SphericalCoord;
use crate::motion::SphericalMotion;

/// Steering helper for a [`SphericalMotion`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SphericalMover {
    /// Target given in Cartesian space relative to the world offset
    pub force_target_cartesian: Vector3<f32>,
    /// Target given in spherical space relative to the world offset
    pub force_target_spherical: SphericalCoord,
    /// Scale applied to every steering force
    pub force_multiplier: f32,
}

impl Default for SphericalMover {
    fn default() -> Self {
        Self {
            force_target_cartesian: Vector3::zeros(),
            force_target_spherical: SphericalCoord::default(),
            force_multiplier: DEFAULT_FORCE_MULTIPLIER,
        }
    }
}

/// World-space layout of the debug markers for a mover's targets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetMarkers {
    /// Marker on the Cartesian target
    pub cartesian_target: Vector3<f32>,
    /// Marker on the spherical target
    pub spherical_target: Vector3<f32>,
    /// Centre shared by both radial spheres
    pub radial_center: Vector3<f32>,
    /// Diameter of the sphere through the Cartesian target
    pub cartesian_radius_scale: f32,
    /// Diameter of the sphere through the spherical target
    pub spherical_radius_scale: f32,
}

impl SphericalMover {
    pub fn new(
        force_target_cartesian: Vector3<f32>,
        force_target_spherical: SphericalCoord,
    ) -> Self {
        Self {
            force_target_cartesian,
            force_target_spherical,
            ..Self::default()
        }
    }

    pub fn with_force_multiplier(mut self, force_multiplier: f32) -> Self {
        self.force_multiplier = force_multiplier;
        self
    }

    /// Applies one steering force toward a Cartesian position
    pub fn move_towards_cartesian(&self, motion: &mut SphericalMotion, position: Vector3<f32>) {
        let target = SphericalCoord::from_cartesian_vector(position);
        self.move_towards_spherical(motion, &target);
    }

    /// Applies one steering force toward a spherical position
    ///
    /// The force follows the component-wise direction from the motion's
    /// current position to the target (see [`SphericalCoord::direction_to`]).
    pub fn move_towards_spherical(&self, motion: &mut SphericalMotion, target: &SphericalCoord) {
        let current = SphericalCoord::from_vector3(motion.position());
        let direction = current.direction_to(target);
        trace!("Steering from {} toward {}: {:?}", current, target, direction);
        motion.apply_force_vector(direction, self.force_multiplier);
    }

    /// Steers toward the stored Cartesian target
    pub fn steer_cartesian(&self, motion: &mut SphericalMotion) {
        self.move_towards_cartesian(motion, self.force_target_cartesian);
    }

    /// Steers toward the stored spherical target
    pub fn steer_spherical(&self, motion: &mut SphericalMotion) {
        self.move_towards_spherical(motion, &self.force_target_spherical);
    }

    /// Computes the marker layout for the current targets
    pub fn markers(&self, motion: &SphericalMotion) -> TargetMarkers {
        let offset = motion.config().world_offset;
        TargetMarkers {
            cartesian_target: offset + self.force_target_cartesian,
            spherical_target: offset + self.force_target_spherical.to_cartesian(),
            radial_center: offset,
            cartesian_radius_scale: self.force_target_cartesian.norm() * 2.0,
            spherical_radius_scale: self.force_target_spherical.radial_distance() * 2.0,
        }
    }
}
