//! Point particles and their per-particle force law.
//!
//! Each particle carries its own kinematic state and knows how to turn a
//! target point into an acceleration, then advance itself one explicit
//! Euler step. Particles never look at each other.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Numerator of the field force law (`9.8 * 20`).
pub const FIELD_STRENGTH: f32 = 9.8 * 20.0;

/// Softening term added to the squared distance in the force law.
pub const FIELD_SOFTENING: f32 = 10.0;

/// Whether a particle is pulled toward or pushed away from its target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ForceDirection {
    /// Accelerate toward the target.
    #[default]
    Attract,
    /// Accelerate away from the target.
    Repel,
}

impl ForceDirection {
    /// Vector the field pushes along, before normalization.
    #[inline]
    fn field_vector(self, position: Vec3, target: Vec3) -> Vec3 {
        match self {
            ForceDirection::Attract => target - position,
            ForceDirection::Repel => position - target,
        }
    }
}

/// Magnitude of the field force at `distance` from the target.
///
/// `196 / (10 + d²)`: bounded by 19.6 at the target and decaying smoothly
/// with distance. The distance is deliberately not clamped.
#[inline]
pub fn field_magnitude(distance: f32) -> f32 {
    FIELD_STRENGTH / (FIELD_SOFTENING + distance * distance)
}

/// A single point particle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Particle {
    /// World-space position.
    pub position: Vec3,
    /// Current velocity.
    pub velocity: Vec3,
    /// Acceleration computed for the current tick.
    pub acceleration: Vec3,
}

impl Particle {
    /// Create a particle at rest at `position`.
    pub fn at_rest(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            acceleration: Vec3::ZERO,
        }
    }

    /// Recompute the acceleration from the field and linear drag.
    ///
    /// `None` means no target exists yet: the acceleration is left untouched.
    /// When the particle sits exactly on its target the field term is zero
    /// and only drag remains.
    pub fn update_acceleration(&mut self, target: Option<Vec3>, direction: ForceDirection, drag_scale: f32) {
        let Some(target) = target else {
            return;
        };

        let along = direction.field_vector(self.position, target);
        let field = match along.try_normalize() {
            Some(unit) => unit * field_magnitude(along.length()),
            None => Vec3::ZERO,
        };

        self.acceleration = field - drag_scale * self.velocity;
    }

    /// Advance one forward Euler step and return the new position.
    ///
    /// Position moves with the velocity from *before* this step; the new
    /// velocity only affects the next step.
    pub fn update_position(&mut self, dt: f32) -> Vec3 {
        let new_position = self.position + self.velocity * dt;
        let new_velocity = self.velocity + self.acceleration * dt;

        self.position = new_position;
        self.velocity = new_velocity;
        self.position
    }
}
