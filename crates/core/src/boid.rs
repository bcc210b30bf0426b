//! Kinematic state of a single boid.

use crate::vector::Vector2;
use serde::{Deserialize, Serialize};

/// One particle: position, velocity and the acceleration computed in the
/// previous step.
///
/// A boid has no identity beyond its index in [`Sky::boids`](crate::Sky).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Boid {
    pub position: Vector2,
    pub velocity: Vector2,
    pub acceleration: Vector2,
}

impl Boid {
    /// Creates a boid at rest with respect to acceleration.
    pub fn new(position: Vector2, velocity: Vector2) -> Self {
        Self {
            position,
            velocity,
            acceleration: Vector2::ZERO,
        }
    }

    /// Current speed, `|velocity|`.
    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }
}
