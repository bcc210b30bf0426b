//! One snapshot of the simulated world.
//!
//! A [`Sky`] bundles the ordered boid sequence with the scalar parameters that
//! drive the force model. Snapshots are plain owned values: cloning a sky
//! deep-copies its boids, so two snapshots never share mutable storage.

use crate::boid::Boid;
use crate::error::BoidsError;
use serde::{Deserialize, Serialize};

/// Full state of the flock at one time step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sky {
    /// Side length of the square toroidal domain.
    pub width: f64,
    /// Neighbors at distance `>= proximity` never interact.
    pub proximity: f64,
    /// Separation gain (S).
    pub separation: f64,
    /// Alignment gain (A).
    pub alignment: f64,
    /// Cohesion gain (C).
    pub cohesion: f64,
    /// Speed cap applied after every velocity update.
    pub max_speed: f64,
    pub boids: Vec<Boid>,
}

impl Sky {
    /// Creates an empty sky with the given parameters.
    pub fn new(
        width: f64,
        proximity: f64,
        separation: f64,
        alignment: f64,
        cohesion: f64,
        max_speed: f64,
    ) -> Self {
        Self {
            width,
            proximity,
            separation,
            alignment,
            cohesion,
            max_speed,
            boids: Vec::new(),
        }
    }

    /// Returns a copy of this sky's parameters holding `boids` instead.
    pub fn with_boids(&self, boids: Vec<Boid>) -> Self {
        Self {
            boids,
            ..Self::new(
                self.width,
                self.proximity,
                self.separation,
                self.alignment,
                self.cohesion,
                self.max_speed,
            )
        }
    }

    pub fn len(&self) -> usize {
        self.boids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }

    /// Checks the scalar parameter invariants.
    ///
    /// `width` must be positive and finite. `proximity` and `max_speed` must
    /// be non-negative; positive infinity is allowed for both and means no
    /// limit. Boid positions are not checked: a fixture may legitimately
    /// start outside `[0, width)`.
    pub fn validate(&self) -> Result<(), BoidsError> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(BoidsError::InvalidWidth(self.width));
        }
        // `!(x >= 0)` also rejects NaN.
        if !(self.proximity >= 0.0) {
            return Err(BoidsError::InvalidProximity(self.proximity));
        }
        if !(self.max_speed >= 0.0) {
            return Err(BoidsError::InvalidMaxSpeed(self.max_speed));
        }
        Ok(())
    }
}
