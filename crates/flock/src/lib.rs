#![deny(unsafe_code)]
//! Boid flocking engine.
//!
//! Simulates a 2-D flock on a square toroidal sky. Each boid is steered by
//! three local rules (separation, alignment and cohesion) averaged over the
//! neighbors inside the proximity radius, then advanced with a two-stage
//! leapfrog scheme: velocity from the trapezoidal average of the old and new
//! acceleration, position from the pre-step velocity and acceleration.
//!
//! The whole engine is a pure function of its input: [`step`] maps one
//! [`Sky`](boids_core::Sky) to the next and [`simulate`] threads a sky
//! through `n` steps, returning all `n + 1` snapshots.

pub mod force;
pub mod generate;
pub mod integrator;
pub mod step;

pub use force::{alignment_force, cohesion_force, net_force, separation_force};
pub use generate::{generate_sky, generate_sky_seeded};
pub use integrator::integrate;
pub use step::{simulate, step};
