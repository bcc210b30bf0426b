//! Two-stage leapfrog integrator with speed clamp and toroidal wrap.
//!
//! Velocity is advanced with the trapezoidal average of the previous and the
//! new acceleration. Position is advanced from the *pre-step* velocity and
//! acceleration, so it does not depend on the force computed this step.

use boids_core::{Boid, Vector2};

/// Boid mass. Force and acceleration are numerically identical.
pub const MASS: f64 = 1.0;

/// Advances one boid by `dt` given the net force computed for this step.
///
/// Callers guarantee `dt > 0`, `max_speed >= 0` and `width > 0`.
pub fn integrate(boid: &Boid, force: Vector2, max_speed: f64, width: f64, dt: f64) -> Boid {
    let acceleration = force / MASS;
    Boid {
        position: update_position(boid, width, dt),
        velocity: update_velocity(boid, acceleration, max_speed, dt),
        acceleration,
    }
}

/// `v + 0.5 * (a' + a) * dt`, clamped to `max_speed`.
pub fn update_velocity(boid: &Boid, new_acceleration: Vector2, max_speed: f64, dt: f64) -> Vector2 {
    let v = boid.velocity + (new_acceleration + boid.acceleration) * 0.5 * dt;
    v.clamp_magnitude(max_speed)
}

/// `p + v * dt + 0.5 * a * dt²`, wrapped onto the torus.
pub fn update_position(boid: &Boid, width: f64, dt: f64) -> Vector2 {
    let p = boid.position + boid.velocity * dt + boid.acceleration * 0.5 * dt * dt;
    Vector2::new(wrap(p.x, width), wrap(p.y, width))
}

/// Maps `coord` into `[0, width)`, except that a value exactly equal to
/// `width` is returned unchanged.
pub fn wrap(coord: f64, width: f64) -> f64 {
    if coord == width {
        return coord;
    }
    let wrapped = (coord + width) % width;
    // `%` keeps the dividend's sign; positions more than one width below zero
    // still need lifting.
    if wrapped < 0.0 {
        let lifted = wrapped + width;
        // Tiny negatives round up to exactly `width`.
        if lifted >= width {
            0.0
        } else {
            lifted
        }
    } else {
        wrapped
    }
}
