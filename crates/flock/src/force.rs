//! Neighbor force model.
//!
//! Every boid within `proximity` of the focal boid contributes a separation,
//! an alignment and a cohesion term. The three sums are averaged over the
//! shared neighbor count and added. Evaluation is exact all-pairs.

use boids_core::{Boid, BoidsError, Sky, Vector2};

/// Separation exerted on `b1` by `b2`: `S * (b1 - b2) / d²`, pointing away
/// from `b2`.
pub fn separation_force(b1: &Boid, b2: &Boid, gain: f64, distance: f64) -> Vector2 {
    (b1.position - b2.position) * gain / (distance * distance)
}

/// Alignment exerted on `b1` by `b2`: `A * v2 / d`.
pub fn alignment_force(_b1: &Boid, b2: &Boid, gain: f64, distance: f64) -> Vector2 {
    b2.velocity * gain / distance
}

/// Cohesion exerted on `b1` by `b2`: `C * (b2 - b1) / d`, pointing toward
/// `b2`.
pub fn cohesion_force(b1: &Boid, b2: &Boid, gain: f64, distance: f64) -> Vector2 {
    (b2.position - b1.position) * gain / distance
}

/// Net steering force on `sky.boids[index]` from every other boid in `sky`.
pub fn net_force(sky: &Sky, index: usize) -> Result<Vector2, BoidsError> {
    let boid = sky.boids.get(index).ok_or(BoidsError::IndexOutOfRange {
        index,
        len: sky.len(),
    })?;
    Ok(net_force_on(sky, boid))
}

/// Net steering force on `boid` from the boids of `sky`.
///
/// Boids whose full state equals `boid`, boids at distance zero and boids at
/// distance `>= proximity` contribute nothing.
pub(crate) fn net_force_on(sky: &Sky, boid: &Boid) -> Vector2 {
    let mut separation = Vector2::ZERO;
    let mut alignment = Vector2::ZERO;
    let mut cohesion = Vector2::ZERO;
    let mut neighbors = 0usize;

    for other in sky.boids.iter().filter(|o| *o != boid) {
        let d = boid.position.distance(other.position);
        if d == 0.0 || d >= sky.proximity {
            continue;
        }
        neighbors += 1;
        separation += separation_force(boid, other, sky.separation, d);
        alignment += alignment_force(boid, other, sky.alignment, d);
        cohesion += cohesion_force(boid, other, sky.cohesion, d);
    }

    if neighbors > 0 {
        let n = neighbors as f64;
        separation = separation / n;
        alignment = alignment / n;
        cohesion = cohesion / n;
    }

    separation + alignment + cohesion
}
