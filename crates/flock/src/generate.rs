//! Random initial skies.

use boids_core::{Boid, BoidsError, RandomSource, Sky, SkyConfig, Vector2, Xorshift64};
use std::f64::consts::TAU;
use tracing::debug;

/// Builds a sky of `config.count` boids drawn from `rng`.
///
/// Each boid gets a position uniform in `[0, width)²`, a velocity of magnitude
/// `initial_speed` pointing at a uniform angle in `[0, 2π)`, and zero
/// acceleration. Draw order per boid is x, y, angle.
pub fn generate_sky(config: &SkyConfig, rng: &mut impl RandomSource) -> Result<Sky, BoidsError> {
    config.validate()?;
    let width = config.width;
    let boids = (0..config.count)
        .map(|_| {
            let x = rng.next_range(0.0, width);
            let y = rng.next_range(0.0, width);
            let theta = rng.next_range(0.0, TAU);
            Boid::new(Vector2::new(x, y), Vector2::from_polar(config.initial_speed, theta))
        })
        .collect();
    Ok(config.empty_sky().with_boids(boids))
}

/// Builds a sky from `config`, seeding [`Xorshift64`] with `seed` or, when
/// `None`, from the wall clock.
pub fn generate_sky_seeded(config: &SkyConfig, seed: Option<u64>) -> Result<Sky, BoidsError> {
    let mut rng = match seed {
        Some(seed) => Xorshift64::new(seed),
        None => Xorshift64::from_time(),
    };
    debug!(count = config.count, width = config.width, ?seed, "generating sky");
    generate_sky(config, &mut rng)
}
