//! Whole-sky time stepping and the generation loop.
//!
//! A step borrows the input sky immutably and allocates a fresh boid vector;
//! every boid's force is computed from the same frozen input, so updates are
//! simultaneous. With the `parallel` feature the per-boid work runs on the
//! rayon pool and yields bit-identical results.

use crate::force::net_force_on;
use crate::integrator::integrate;
use boids_core::config::validate_time_step;
use boids_core::{Boid, BoidsError, Sky};
use tracing::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Advances every boid of `sky` by one time step of length `dt`.
///
/// Returns `BoidsError` if `dt` is not positive and finite or the sky's
/// parameters are invalid. The input is left untouched.
pub fn step(sky: &Sky, dt: f64) -> Result<Sky, BoidsError> {
    validate_time_step(dt)?;
    sky.validate()?;
    Ok(advance(sky, dt))
}

/// Produces `generations + 1` snapshots: the initial sky followed by the
/// result of each successive step.
///
/// Inputs are validated once, before the first step runs.
pub fn simulate(initial: &Sky, generations: usize, dt: f64) -> Result<Vec<Sky>, BoidsError> {
    validate_time_step(dt)?;
    initial.validate()?;

    debug!(
        boids = initial.len(),
        generations,
        dt,
        "simulating flock"
    );

    let mut snapshots = Vec::with_capacity(generations + 1);
    snapshots.push(initial.clone());
    for generation in 1..=generations {
        let next = advance(&snapshots[generation - 1], dt);
        trace!(generation, "step complete");
        snapshots.push(next);
    }
    Ok(snapshots)
}

/// Step without validation; callers have checked `dt` and the sky.
fn advance(sky: &Sky, dt: f64) -> Sky {
    sky.with_boids(advance_boids(sky, dt))
}

#[cfg(not(feature = "parallel"))]
fn advance_boids(sky: &Sky, dt: f64) -> Vec<Boid> {
    sky.boids.iter().map(|b| advance_boid(sky, b, dt)).collect()
}

#[cfg(feature = "parallel")]
fn advance_boids(sky: &Sky, dt: f64) -> Vec<Boid> {
    sky.boids.par_iter().map(|b| advance_boid(sky, b, dt)).collect()
}

fn advance_boid(sky: &Sky, boid: &Boid, dt: f64) -> Boid {
    let force = net_force_on(sky, boid);
    integrate(boid, force, sky.max_speed, sky.width, dt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use boids_core::Vector2;

    fn pair_sky() -> Sky {
        Sky::new(100.0, 10.0, 1.0, 1.0, 1.0, 5.0).with_boids(vec![
            Boid::new(Vector2::new(50.0, 50.0), Vector2::new(1.0, 0.0)),
            Boid::new(Vector2::new(52.0, 50.0), Vector2::new(0.0, 1.0)),
        ])
    }

    #[test]
    fn step_rejects_non_positive_dt() {
        assert!(matches!(step(&pair_sky(), 0.0), Err(BoidsError::InvalidTimeStep(_))));
        assert!(matches!(step(&pair_sky(), -1.0), Err(BoidsError::InvalidTimeStep(_))));
    }

    #[test]
    fn step_rejects_invalid_sky() {
        let mut sky = pair_sky();
        sky.max_speed = -1.0;
        assert!(matches!(step(&sky, 1.0), Err(BoidsError::InvalidMaxSpeed(_))));
    }

    #[test]
    fn step_is_deterministic() {
        let sky = pair_sky();
        let a = step(&sky, 0.5).unwrap();
        let b = step(&sky, 0.5).unwrap();
        for (x, y) in a.boids.iter().zip(&b.boids) {
            assert_eq!(x.position.x.to_bits(), y.position.x.to_bits());
            assert_eq!(x.position.y.to_bits(), y.position.y.to_bits());
            assert_eq!(x.velocity.x.to_bits(), y.velocity.x.to_bits());
            assert_eq!(x.velocity.y.to_bits(), y.velocity.y.to_bits());
        }
    }

    #[test]
    fn step_copies_parameters_and_leaves_input_untouched() {
        let sky = pair_sky();
        let before = sky.clone();
        let next = step(&sky, 1.0).unwrap();
        assert_eq!(sky, before);
        assert_eq!(next.len(), sky.len());
        assert_eq!(next.width, sky.width);
        assert_eq!(next.proximity, sky.proximity);
        assert_eq!(next.max_speed, sky.max_speed);
    }

    #[test]
    fn updates_are_simultaneous() {
        // Boid 1 must see boid 0 at its pre-step position.
        let sky = pair_sky();
        let next = step(&sky, 1.0).unwrap();
        let expected = integrate(
            &sky.boids[1],
            net_force_on(&sky, &sky.boids[1]),
            sky.max_speed,
            sky.width,
            1.0,
        );
        assert_eq!(next.boids[1], expected);
    }

    #[test]
    fn first_step_matches_hand_computation() {
        let sky = pair_sky();
        let next = step(&sky, 1.0).unwrap();
        // On boid 0 from boid 1 at d = 2: sep (-0.5, 0), align (0, 0.5), coh (1, 0).
        let b0 = next.boids[0];
        assert_eq!(b0.acceleration, Vector2::new(0.5, 0.5));
        // v = (1, 0) + 0.5 * (0.5, 0.5) = (1.25, 0.25)
        assert_eq!(b0.velocity, Vector2::new(1.25, 0.25));
        // p = (50, 50) + (1, 0)
        assert_eq!(b0.position, Vector2::new(51.0, 50.0));
    }

    #[test]
    fn isolated_boid_next_acceleration_is_zero() {
        let sky = Sky::new(100.0, 5.0, 1.0, 1.0, 1.0, 5.0).with_boids(vec![
            Boid::new(Vector2::new(10.0, 10.0), Vector2::new(1.0, 1.0)),
            Boid::new(Vector2::new(60.0, 60.0), Vector2::new(-1.0, 0.0)),
        ]);
        let next = step(&sky, 1.0).unwrap();
        assert!(next.boids.iter().all(|b| b.acceleration == Vector2::ZERO));
        assert_eq!(next.boids[0].position, Vector2::new(11.0, 11.0));
    }

    #[test]
    fn simulate_returns_generations_plus_one() {
        let sky = pair_sky();
        for n in [0, 1, 7] {
            let snaps = simulate(&sky, n, 0.5).unwrap();
            assert_eq!(snaps.len(), n + 1);
            assert_eq!(snaps[0], sky);
        }
    }

    #[test]
    fn simulate_matches_repeated_step() {
        let sky = pair_sky();
        let snaps = simulate(&sky, 3, 0.25).unwrap();
        let mut current = sky;
        for snap in &snaps[1..] {
            current = step(&current, 0.25).unwrap();
            assert_eq!(&current, snap);
        }
    }

    #[test]
    fn simulate_rejects_bad_dt_before_running() {
        assert!(simulate(&pair_sky(), 10, f64::NAN).is_err());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_advance_is_bit_identical_to_sequential() {
        use boids_core::SkyConfig;

        let cfg = SkyConfig {
            count: 64,
            width: 100.0,
            proximity: 30.0,
            ..SkyConfig::default()
        };
        let mut sky = crate::generate::generate_sky_seeded(&cfg, Some(99)).unwrap();
        for _ in 0..10 {
            let par = advance_boids(&sky, 0.5);
            let seq: Vec<Boid> = sky.boids.iter().map(|b| advance_boid(&sky, b, 0.5)).collect();
            assert_eq!(par.len(), seq.len());
            for (p, q) in par.iter().zip(&seq) {
                for (a, b) in [
                    (p.position.x, q.position.x),
                    (p.position.y, q.position.y),
                    (p.velocity.x, q.velocity.x),
                    (p.velocity.y, q.velocity.y),
                    (p.acceleration.x, q.acceleration.x),
                    (p.acceleration.y, q.acceleration.y),
                ] {
                    assert_eq!(a.to_bits(), b.to_bits());
                }
            }
            sky = sky.with_boids(par);
        }
    }

    #[test]
    fn positions_stay_in_domain() {
        let mut boids = Vec::new();
        for i in 0..20 {
            let f = i as f64;
            boids.push(Boid::new(
                Vector2::new((f * 7.3) % 30.0, (f * 3.1) % 30.0),
                Vector2::new(f.cos() * 4.0, f.sin() * 4.0),
            ));
        }
        let sky = Sky::new(30.0, 6.0, 2.0, 0.5, 0.1, 4.0).with_boids(boids);
        let snaps = simulate(&sky, 50, 0.7).unwrap();
        for snap in &snaps[1..] {
            for b in &snap.boids {
                assert!((0.0..=30.0).contains(&b.position.x), "{:?}", b.position);
                assert!((0.0..=30.0).contains(&b.position.y), "{:?}", b.position);
                assert!(b.speed() <= 4.0 + 1e-9);
            }
        }
    }
}
