#![deny(unsafe_code)]
//! Rendering of boid snapshots.
//!
//! [`pixel`] rasterises one [`Sky`] into an RGBA8 buffer with no image
//! dependency. The feature-gated [`snapshot`] and [`animation`] modules write
//! single PNG frames and looping animated GIFs through the `image` crate.

pub mod pixel;

#[cfg(any(feature = "png", feature = "gif"))]
pub mod frame;

#[cfg(feature = "png")]
pub mod snapshot;

#[cfg(feature = "gif")]
pub mod animation;

pub use pixel::{sky_to_rgba, RenderConfig};

use boids_core::{BoidsError, Sky};

/// Every `frequency`-th snapshot, starting with the first.
///
/// Returns `BoidsError::InvalidFrequency` if `frequency` is zero.
pub fn select_snapshots(
    snapshots: &[Sky],
    frequency: usize,
) -> Result<impl Iterator<Item = &Sky>, BoidsError> {
    if frequency == 0 {
        return Err(BoidsError::InvalidFrequency);
    }
    Ok(snapshots.iter().step_by(frequency))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skies(n: usize) -> Vec<Sky> {
        (0..n)
            .map(|i| Sky::new(10.0 + i as f64, 1.0, 1.0, 1.0, 1.0, 1.0))
            .collect()
    }

    #[test]
    fn select_every_third_snapshot() {
        let all = skies(10);
        let picked: Vec<f64> = select_snapshots(&all, 3).unwrap().map(|s| s.width).collect();
        assert_eq!(picked, vec![10.0, 13.0, 16.0, 19.0]);
    }

    #[test]
    fn frequency_one_keeps_everything() {
        let all = skies(4);
        assert_eq!(select_snapshots(&all, 1).unwrap().count(), 4);
    }

    #[test]
    fn zero_frequency_is_rejected() {
        assert!(matches!(
            select_snapshots(&skies(2), 0),
            Err(BoidsError::InvalidFrequency)
        ));
    }
}
