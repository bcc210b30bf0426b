#![deny(unsafe_code)]
//! Core types for the boids flocking simulation.
//!
//! Provides the `Vector2` value type, the `Boid` and `Sky` snapshot data model,
//! the `SkyConfig` run configuration, `BoidsError`, the `Xorshift64` PRNG behind
//! the `RandomSource` seam, the `Srgb` color type, and readers for the
//! plain-text conformance fixtures.

pub mod boid;
pub mod color;
pub mod config;
pub mod error;
pub mod fixture;
pub mod params;
pub mod prng;
pub mod sky;
pub mod vector;

pub use boid::Boid;
pub use color::Srgb;
pub use config::SkyConfig;
pub use error::BoidsError;
pub use prng::{RandomSource, Xorshift64};
pub use sky::Sky;
pub use vector::Vector2;
