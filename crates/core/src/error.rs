//! Error types for the boids core.

use thiserror::Error;

/// Errors produced by sky construction, simulation and fixture parsing.
#[derive(Debug, Error)]
pub enum BoidsError {
    /// A sky must hold at least one boid.
    #[error("invalid boid count: at least one boid is required")]
    InvalidBoidCount,

    /// Sky width was zero, negative or not finite.
    #[error("invalid sky width {0}: must be positive and finite")]
    InvalidWidth(f64),

    /// Time step was zero, negative or not finite.
    #[error("invalid time step {0}: must be positive and finite")]
    InvalidTimeStep(f64),

    /// Speed cap was negative or NaN.
    #[error("invalid max speed {0}: must be non-negative")]
    InvalidMaxSpeed(f64),

    /// Proximity radius was negative or NaN.
    #[error("invalid proximity {0}: must be non-negative")]
    InvalidProximity(f64),

    /// Initial speed was negative or not finite.
    #[error("invalid initial speed {0}: must be non-negative and finite")]
    InvalidSpeed(f64),

    /// A boid index did not refer to a boid in the sky.
    #[error("boid index {index} out of range for sky of {len} boids")]
    IndexOutOfRange { index: usize, len: usize },

    /// Rendered frames need a canvas at least one pixel wide.
    #[error("invalid canvas width: must be at least one pixel")]
    InvalidCanvasWidth,

    /// Frame frequency was zero.
    #[error("invalid frame frequency: must be positive")]
    InvalidFrequency,

    /// A configuration key held a value of the wrong type or range.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter { name: String, message: String },

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A fixture record was malformed.
    #[error("fixture line {line}: {message}")]
    Fixture { line: usize, message: String },

    /// Reading or writing a file failed.
    #[error("i/o error: {0}")]
    Io(String),
}

impl From<std::io::Error> for BoidsError {
    fn from(e: std::io::Error) -> Self {
        BoidsError::Io(e.to_string())
    }
}
