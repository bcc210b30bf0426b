//! Reproducible run configuration.
//!
//! A [`SkyConfig`] captures everything needed to recreate a simulation run:
//! flock size, domain width, initial and maximum speed, the three force gains,
//! the proximity radius, the time step, the generation count and an optional
//! PRNG seed. Two identical seeded configs produce bit-identical snapshots.

use crate::error::BoidsError;
use crate::params::{param_f64, param_opt_u64, param_usize};
use crate::sky::Sky;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

const DEFAULT_COUNT: usize = 200;
const DEFAULT_WIDTH: f64 = 2000.0;
const DEFAULT_INITIAL_SPEED: f64 = 1.0;
const DEFAULT_MAX_SPEED: f64 = 2.0;
const DEFAULT_PROXIMITY: f64 = 200.0;
const DEFAULT_SEPARATION: f64 = 1.5;
const DEFAULT_ALIGNMENT: f64 = 0.5;
const DEFAULT_COHESION: f64 = 0.02;
const DEFAULT_TIME_STEP: f64 = 1.0;
const DEFAULT_GENERATIONS: usize = 8000;

/// Scalar configuration for one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkyConfig {
    /// Number of boids.
    pub count: usize,
    /// Side length of the square toroidal domain.
    pub width: f64,
    /// Speed every boid starts with.
    pub initial_speed: f64,
    pub max_speed: f64,
    pub proximity: f64,
    pub separation: f64,
    pub alignment: f64,
    pub cohesion: f64,
    /// Length of one time step.
    pub time_step: f64,
    /// Number of steps after the initial snapshot.
    pub generations: usize,
    /// PRNG seed; `None` seeds from the wall clock.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SkyConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            width: DEFAULT_WIDTH,
            initial_speed: DEFAULT_INITIAL_SPEED,
            max_speed: DEFAULT_MAX_SPEED,
            proximity: DEFAULT_PROXIMITY,
            separation: DEFAULT_SEPARATION,
            alignment: DEFAULT_ALIGNMENT,
            cohesion: DEFAULT_COHESION,
            time_step: DEFAULT_TIME_STEP,
            generations: DEFAULT_GENERATIONS,
            seed: None,
        }
    }
}

impl SkyConfig {
    /// Extracts a config from a JSON object, falling back to defaults for
    /// missing keys.
    ///
    /// Returns `BoidsError::InvalidParameter` for a key that is present but
    /// mistyped or negative where an integer is expected.
    pub fn from_json(params: &Value) -> Result<Self, BoidsError> {
        Ok(Self {
            count: param_usize(params, "count", DEFAULT_COUNT)?,
            width: param_f64(params, "width", DEFAULT_WIDTH)?,
            initial_speed: param_f64(params, "initial_speed", DEFAULT_INITIAL_SPEED)?,
            max_speed: param_f64(params, "max_speed", DEFAULT_MAX_SPEED)?,
            proximity: param_f64(params, "proximity", DEFAULT_PROXIMITY)?,
            separation: param_f64(params, "separation", DEFAULT_SEPARATION)?,
            alignment: param_f64(params, "alignment", DEFAULT_ALIGNMENT)?,
            cohesion: param_f64(params, "cohesion", DEFAULT_COHESION)?,
            time_step: param_f64(params, "time_step", DEFAULT_TIME_STEP)?,
            generations: param_usize(params, "generations", DEFAULT_GENERATIONS)?,
            seed: param_opt_u64(params, "seed")?,
        })
    }

    /// Rejects configurations the simulation cannot run.
    pub fn validate(&self) -> Result<(), BoidsError> {
        if self.count == 0 {
            return Err(BoidsError::InvalidBoidCount);
        }
        if !(self.initial_speed.is_finite() && self.initial_speed >= 0.0) {
            return Err(BoidsError::InvalidSpeed(self.initial_speed));
        }
        validate_time_step(self.time_step)?;
        self.empty_sky().validate()
    }

    /// A sky carrying this config's parameters and no boids.
    pub fn empty_sky(&self) -> Sky {
        Sky::new(
            self.width,
            self.proximity,
            self.separation,
            self.alignment,
            self.cohesion,
            self.max_speed,
        )
    }

    /// Schema describing every parameter, its type and default.
    pub fn param_schema() -> Value {
        json!({
            "count": {
                "type": "integer",
                "default": DEFAULT_COUNT,
                "min": 1,
                "description": "Number of boids"
            },
            "width": {
                "type": "number",
                "default": DEFAULT_WIDTH,
                "description": "Side length of the toroidal sky"
            },
            "initial_speed": {
                "type": "number",
                "default": DEFAULT_INITIAL_SPEED,
                "min": 0.0,
                "description": "Speed of every boid in the initial sky"
            },
            "max_speed": {
                "type": "number",
                "default": DEFAULT_MAX_SPEED,
                "min": 0.0,
                "description": "Speed cap applied after each velocity update"
            },
            "proximity": {
                "type": "number",
                "default": DEFAULT_PROXIMITY,
                "min": 0.0,
                "description": "Interaction radius; farther boids are ignored"
            },
            "separation": {
                "type": "number",
                "default": DEFAULT_SEPARATION,
                "description": "Separation gain (S)"
            },
            "alignment": {
                "type": "number",
                "default": DEFAULT_ALIGNMENT,
                "description": "Alignment gain (A)"
            },
            "cohesion": {
                "type": "number",
                "default": DEFAULT_COHESION,
                "description": "Cohesion gain (C)"
            },
            "time_step": {
                "type": "number",
                "default": DEFAULT_TIME_STEP,
                "description": "Length of one time step, must be positive"
            },
            "generations": {
                "type": "integer",
                "default": DEFAULT_GENERATIONS,
                "min": 0,
                "description": "Number of steps after the initial sky"
            },
            "seed": {
                "type": "integer",
                "default": null,
                "description": "PRNG seed; omit to seed from the clock"
            }
        })
    }
}

/// A time step must be positive and finite.
pub fn validate_time_step(dt: f64) -> Result<(), BoidsError> {
    if dt.is_finite() && dt > 0.0 {
        Ok(())
    } else {
        Err(BoidsError::InvalidTimeStep(dt))
    }
}
