//! Failure modes of the `boids` binary and the exit status each one maps to.
//!
//! A run fails in one of four ways, and scripts can tell them apart by the
//! process status:
//!
//! | status | cause |
//! |--------|-------|
//! | 2  | clap rejected the command line |
//! | 10 | the flock parameters cannot be simulated (boid count, width, dt, speed cap, proximity) |
//! | 11 | a config file could not be read or an image could not be written |
//! | 12 | a config file or render flag is malformed (bad JSON, bad key, color, canvas, frequency) |
//! | 13 | the JSON report could not be produced |

use boids_core::BoidsError;
use std::fmt;

#[derive(Debug)]
pub enum CliError {
    /// The sky or run parameters were rejected before simulating.
    Simulation(BoidsError),
    /// Filesystem access failed.
    Io(String),
    /// User-supplied settings were malformed.
    Input(String),
    /// Writing the `--json` report failed.
    Serialization(String),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Simulation(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Simulation(e) => write!(f, "cannot simulate: {e}"),
            CliError::Io(msg) | CliError::Input(msg) | CliError::Serialization(msg) => {
                f.write_str(msg)
            }
        }
    }
}

/// Settings the user typed (config keys, colors, frame options) count as
/// input errors; everything else the core rejects is a simulation error.
impl From<BoidsError> for CliError {
    fn from(e: BoidsError) -> Self {
        match e {
            BoidsError::Io(msg) => CliError::Io(msg),
            BoidsError::InvalidParameter { .. }
            | BoidsError::InvalidColor(_)
            | BoidsError::InvalidCanvasWidth
            | BoidsError::InvalidFrequency
            | BoidsError::Fixture { .. } => CliError::Input(e.to_string()),
            other => CliError::Simulation(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_variant_has_its_own_status() {
        let codes = [
            CliError::Simulation(BoidsError::InvalidBoidCount).exit_code(),
            CliError::Io("write failed".into()).exit_code(),
            CliError::Input("bad color".into()).exit_code(),
            CliError::Serialization("json fail".into()).exit_code(),
        ];
        assert_eq!(codes, [10, 11, 12, 13]);
    }

    #[test]
    fn core_io_failure_keeps_its_message() {
        let err = CliError::from(BoidsError::Io("disk full".into()));
        assert_eq!(err.exit_code(), 11);
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn malformed_settings_are_input_errors() {
        let cases = [
            BoidsError::InvalidFrequency,
            BoidsError::InvalidCanvasWidth,
            BoidsError::InvalidColor("#zz".into()),
            BoidsError::InvalidParameter {
                name: "count".into(),
                message: "expected a non-negative integer, got -5".into(),
            },
        ];
        for e in cases {
            assert_eq!(CliError::from(e).exit_code(), 12);
        }
    }

    #[test]
    fn unrunnable_flock_is_a_simulation_error() {
        let err = CliError::from(BoidsError::InvalidTimeStep(-1.0));
        assert_eq!(err.exit_code(), 10);
        let msg = err.to_string();
        assert!(msg.starts_with("cannot simulate"), "{msg}");
        assert!(msg.contains("-1"), "{msg}");
    }

    #[test]
    fn report_encoding_failure_is_a_serialization_error() {
        let bad_json = serde_json::from_str::<serde_json::Value>("{invalid");
        assert_eq!(CliError::from(bad_json.unwrap_err()).exit_code(), 13);
    }
}
