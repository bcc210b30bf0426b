//! Readers for the plain-text conformance fixtures.
//!
//! A fixture directory holds an `input/` and an `output/` folder whose files
//! pair up by sorted name. Input files contain one data record; blank lines
//! and lines starting with `#` are ignored. Record shapes:
//!
//! - distance: `x1 y1 x2 y2`
//! - pairwise force: `b1.x b1.y b2.x b2.y b2v.x b2v.y proximity S A C`
//!
//! Output files hold a single scalar or a single `x y` pair.

use crate::boid::Boid;
use crate::error::BoidsError;
use crate::vector::Vector2;
use std::fs;
use std::path::{Path, PathBuf};

/// Inputs for a distance conformance case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceSample {
    pub a: Vector2,
    pub b: Vector2,
}

/// Inputs for a pairwise force conformance case.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceSample {
    pub b1_position: Vector2,
    pub b2_position: Vector2,
    pub b2_velocity: Vector2,
    pub proximity: f64,
    pub separation: f64,
    pub alignment: f64,
    pub cohesion: f64,
}

impl ForceSample {
    /// The two boids the record describes. `b1` has only a position.
    pub fn boids(&self) -> (Boid, Boid) {
        (
            Boid::new(self.b1_position, Vector2::ZERO),
            Boid::new(self.b2_position, self.b2_velocity),
        )
    }
}

/// Returns the first data line and its 1-based line number.
fn first_record(text: &str) -> Result<(usize, Vec<f64>), BoidsError> {
    let (idx, line) = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i, l.trim()))
        .find(|(_, l)| !l.is_empty() && !l.starts_with('#'))
        .ok_or_else(|| BoidsError::Fixture {
            line: 0,
            message: "no data line found".into(),
        })?;
    let line_no = idx + 1;
    let values = line
        .split_whitespace()
        .map(|field| {
            field.parse::<f64>().map_err(|e| BoidsError::Fixture {
                line: line_no,
                message: format!("invalid number {field:?}: {e}"),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok((line_no, values))
}

fn record_of_len(text: &str, expected: usize) -> Result<Vec<f64>, BoidsError> {
    let (line, values) = first_record(text)?;
    if values.len() != expected {
        return Err(BoidsError::Fixture {
            line,
            message: format!("expected {expected} values, got {}", values.len()),
        });
    }
    Ok(values)
}

pub fn parse_distance_sample(text: &str) -> Result<DistanceSample, BoidsError> {
    let v = record_of_len(text, 4)?;
    Ok(DistanceSample {
        a: Vector2::new(v[0], v[1]),
        b: Vector2::new(v[2], v[3]),
    })
}

pub fn parse_force_sample(text: &str) -> Result<ForceSample, BoidsError> {
    let v = record_of_len(text, 10)?;
    Ok(ForceSample {
        b1_position: Vector2::new(v[0], v[1]),
        b2_position: Vector2::new(v[2], v[3]),
        b2_velocity: Vector2::new(v[4], v[5]),
        proximity: v[6],
        separation: v[7],
        alignment: v[8],
        cohesion: v[9],
    })
}

pub fn parse_scalar(text: &str) -> Result<f64, BoidsError> {
    Ok(record_of_len(text, 1)?[0])
}

pub fn parse_pair(text: &str) -> Result<Vector2, BoidsError> {
    let v = record_of_len(text, 2)?;
    Ok(Vector2::new(v[0], v[1]))
}

/// Reads `path` and parses it with `parse`.
pub fn read_fixture<T>(
    path: &Path,
    parse: impl Fn(&str) -> Result<T, BoidsError>,
) -> Result<T, BoidsError> {
    let text = fs::read_to_string(path)
        .map_err(|e| BoidsError::Io(format!("{}: {e}", path.display())))?;
    parse(&text)
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>, BoidsError> {
    let mut entries = fs::read_dir(dir)
        .map_err(|e| BoidsError::Io(format!("{}: {e}", dir.display())))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()?;
    entries.retain(|p| p.is_file());
    entries.sort();
    Ok(entries)
}

/// Pairs `dir/input/*` with `dir/output/*` by sorted file name.
///
/// Returns `BoidsError::Fixture` if the two folders hold different numbers of
/// files.
pub fn paired_cases(dir: &Path) -> Result<Vec<(PathBuf, PathBuf)>, BoidsError> {
    let inputs = sorted_entries(&dir.join("input"))?;
    let outputs = sorted_entries(&dir.join("output"))?;
    if inputs.len() != outputs.len() {
        return Err(BoidsError::Fixture {
            line: 0,
            message: format!(
                "{}: {} input files but {} output files",
                dir.display(),
                inputs.len(),
                outputs.len()
            ),
        });
    }
    Ok(inputs.into_iter().zip(outputs).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_sample_skips_comments_and_blanks() {
        let text = "# distance case\n\n   \n0 0 3 4\n";
        let s = parse_distance_sample(text).unwrap();
        assert_eq!(s.a, Vector2::new(0.0, 0.0));
        assert_eq!(s.b, Vector2::new(3.0, 4.0));
    }

    #[test]
    fn distance_sample_uses_first_record_only() {
        let s = parse_distance_sample("1 2 3 4\n5 6 7 8\n").unwrap();
        assert_eq!(s.b, Vector2::new(3.0, 4.0));
    }

    #[test]
    fn distance_sample_rejects_wrong_arity() {
        let err = parse_distance_sample("# header\n1 2 3\n").unwrap_err();
        assert!(matches!(err, BoidsError::Fixture { line: 2, .. }), "{err}");
    }

    #[test]
    fn force_sample_parses_ten_values() {
        let s = parse_force_sample("# b1 b2 b2v prox S A C\n0 0 2 0 4 0 10 1 1 1\n").unwrap();
        assert_eq!(s.b1_position, Vector2::new(0.0, 0.0));
        assert_eq!(s.b2_position, Vector2::new(2.0, 0.0));
        assert_eq!(s.b2_velocity, Vector2::new(4.0, 0.0));
        assert_eq!(s.proximity, 10.0);
        assert_eq!((s.separation, s.alignment, s.cohesion), (1.0, 1.0, 1.0));
        let (b1, b2) = s.boids();
        assert_eq!(b1.velocity, Vector2::ZERO);
        assert_eq!(b2.velocity, Vector2::new(4.0, 0.0));
    }

    #[test]
    fn force_sample_rejects_bad_number() {
        let err = parse_force_sample("0 0 2 0 4 0 ten 1 1 1").unwrap_err();
        assert!(err.to_string().contains("ten"), "{err}");
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(parse_scalar("# only comments\n\n").is_err());
    }

    #[test]
    fn scalar_and_pair_outputs() {
        assert_eq!(parse_scalar("5.0\n").unwrap(), 5.0);
        assert_eq!(parse_pair("-0.5 0\n").unwrap(), Vector2::new(-0.5, 0.0));
    }

    #[test]
    fn paired_cases_matches_sorted_names() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("input")).unwrap();
        fs::create_dir(dir.path().join("output")).unwrap();
        for name in ["b.txt", "a.txt"] {
            fs::write(dir.path().join("input").join(name), "0 0 3 4").unwrap();
            fs::write(dir.path().join("output").join(name), "5").unwrap();
        }
        let cases = paired_cases(dir.path()).unwrap();
        assert_eq!(cases.len(), 2);
        assert!(cases[0].0.ends_with("input/a.txt"));
        assert!(cases[0].1.ends_with("output/a.txt"));
        let expected = read_fixture(&cases[1].1, parse_scalar).unwrap();
        assert_eq!(expected, 5.0);
    }

    #[test]
    fn paired_cases_rejects_mismatched_counts() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("input")).unwrap();
        fs::create_dir(dir.path().join("output")).unwrap();
        fs::write(dir.path().join("input").join("a.txt"), "0 0 3 4").unwrap();
        assert!(paired_cases(dir.path()).is_err());
    }

    #[test]
    fn read_fixture_reports_missing_file() {
        let err = read_fixture(Path::new("/definitely/not/here.txt"), parse_scalar).unwrap_err();
        assert!(matches!(err, BoidsError::Io(_)));
    }
}
