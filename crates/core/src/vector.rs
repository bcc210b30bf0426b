//! Two-dimensional `f64` vector used for boid position, velocity and acceleration.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

/// A 2-D vector. Two vectors are equal iff both components are equal.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector at `theta` radians from the positive x axis, scaled by `length`.
    pub fn from_polar(length: f64, theta: f64) -> Self {
        Self {
            x: length * theta.cos(),
            y: length * theta.sin(),
        }
    }

    /// Euclidean length.
    pub fn magnitude(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Euclidean distance between two points.
    pub fn distance(self, other: Vector2) -> f64 {
        (self - other).magnitude()
    }

    /// Rescales to at most `max` length, keeping direction.
    ///
    /// A zero `max` yields the zero vector.
    pub fn clamp_magnitude(self, max: f64) -> Self {
        let mag = self.magnitude();
        if mag > max {
            self * (max / mag)
        } else {
            self
        }
    }

    /// Cosine of the angle between two vectors, `None` if either is zero.
    pub fn cosine_similarity(self, other: Vector2) -> Option<f64> {
        let denom = self.magnitude() * other.magnitude();
        if denom == 0.0 {
            return None;
        }
        Some((self.x * other.x + self.y * other.y) / denom)
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl Neg for Vector2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl Div<f64> for Vector2 {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        Self::new(self.x / scalar, self.y / scalar)
    }
}
