//! Random sources for sky generation.
//!
//! [`RandomSource`] is the seam the world factory draws from, so tests can
//! inject a scripted sequence. [`Xorshift64`] is the default implementation:
//! same seed, same sky, on every platform.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// A stream of uniform samples in `[0, 1)`.
pub trait RandomSource {
    /// Returns the next uniformly distributed f64 in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Returns a uniformly distributed f64 in `[min, max)`.
    fn next_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }
}

/// Xorshift64 deterministic PRNG with shifts (13, 7, 17).
///
/// Seed 0 is a fixed point of the algorithm and is replaced by a non-zero
/// fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    const FALLBACK_SEED: u64 = 0x5EED_B01D_F10C_CA75;

    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Seeds from the wall clock. Runs built this way are not reproducible.
    pub fn from_time() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        Self::new(nanos)
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }
}

impl RandomSource for Xorshift64 {
    /// Upper 53 bits of `next_u64()` over 2^53.
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}
