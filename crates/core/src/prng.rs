//! Deterministic PRNG based on the Mulberry32 algorithm.
//!
//! One 32-bit seed produces an unbounded, reproducible stream of uniform
//! values in [0, 1). All arithmetic wraps at 32 bits, so the sequence is
//! identical on every platform and matches the canonical Mulberry32 output
//! bit for bit.

use serde::{Deserialize, Serialize};

/// Mulberry32 deterministic PRNG. Same seed always produces the same sequence.
///
/// The state only ever moves forward: there is no way to rewind or reset a
/// stream once it has been advanced. Every `u32` is a valid seed, including 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Weyl sequence increment added to the state on every step.
    const INCREMENT: u32 = 0x6D2B_79F5;

    /// 2^32, the divisor mapping a raw output onto [0, 1).
    const SCALE: f64 = 4_294_967_296.0;

    /// Creates a new stream keyed by `seed`.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advances the state and returns the next raw 32-bit output.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(Self::INCREMENT);
        let a = self.state;
        let mut t = (a ^ (a >> 15)).wrapping_mul(a | 1);
        t = t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61)) ^ t;
        t ^ (t >> 14)
    }

    /// Returns a uniformly distributed f64 in [0, 1).
    #[doc(alias = "advance")]
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / Self::SCALE
    }

    /// Returns an index in `[0, len)` as `floor(next_f64() * len)`.
    ///
    /// The result is clamped to `len - 1`, so it never leaves the range even
    /// if the float product rounds up. Returns 0 when `len` is 0.
    pub fn next_index(&mut self, len: usize) -> usize {
        let v = self.next_f64();
        ((v * len as f64) as usize).min(len.saturating_sub(1))
    }
}
