//! RNG module - reseedable uniform integers and Fisher–Yates shuffling
//!
//! The games only ever need "a uniform integer below n" (spawn columns,
//! shuffles). [`RandomSource`] is the seam so tests can pin or replace the
//! generator; [`SimpleRng`] is the deterministic default.

/// Source of uniform integers.
pub trait RandomSource {
    /// Uniform integer in `0..n`. Returns 0 when `n` is 0.
    fn uniform_int(&mut self, n: u32) -> u32;

    /// Restart the sequence from `seed`.
    fn reseed(&mut self, seed: u32);
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Current generator state (feeding it to [`SimpleRng::new`] resumes the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn uniform_int(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        // Multiply-shift keeps the high bits; the low bits of an LCG cycle
        // with a tiny period.
        ((self.next_u32() as u64 * n as u64) >> 32) as u32
    }

    fn reseed(&mut self, seed: u32) {
        *self = Self::new(seed);
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Shuffle a slice in place using Fisher–Yates
pub fn shuffle<T, R: RandomSource + ?Sized>(rng: &mut R, slice: &mut [T]) {
    for i in (1..slice.len()).rev() {
        let j = rng.uniform_int((i + 1) as u32) as usize;
        slice.swap(i, j);
    }
}
