//! RNG module - seeded 48-bit linear congruential generator
//!
//! Level generation must replay the exact same bubbles for a given seed on every
//! platform, so the generator is reimplemented here instead of borrowing a general
//! purpose RNG. The algorithm is the classic 48-bit LCG:
//!
//! - state' = (state * 0x5DEECE66D + 0xB) mod 2^48
//! - a seed is scrambled once with `seed ^ 0x5DEECE66D` before use
//! - a draw of `bits` bits returns the top `bits` bits of the new state
//!
//! Bounded draws use the power-of-two fast path and the rejection loop that keeps
//! the distribution uniform for other bounds.

/// LCG multiplier
pub const MULTIPLIER: u64 = 0x5_DEEC_E66D;

/// LCG increment
pub const INCREMENT: u64 = 0xB;

/// State is kept modulo 2^48
const STATE_MASK: u64 = (1 << 48) - 1;

/// Scramble a user seed into an initial LCG state
#[inline]
pub fn scramble(seed: i64) -> u64 {
    (seed as u64 ^ MULTIPLIER) & STATE_MASK
}

/// Advance an LCG state by one step
#[inline]
pub fn lcg_step(state: u64) -> u64 {
    state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT) & STATE_MASK
}

/// Seeded level RNG
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelRng {
    state: u64,
}

impl LevelRng {
    /// Create a new RNG from a seed
    pub fn new(seed: i64) -> Self {
        Self {
            state: scramble(seed),
        }
    }

    /// Current 48-bit state
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Draw the top `bits` bits of the next state (1..=32)
    pub fn next_bits(&mut self, bits: u32) -> i32 {
        debug_assert!((1..=32).contains(&bits));
        self.state = lcg_step(self.state);
        (self.state >> (48 - bits)) as u32 as i32
    }

    /// Draw a full 32-bit signed value
    pub fn next_i32(&mut self) -> i32 {
        self.next_bits(32)
    }

    /// Draw a uniform value in `[0, bound)`
    ///
    /// Non-positive bounds return 0 without advancing the state.
    pub fn next_below(&mut self, bound: i32) -> i32 {
        if bound <= 0 {
            return 0;
        }

        if bound & bound.wrapping_neg() == bound {
            // Power of two: take the high bits directly.
            return ((bound as i64 * self.next_bits(31) as i64) >> 31) as i32;
        }

        loop {
            let bits = self.next_bits(31);
            let value = bits % bound;
            // Reject draws from the incomplete last bucket (the sum overflows past i32::MAX).
            if bits.wrapping_sub(value).wrapping_add(bound - 1) >= 0 {
                return value;
            }
        }
    }
}
