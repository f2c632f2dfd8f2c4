//! The 48-bit linear congruential generator used by Java's `java.util.Random`.
//!
//! The exact update rule, bit widths, and the rejection-sampling loop in
//! [`JavaRandom::next_int`] are all part of the compatibility contract. Do not
//! "simplify" any of it: the reference sequences in the tests below were
//! produced by a genuine JVM and must keep matching.

/// LCG multiplier, `0x5DEECE66D`. Wire contract, not a tunable.
const MULTIPLIER: u64 = 0x5DEECE66D;
/// LCG increment. Wire contract, not a tunable.
const INCREMENT: u64 = 0xB;
/// The generator state is masked to 48 bits after every step.
const MASK_48: u64 = (1 << 48) - 1;

/// Errors from [`JavaRandom`] draws.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RandomError {
    /// `next_int` requires a strictly positive bound.
    #[error("bound must be positive, got {0}")]
    NonPositiveBound(i32),
}

/// A drop-in reimplementation of `java.util.Random`.
///
/// State is owned exclusively by one instance and mutated only through its own
/// draw methods; instances are cheap to construct, so callers create one per
/// derived seed rather than sharing.
#[derive(Clone, Debug)]
pub struct JavaRandom {
    state: u64,
}

impl JavaRandom {
    /// Creates a generator seeded exactly like `new java.util.Random(seed)`.
    pub fn new(seed: i64) -> Self {
        let mut random = Self { state: 0 };
        random.set_seed(seed);
        random
    }

    /// Re-seeds the generator: state becomes `(seed ^ 0x5DEECE66D) & MASK_48`.
    pub fn set_seed(&mut self, seed: i64) {
        self.state = (seed as u64 ^ MULTIPLIER) & MASK_48;
    }

    /// Advances the LCG once and returns the top `bits` bits of the new state,
    /// viewed as a signed 32-bit integer when `bits == 32`.
    fn next(&mut self, bits: u32) -> i32 {
        debug_assert!((1..=32).contains(&bits));
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT)
            & MASK_48;
        (self.state >> (48 - bits)) as i64 as i32
    }

    /// Uniform draw in `[0, bound)`, bit-for-bit identical to Java's
    /// `nextInt(int)` including the power-of-two fast path and the signed
    /// overflow check in the rejection loop.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::NonPositiveBound`] if `bound <= 0`.
    pub fn next_int(&mut self, bound: i32) -> Result<i32, RandomError> {
        if bound <= 0 {
            return Err(RandomError::NonPositiveBound(bound));
        }
        if bound & bound.wrapping_neg() == bound {
            // Power of two: take the high bits of one draw.
            return Ok(((bound as i64).wrapping_mul(self.next(31) as i64) >> 31) as i32);
        }
        loop {
            let bits = self.next(31);
            let val = bits % bound;
            // Reject draws from the truncated top interval. The overflow check
            // must run in 32-bit signed arithmetic to match Java.
            if bits.wrapping_sub(val).wrapping_add(bound - 1) >= 0 {
                return Ok(val);
            }
        }
    }

    /// Java's `nextLong()`: two 32-bit draws combined with wrapping arithmetic.
    pub fn next_long(&mut self) -> i64 {
        let hi = self.next(32) as i64;
        let lo = self.next(32) as i64;
        (hi << 32).wrapping_add(lo)
    }

    /// Java's `nextDouble()`: 53 bits of mantissa over `2^53`.
    pub fn next_double(&mut self) -> f64 {
        let hi = (self.next(26) as i64) << 27;
        let lo = self.next(27) as i64;
        (hi + lo) as f64 / (1i64 << 53) as f64
    }

    /// Java's `nextFloat()`: 24 bits over `2^24`.
    pub fn next_float(&mut self) -> f32 {
        self.next(24) as f32 / (1i32 << 24) as f32
    }

    /// Java's `nextBoolean()`.
    pub fn next_bool(&mut self) -> bool {
        self.next(1) != 0
    }
}
