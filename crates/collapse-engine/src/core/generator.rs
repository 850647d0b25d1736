/// 32-bit linear congruential generator parameters.
///
/// These are engine constants, not per-game tunables: every replayed game
/// must draw the exact same values for a given seed, across runs and across
/// implementations.
const MODULUS: u64 = 1 << 32;
const MULTIPLIER: u64 = 1_664_525;
const INCREMENT: u64 = 1_013_904_223;

/// Deterministic tile value source.
///
/// Given a seed, produces a reproducible infinite sequence of tile values.
/// Each draw advances the LCG state once and maps it uniformly into
/// `[1, max_value]`:
///
/// ```text
/// state = (state * a + c) mod 2^32
/// value = (max_value * state) / 2^32 + 1
/// ```
///
/// The sequence is bit-identical for a fixed seed and draw order, which is
/// what makes move-log replay and remote score validation possible.
///
/// # Example
///
/// ```
/// use collapse_engine::ValueGenerator;
///
/// let mut a = ValueGenerator::new(42);
/// let mut b = ValueGenerator::new(42);
/// assert_eq!(a.next_value(3), b.next_value(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueGenerator {
    state: u64,
}

impl ValueGenerator {
    /// Creates a generator seeded with `seed mod 2^32`.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self {
            state: seed % MODULUS,
        }
    }

    /// Draws the next tile value in `[1, max_value]`.
    ///
    /// The quotient is strictly less than `max_value`, so the narrowing
    /// cast cannot truncate.
    #[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
    pub const fn next_value(&mut self, max_value: u8) -> u8 {
        self.state = (self.state * MULTIPLIER + INCREMENT) % MODULUS;
        ((max_value as u64 * self.state) / MODULUS) as u8 + 1
    }

    /// Returns the raw LCG state, for state inspection in tests.
    #[must_use]
    pub const fn state(&self) -> u64 {
        self.state
    }
}
