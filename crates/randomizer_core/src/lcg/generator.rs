//! Stateful LCG generator.
//!
//! This module provides [`Randomizer`], a seeded generator producing floats
//! in `[0, 1)` and rounded bounded integers, one recurrence step per draw.

use super::iter::{Floats, Ints};
use super::{INCREMENT, MODULUS, MULTIPLIER};
use crate::error::RandomizerError;
use crate::seed::SeedSource;

/// Seeded linear congruential generator.
///
/// Holds a single 64-bit state. Before the first draw the state is exactly
/// the seed supplied by the caller, which may be any integer; every draw
/// normalises it into `[0, MODULUS)`.
///
/// The type is `Copy`: copying forks an independent generator that replays
/// the same sequence from the current position. A single instance must not
/// be shared across threads without external synchronisation; give each
/// consumer its own copy instead.
///
/// # Examples
///
/// ```rust
/// use randomizer_core::Randomizer;
///
/// let mut rng = Randomizer::new(42);
///
/// let u: f64 = rng.next_float();
/// assert!((0.0..1.0).contains(&u));
///
/// let n: i32 = rng.next_int(10);
/// assert!((0..=10).contains(&n));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Randomizer {
    /// Current recurrence state (the raw seed until the first draw).
    state: i64,
    /// The seed used for initialisation (stored for reproducibility tracking).
    seed: i64,
}

impl Randomizer {
    /// Creates a generator whose state is the given seed.
    ///
    /// Any integer is accepted, including zero, negative values and values
    /// outside `[0, MODULUS)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use randomizer_core::Randomizer;
    ///
    /// let mut a = Randomizer::new(12345);
    /// let mut b = Randomizer::new(12345);
    ///
    /// // Same seed produces identical sequences
    /// assert_eq!(a.next_float(), b.next_float());
    /// ```
    #[inline]
    pub fn new(seed: i64) -> Self {
        tracing::trace!(seed, "Randomizer initialised");
        Self { state: seed, seed }
    }

    /// Creates a generator seeded from the given source.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use randomizer_core::{FixedSeed, Randomizer};
    ///
    /// let rng = Randomizer::from_source(&FixedSeed(7));
    /// assert_eq!(rng.seed(), 7);
    /// ```
    pub fn from_source<S: SeedSource>(source: &S) -> Self {
        let seed = source.seed();
        tracing::debug!(seed, "Seed resolved from source");
        Self::new(seed)
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> i64 {
        self.seed
    }

    /// Returns the current raw state.
    ///
    /// Equal to the seed until the first draw, then always in
    /// `[0, MODULUS)`.
    #[inline]
    pub fn state(&self) -> i64 {
        self.state
    }

    /// Advances the recurrence by one step and returns the new state.
    ///
    /// The incoming state is reduced first so the multiply cannot overflow
    /// for any `i64` seed; `rem_euclid` keeps negative seeds non-negative.
    #[inline]
    fn step(&mut self) -> i64 {
        let reduced = self.state.rem_euclid(MODULUS);
        self.state = (reduced * MULTIPLIER + INCREMENT).rem_euclid(MODULUS);
        self.state
    }

    /// Advances one step and returns `state / MODULUS`, in `[0, 1)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use randomizer_core::Randomizer;
    ///
    /// let mut rng = Randomizer::new(1);
    /// assert_eq!(rng.next_float(), 58598.0 / 233280.0);
    /// assert_eq!(rng.state(), 58598);
    /// ```
    #[inline]
    pub fn next_float(&mut self) -> f64 {
        self.step() as f64 / MODULUS as f64
    }

    /// Advances one step and returns `round(next_float() * max)`.
    ///
    /// Rounding is half-away-from-zero. The result lies between `0` and
    /// `max` inclusive on both ends: near the top of the float range the
    /// product rounds up to `max` itself. `max = 0` always yields `0` and a
    /// negative `max` yields values in `[max, 0]`; neither is rejected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use randomizer_core::Randomizer;
    ///
    /// let mut rng = Randomizer::new(1);
    /// assert_eq!(rng.next_int(100), 25);
    /// assert_eq!(rng.next_int(0), 0);
    /// ```
    #[inline]
    pub fn next_int(&mut self, max: i32) -> i32 {
        // |product| <= |max|, so the cast is exact.
        (self.next_float() * f64::from(max)).round() as i32
    }

    /// Checked variant of [`next_int`](Self::next_int) accepting a wide bound.
    ///
    /// Returns [`RandomizerError::BoundOutOfRange`] when `max` does not fit
    /// in an `i32`. On error the state is left untouched; on success exactly
    /// one step is consumed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use randomizer_core::{Randomizer, RandomizerError};
    ///
    /// let mut rng = Randomizer::new(1);
    /// assert_eq!(
    ///     rng.try_next_int(1 << 40),
    ///     Err(RandomizerError::BoundOutOfRange { max: 1 << 40 })
    /// );
    /// assert_eq!(rng.try_next_int(100), Ok(25));
    /// ```
    pub fn try_next_int(&mut self, max: i64) -> Result<i32, RandomizerError> {
        let bound = i32::try_from(max).map_err(|_| RandomizerError::BoundOutOfRange { max })?;
        Ok(self.next_int(bound))
    }

    /// Returns an endless iterator of [`next_float`](Self::next_float) draws.
    #[inline]
    pub fn floats(&mut self) -> Floats<'_> {
        Floats::new(self)
    }

    /// Returns an endless iterator of [`next_int`](Self::next_int) draws.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use randomizer_core::Randomizer;
    ///
    /// let mut rng = Randomizer::new(1);
    /// let rolls: Vec<i32> = rng.ints(100).take(5).collect();
    /// assert_eq!(rolls, vec![25, 55, 34, 95, 77]);
    /// ```
    #[inline]
    pub fn ints(&mut self, max: i32) -> Ints<'_> {
        Ints::new(self, max)
    }
}
