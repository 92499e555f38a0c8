//! Iterator adapters over a borrowed [`Randomizer`].
//!
//! Each yielded item consumes exactly one recurrence step. The iterators
//! never end; bound them with `take`.

use std::iter::FusedIterator;

use super::generator::Randomizer;

/// Endless iterator of floats in `[0, 1)`.
///
/// Created by [`Randomizer::floats`].
#[derive(Debug)]
pub struct Floats<'a> {
    rng: &'a mut Randomizer,
}

impl<'a> Floats<'a> {
    pub(crate) fn new(rng: &'a mut Randomizer) -> Self {
        Self { rng }
    }
}

impl Iterator for Floats<'_> {
    type Item = f64;

    #[inline]
    fn next(&mut self) -> Option<f64> {
        Some(self.rng.next_float())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl FusedIterator for Floats<'_> {}

/// Endless iterator of rounded integers between `0` and `max`.
///
/// Created by [`Randomizer::ints`].
#[derive(Debug)]
pub struct Ints<'a> {
    rng: &'a mut Randomizer,
    max: i32,
}

impl<'a> Ints<'a> {
    pub(crate) fn new(rng: &'a mut Randomizer, max: i32) -> Self {
        Self { rng, max }
    }
}

impl Iterator for Ints<'_> {
    type Item = i32;

    #[inline]
    fn next(&mut self) -> Option<i32> {
        Some(self.rng.next_int(self.max))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl FusedIterator for Ints<'_> {}
