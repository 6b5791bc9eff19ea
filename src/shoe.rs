//! The randomness capability: drawing cards from an infinite shoe.

extern crate alloc;

use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{CardValue, NUM_RANKS, rank_value};

/// A source of card draws.
///
/// Draws are independent and with replacement, each distributed as a uniform
/// physical rank collapsed to its blackjack value (see [`rank_value`]). The
/// environment is correct for any conforming implementation; tests typically
/// substitute a scripted sequence.
pub trait Shoe {
    /// Draws `n` card values.
    fn draw(&mut self, n: usize) -> Vec<CardValue>;

    /// Draws a single card value.
    fn draw_one(&mut self) -> CardValue {
        self.draw(1)[0]
    }
}

/// The default shoe: an effectively infinite, uniformly shuffled supply of
/// single-deck cards driven by a seedable PRNG.
#[derive(Debug, Clone)]
pub struct InfiniteShoe<R> {
    rng: R,
}

impl InfiniteShoe<ChaCha8Rng> {
    /// Creates a shoe seeded from a `u64`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjenv::{InfiniteShoe, Shoe};
    ///
    /// let mut shoe = InfiniteShoe::seed_from_u64(42);
    /// let card = shoe.draw_one();
    /// assert!((1..=10).contains(&card));
    /// ```
    #[must_use]
    pub fn seed_from_u64(seed: u64) -> Self {
        Self::from_rng(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> InfiniteShoe<R> {
    /// Creates a shoe over an arbitrary random number generator.
    #[must_use]
    pub const fn from_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Shoe for InfiniteShoe<R> {
    fn draw(&mut self, n: usize) -> Vec<CardValue> {
        (0..n)
            .map(|_| rank_value(self.rng.random_range(1..=NUM_RANKS)))
            .collect()
    }

    fn draw_one(&mut self) -> CardValue {
        rank_value(self.rng.random_range(1..=NUM_RANKS))
    }
}
