//! Environment engine and state management.

use rand_chacha::ChaCha8Rng;

use crate::card::CardValue;
use crate::hand::Hand;
use crate::options::EnvOptions;
use crate::shoe::{InfiniteShoe, Shoe};

mod actions;
mod dealer;
pub mod state;

pub use state::{Observation, Step};

/// A single-player blackjack round modeled as a stateful environment.
///
/// The engine owns the player hand, the dealer hand, and the round lifecycle.
/// Drive it through [`step`](Self::step) (or the per-action methods) and read
/// back an [`Observation`] plus a reward after every transition.
///
/// One engine instance models one round at a time and is not designed for
/// concurrent access; instantiate one engine per thread for parallel
/// rollouts.
#[derive(Debug, Clone)]
pub struct Environment<S = InfiniteShoe<ChaCha8Rng>> {
    /// Environment options.
    options: EnvOptions,
    /// Card source.
    shoe: S,
    /// The player's hand.
    player: Hand,
    /// The dealer's hand.
    dealer: Hand,
    /// The dealer's single visible card.
    dealer_showing: CardValue,
    /// Whether a round is in progress.
    active: bool,
    /// Last emitted observation.
    observation: Observation,
}

impl Environment {
    /// Creates an environment over the default infinite shoe with the given
    /// seed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use bjenv::{EnvOptions, Environment};
    ///
    /// let env = Environment::new(EnvOptions::default(), 42);
    /// let _ = env;
    /// ```
    #[must_use]
    pub fn new(options: EnvOptions, seed: u64) -> Self {
        Self::with_shoe(options, InfiniteShoe::seed_from_u64(seed))
    }
}

impl<S: Shoe> Environment<S> {
    /// Creates an environment over an injected card source.
    ///
    /// Any conforming [`Shoe`] works: the default PRNG, a differently seeded
    /// one, or a scripted sequence for deterministic tests.
    #[must_use]
    pub const fn with_shoe(options: EnvOptions, shoe: S) -> Self {
        Self {
            options,
            shoe,
            player: Hand::new(),
            dealer: Hand::new(),
            dealer_showing: 0,
            active: false,
            observation: Observation::Terminal,
        }
    }

    /// Returns whether a round is in progress.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the last emitted observation.
    #[must_use]
    pub const fn observation(&self) -> Observation {
        self.observation
    }

    /// Returns the environment options.
    #[must_use]
    pub const fn options(&self) -> EnvOptions {
        self.options
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand, hidden card included.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        &self.dealer
    }

    /// Builds the in-play observation from the current hands.
    fn snapshot(&self) -> Observation {
        Observation::InPlay {
            player_sum: self.player.sum(),
            dealer_showing: self.dealer_showing,
            usable_ace: self.player.has_usable_ace(),
        }
    }
}
