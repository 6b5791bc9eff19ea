//! Hand representation with explicit ace accounting.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::{ACE, CardValue};

/// An ordered hand of drawn card values.
///
/// Cards are stored exactly as drawn (aces as 1) together with a count of
/// aces currently *elevated*, i.e. counted as 11. The sum is recomputed from
/// those two pieces on demand, so there is never an in-place rewrite of card
/// values to undo.
///
/// Ace elevation policy is deliberately left to the caller: the player and
/// dealer follow different rules, and neither is the textbook "minimize
/// below 21" recomputation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Card values as drawn.
    cards: Vec<CardValue>,
    /// Number of aces currently counted as 11.
    elevated_aces: u8,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            elevated_aces: 0,
        }
    }

    /// Adds a card to the hand at its face value (an ace counts as 1 until
    /// elevated).
    pub fn add(&mut self, card: CardValue) {
        self.cards.push(card);
    }

    /// Returns the current hand sum under the current ace interpretation.
    #[must_use]
    pub fn sum(&self) -> u8 {
        let raw: u8 = self.cards.iter().sum();
        raw + 10 * self.elevated_aces
    }

    /// Returns the number of aces not currently counted as 11.
    #[must_use]
    pub fn unelevated_aces(&self) -> u8 {
        let aces = self.cards.iter().filter(|&&c| c == ACE).count() as u8;
        aces - self.elevated_aces
    }

    /// Returns whether the hand holds a usable ace (one counted as 11).
    #[must_use]
    pub const fn has_usable_ace(&self) -> bool {
        self.elevated_aces > 0
    }

    /// Counts one more ace as 11, adding 10 to the sum.
    ///
    /// Returns `false` if no un-elevated ace is available.
    pub fn elevate_ace(&mut self) -> bool {
        if self.unelevated_aces() == 0 {
            return false;
        }
        self.elevated_aces += 1;
        true
    }

    /// Reverts one ace from 11 back to 1, subtracting 10 from the sum.
    ///
    /// Returns `false` if no ace is currently elevated.
    pub const fn demote_ace(&mut self) -> bool {
        if self.elevated_aces == 0 {
            return false;
        }
        self.elevated_aces -= 1;
        true
    }

    /// Returns the cards in draw order, aces as 1 regardless of elevation.
    #[must_use]
    pub fn cards(&self) -> &[CardValue] {
        &self.cards
    }

    /// Returns whether the hand is a natural blackjack: exactly one ace and
    /// one ten-value card.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2
            && self.cards.iter().filter(|&&c| c == 1).count() == 1
            && self.cards.iter().filter(|&&c| c == 10).count() == 1
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.elevated_aces = 0;
    }
}
