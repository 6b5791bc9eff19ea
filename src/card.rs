//! Card value model and draw distribution.
//!
//! The environment observes card *values* only: an integer in `[1, 10]` where
//! 1 is an ace and 10 stands for any ten-value card (ten, jack, queen, king).
//! Suits never influence a blackjack round and are not modeled.

/// A drawn card value in `[1, 10]`.
pub type CardValue = u8;

/// The ace, worth 1 or 11 depending on the hand.
pub const ACE: CardValue = 1;

/// The ten-value bucket (ten and all face cards).
pub const TEN: CardValue = 10;

/// Number of ranks in a physical deck.
pub const NUM_RANKS: u8 = 13;

/// Collapses a physical rank in `[1, 13]` to its blackjack value.
///
/// Ranks 11..=13 (jack, queen, king) collapse to 10. Drawing a uniform rank
/// and collapsing it yields the standard single-deck value distribution:
/// each of 1..=9 with mass 4/52 and 10 with mass 16/52.
///
/// # Example
///
/// ```
/// use bjenv::card::rank_value;
///
/// assert_eq!(rank_value(1), 1);
/// assert_eq!(rank_value(7), 7);
/// assert_eq!(rank_value(12), 10);
/// ```
#[must_use]
pub const fn rank_value(rank: u8) -> CardValue {
    if rank > 10 { 10 } else { rank }
}
