//! Observable state types.

/// The caller-visible snapshot of a round.
///
/// While a round is active this is the classic blackjack RL observation
/// triple; once the round ends (bust, stick resolution, or an immediate
/// natural blackjack) it becomes [`Terminal`](Self::Terminal), a defined
/// end-of-round marker rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Observation {
    /// A round is in progress.
    InPlay {
        /// Current sum of the player's hand.
        player_sum: u8,
        /// The dealer's single visible card.
        dealer_showing: u8,
        /// Whether the player holds an ace currently counted as 11.
        usable_ace: bool,
    },
    /// The round has ended.
    Terminal,
}

impl Observation {
    /// Encodes the observation as a numeric vector for RL consumers.
    ///
    /// The terminal marker encodes as `[-1, -1, -1]`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjenv::Observation;
    ///
    /// assert_eq!(Observation::Terminal.to_array(), [-1, -1, -1]);
    /// ```
    #[must_use]
    pub const fn to_array(self) -> [i32; 3] {
        match self {
            Self::InPlay {
                player_sum,
                dealer_showing,
                usable_ace,
            } => [player_sum as i32, dealer_showing as i32, usable_ace as i32],
            Self::Terminal => [-1, -1, -1],
        }
    }

    /// Returns whether this is the end-of-round marker.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Terminal)
    }
}

/// The atomic result of one environment transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Snapshot of the observable state after the transition.
    pub observation: Observation,
    /// Scalar reward, always in `{-1, 0, 1}`.
    pub reward: i8,
}
