use core::cmp::Ordering;

use log::{debug, info};

use crate::error::StepError;
use crate::shoe::Shoe;

use super::{Environment, Observation, Step};

impl<S: Shoe> Environment<S> {
    /// Ends the player's turn, plays out the dealer, and scores the round.
    ///
    /// The dealer applies the soft-ace rule before and after every draw: an
    /// ace still counted as 1 is elevated to 11 whenever that lands the sum
    /// in `[17, 21]`. The dealer draws single cards while below 17. A dealer
    /// sum above 21 is a dealer bust (reward 1); otherwise whichever side is
    /// closer to 21 wins, with equal distance a push.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::NoActiveRound`] if no round is in progress.
    pub fn stick(&mut self) -> Result<Step, StepError> {
        if !self.active {
            return Err(StepError::NoActiveRound);
        }

        self.active = false;

        if self.options.verbose {
            debug!("dealer cards: {:?}", self.dealer.cards());
        }

        self.dealer_soft_ace_rule();
        while self.dealer.sum() < 17 {
            let card = self.shoe.draw_one();
            self.dealer.add(card);
            self.dealer_soft_ace_rule();
            if self.options.verbose {
                debug!("dealer draws {card}; sum {}", self.dealer.sum());
            }
        }

        let reward = self.score_round();
        self.observation = Observation::Terminal;
        Ok(Step {
            observation: Observation::Terminal,
            reward,
        })
    }

    /// Elevates one dealer ace to 11 if that puts the sum in `[17, 21]`.
    fn dealer_soft_ace_rule(&mut self) {
        if self.dealer.unelevated_aces() > 0 && (17..=21).contains(&(self.dealer.sum() + 10)) {
            self.dealer.elevate_ace();
            if self.options.verbose {
                debug!("dealer converts 1 into 11; sum {}", self.dealer.sum());
            }
        }
    }

    /// Compares the finished hands and returns the reward.
    fn score_round(&self) -> i8 {
        let dealer_margin = 21 - i32::from(self.dealer.sum());
        if dealer_margin < 0 {
            if self.options.verbose {
                info!("dealer goes bust at {}", self.dealer.sum());
            }
            return 1;
        }

        // The player's sum is capped at 21 here, or the round would already
        // have ended in a bust.
        let player_margin = 21 - i32::from(self.player.sum());
        let reward = match player_margin.cmp(&dealer_margin) {
            Ordering::Equal => 0,
            Ordering::Less => 1,
            Ordering::Greater => -1,
        };
        if self.options.verbose {
            info!(
                "player {} vs dealer {}: {}",
                self.player.sum(),
                self.dealer.sum(),
                match reward {
                    0 => "push",
                    1 => "player wins",
                    _ => "dealer wins",
                }
            );
        }
        reward
    }
}
