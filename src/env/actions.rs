use log::{debug, info};

use crate::action::Action;
use crate::card::ACE;
use crate::error::StepError;
use crate::shoe::Shoe;

use super::{Environment, Observation, Step};

impl<S: Shoe> Environment<S> {
    /// Advances the environment by one action.
    ///
    /// Dispatches to [`reset`](Self::reset), [`hit`](Self::hit), or
    /// [`stick`](Self::stick) and returns the resulting observation and
    /// reward as one value.
    ///
    /// # Errors
    ///
    /// Returns an error if the action violates the round lifecycle: reset
    /// while a round is in progress, or hit/stick while none is. The engine
    /// state is unchanged on error.
    pub fn step(&mut self, action: Action) -> Result<Step, StepError> {
        match action {
            Action::Reset => self.reset(),
            Action::Hit => self.hit(),
            Action::Stick => self.stick(),
        }
    }

    /// Starts a new round.
    ///
    /// Draws single player cards until the player sum reaches 12; an ace
    /// drawn while the sum is below 11 is counted as 11 and flagged usable.
    /// The rule is exactly that narrow: it never revisits earlier draws, so a
    /// hand built ace-then-ace keeps only the first ace at 11. Then draws two
    /// dealer cards, of which the second is shown.
    ///
    /// A player sum of exactly 21 is a natural blackjack and resolves
    /// immediately: push (reward 0) if the dealer's two cards are an ace and
    /// a ten-value card, otherwise a win (reward 1).
    ///
    /// # Errors
    ///
    /// Returns [`StepError::RoundInProgress`] if called mid-round; the
    /// current round is preserved.
    pub fn reset(&mut self) -> Result<Step, StepError> {
        if self.active {
            return Err(StepError::RoundInProgress);
        }

        if self.options.verbose {
            info!("round reset");
        }

        self.player.clear();
        self.dealer.clear();
        self.active = true;

        while self.player.sum() < 12 {
            let card = self.shoe.draw_one();
            let elevate = card == ACE && self.player.sum() < 11;
            self.player.add(card);
            if elevate {
                self.player.elevate_ace();
            }
            if self.options.verbose {
                debug!(
                    "player draws {card}; sum {}{}",
                    self.player.sum(),
                    if elevate { " (ace as 11)" } else { "" }
                );
            }
        }

        let dealer_cards = self.shoe.draw(2);
        for &card in &dealer_cards {
            self.dealer.add(card);
        }
        // Fixed convention: the second drawn card is the one shown.
        self.dealer_showing = dealer_cards[1];

        if self.options.verbose {
            debug!("player cards: {:?}", self.player.cards());
            debug!("dealer showing card: {}", self.dealer_showing);
        }

        if self.player.sum() == 21 {
            self.active = false;
            self.observation = Observation::Terminal;
            let reward = if self.dealer.is_blackjack() { 0 } else { 1 };
            if self.options.verbose {
                info!(
                    "player has blackjack; dealer cards {:?}: {}",
                    self.dealer.cards(),
                    if reward == 0 { "push" } else { "player wins" }
                );
            }
            return Ok(Step {
                observation: Observation::Terminal,
                reward,
            });
        }

        self.observation = self.snapshot();
        Ok(Step {
            observation: self.observation,
            reward: 0,
        })
    }

    /// Draws one more card for the player.
    ///
    /// If the new sum exceeds 21 and a usable ace is held, that one ace is
    /// demoted back to 1 (a single attempt, never a loop). A sum still above
    /// 21 is a bust: the round ends with reward -1. Otherwise the round
    /// continues with reward 0.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::NoActiveRound`] if no round is in progress.
    pub fn hit(&mut self) -> Result<Step, StepError> {
        if !self.active {
            return Err(StepError::NoActiveRound);
        }

        let card = self.shoe.draw_one();
        self.player.add(card);
        if self.options.verbose {
            debug!("player draws {card}");
        }

        if self.player.sum() > 21 && self.player.has_usable_ace() {
            self.player.demote_ace();
            if self.options.verbose {
                debug!("player converts a usable ace (11) into 1");
            }
        }

        if self.player.sum() > 21 {
            self.active = false;
            self.observation = Observation::Terminal;
            if self.options.verbose {
                info!("player goes bust at {}", self.player.sum());
            }
            return Ok(Step {
                observation: Observation::Terminal,
                reward: -1,
            });
        }

        if self.options.verbose {
            debug!("player sum now {}", self.player.sum());
        }
        self.observation = self.snapshot();
        Ok(Step {
            observation: self.observation,
            reward: 0,
        })
    }
}
