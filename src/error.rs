//! Error types for environment operations.

extern crate alloc;

use alloc::string::String;

use thiserror::Error;

/// Protocol violations during [`step`](crate::Environment::step).
///
/// Both variants leave the engine state unchanged; the caller may retry with
/// a valid action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StepError {
    /// Reset was requested while a round is still in progress.
    #[error("a round is still in progress; finish it before resetting")]
    RoundInProgress,
    /// Hit or stick was requested while no round is active.
    #[error("no active round; start one with the reset action")]
    NoActiveRound,
}

/// Failure to parse an action tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseActionError {
    /// The tag is not one of `reset`, `hit`, `stick`.
    #[error("unknown action `{0}`; expected `reset`, `hit`, or `stick`")]
    Unknown(String),
}
