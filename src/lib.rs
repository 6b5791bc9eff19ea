//! A single-player blackjack environment for reinforcement-learning agents.
//!
//! The crate provides an [`Environment`] type that models one blackjack round
//! as a small state machine: `reset` deals the hands, `hit` and `stick` drive
//! the round, and every transition returns an [`Observation`] snapshot plus a
//! scalar reward in `{-1, 0, 1}`.
//!
//! Cards are drawn with replacement from an effectively infinite shoe, so
//! observations carry no card-counting signal. Randomness is an injected
//! capability: any [`Shoe`] implementation works, from the default seedable
//! PRNG to a scripted card sequence in tests.
//!
//! # Example
//!
//! ```no_run
//! use bjenv::{Action, EnvOptions, Environment};
//!
//! let mut env = Environment::new(EnvOptions::default(), 42);
//! let step = env.step(Action::Reset).unwrap();
//! let _ = step.reward;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod action;
pub mod card;
pub mod env;
pub mod error;
pub mod hand;
pub mod options;
pub mod shoe;

// Re-export main types
pub use action::Action;
pub use card::{ACE, CardValue, TEN};
pub use env::{Environment, Observation, Step};
pub use error::{ParseActionError, StepError};
pub use hand::Hand;
pub use options::EnvOptions;
pub use shoe::{InfiniteShoe, Shoe};
