//! Player actions.

extern crate alloc;

use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

use crate::error::ParseActionError;

/// An action submitted to the environment.
///
/// The set is closed: dispatch over it is exhaustive, so an unrecognized
/// action can only arise at the string boundary (see [`FromStr`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Start a new round.
    Reset,
    /// Draw one more card.
    Hit,
    /// End the player's turn and let the dealer play.
    Stick,
}

impl Action {
    /// Returns the wire/tag form of the action.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reset => "reset",
            Self::Hit => "hit",
            Self::Stick => "stick",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = ParseActionError;

    /// Parses an action tag.
    ///
    /// # Errors
    ///
    /// Returns [`ParseActionError`] for anything other than `"reset"`,
    /// `"hit"`, or `"stick"`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjenv::Action;
    ///
    /// assert_eq!("hit".parse::<Action>().unwrap(), Action::Hit);
    /// assert!("double".parse::<Action>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reset" => Ok(Self::Reset),
            "hit" => Ok(Self::Hit),
            "stick" => Ok(Self::Stick),
            other => Err(ParseActionError::Unknown(other.to_string())),
        }
    }
}
