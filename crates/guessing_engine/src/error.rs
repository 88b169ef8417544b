//! Guess rejection errors.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

use crate::RulesError;

/// Reasons a guess is rejected without touching the game state.
///
/// The `Display` text is the feedback line shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Error)]
pub enum GuessError {
    /// The input text is not an integer.
    #[display("Please enter a valid number.")]
    NotANumber {
        /// Raw text as typed.
        input: String,
    },
    /// The value lies outside the current bounds.
    #[display("Guess must be between {low} and {high}. Try again!")]
    OutOfRange {
        /// The rejected value.
        value: i64,
        /// Current lower bound.
        low: i64,
        /// Current upper bound.
        high: i64,
    },
    /// The game has already been won or exhausted.
    #[display("The game is over. Restart to play again.")]
    GameOver,
    /// A game cannot be played by these rules.
    #[display("{_0}")]
    InvalidRules(RulesError),
}

impl From<RulesError> for GuessError {
    fn from(err: RulesError) -> Self {
        Self::InvalidRules(err)
    }
}
