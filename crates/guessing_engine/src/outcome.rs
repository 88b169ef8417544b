//! Results of evaluating a guess.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of an accepted, in-range guess.
///
/// The `Display` text is the feedback line shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum GuessOutcome {
    /// The guess was below the target; `low` has been raised.
    #[display("{guess} is too low. The number is between {low} and {high}. Try again!")]
    TooLow {
        /// The guessed value.
        guess: i64,
        /// Lower bound after narrowing.
        low: i64,
        /// Upper bound (unchanged).
        high: i64,
    },
    /// The guess was above the target; `high` has been lowered.
    #[display("{guess} is too high. The number is between {low} and {high}. Try again!")]
    TooHigh {
        /// The guessed value.
        guess: i64,
        /// Lower bound (unchanged).
        low: i64,
        /// Upper bound after narrowing.
        high: i64,
    },
    /// The guess hit the target. The game is won.
    #[display("Congratulations! {guess} is correct.")]
    Correct {
        /// The guessed value.
        guess: i64,
        /// Guesses taken, including this one.
        guesses: u32,
    },
    /// The last attempt missed. The game is lost.
    #[display("Sorry, you've run out of attempts. The number was {target}.")]
    Exhausted {
        /// The final, incorrect guess.
        guess: i64,
        /// The revealed target.
        target: i64,
    },
}

impl GuessOutcome {
    /// Returns how the game ended, or `None` if play continues.
    #[instrument]
    pub fn game_end(&self) -> Option<GameEnd> {
        match self {
            Self::Correct { .. } => Some(GameEnd::Won),
            Self::Exhausted { .. } => Some(GameEnd::Exhausted),
            Self::TooLow { .. } | Self::TooHigh { .. } => None,
        }
    }

    /// Returns true if this outcome ends the game.
    pub fn ends_game(&self) -> bool {
        self.game_end().is_some()
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum GameEnd {
    /// The target was guessed.
    #[display("Won")]
    Won,
    /// The attempt budget ran out.
    #[display("Exhausted")]
    Exhausted,
}

/// Lifecycle of a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GameStatus {
    /// Guesses are accepted.
    #[default]
    InProgress,
    /// No further guesses are accepted until restart.
    Finished(GameEnd),
}
