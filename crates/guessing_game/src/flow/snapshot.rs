//! Serializable views of the flow handed to the presentation layer.

use derive_getters::Getters;
use derive_new::new;
use guessing_engine::{GameState, GuessError, GuessOutcome};
use serde::{Deserialize, Serialize};

use crate::flow::{FlowError, Screen};
use crate::Session;

/// How a feedback message should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tone {
    /// Neutral status.
    Info,
    /// Something went right.
    Success,
    /// Something was refused.
    Error,
}

/// User-visible result of the most recent action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct Feedback {
    tone: Tone,
    title: String,
    message: String,
}

impl Feedback {
    /// Feedback for an evaluated guess.
    pub fn from_outcome(outcome: &GuessOutcome) -> Self {
        let (tone, title) = match outcome {
            GuessOutcome::TooLow { .. } | GuessOutcome::TooHigh { .. } => (Tone::Info, "Try Again"),
            GuessOutcome::Correct { .. } => (Tone::Success, "You Win"),
            GuessOutcome::Exhausted { .. } => (Tone::Error, "Game Over"),
        };
        Self::new(tone, title.to_string(), outcome.to_string())
    }

    /// Feedback for a refused action.
    pub fn from_error(err: &FlowError) -> Self {
        let title = match err {
            FlowError::Auth(e) => e.title(),
            FlowError::Guess(GuessError::GameOver) => "Game Over",
            FlowError::Guess(_) => "Invalid Guess",
            FlowError::Rules(_) => "Configuration Error",
            FlowError::UnavailableAction { .. } | FlowError::Terminated => "Unavailable",
        };
        Self::new(Tone::Error, title.to_string(), err.to_string())
    }
}

/// Everything the presentation layer needs to render the current screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct FlowSnapshot {
    pub(crate) screen: Screen,
    pub(crate) session: Option<Session>,
    pub(crate) game: Option<GameState>,
    pub(crate) feedback: Option<Feedback>,
    pub(crate) terminated: bool,
}
