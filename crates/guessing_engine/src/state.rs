//! Per-game state and guess evaluation.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::{Bounds, GameEnd, GameMode, GameRules, GameStatus, GuessError, GuessOutcome};

/// Everything that changes while a single game is played.
///
/// Created at game start, mutated only by [`GameState::evaluate_guess`],
/// discarded on restart. Bounds always contain the target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameState {
    rules: GameRules,
    mode: GameMode,
    bounds: Bounds,
    target: i64,
    guess_count: u32,
    remaining_attempts: u32,
    status: GameStatus,
    last_guess: Option<i64>,
}

impl GameState {
    /// Starts a fresh game with a known target.
    ///
    /// # Errors
    ///
    /// Returns [`GuessError::InvalidRules`] if the rules fail validation, or
    /// [`GuessError::OutOfRange`] if `target` is outside the rules' range.
    #[instrument(skip(rules), fields(low = rules.low(), high = rules.high()))]
    pub fn with_target(rules: GameRules, mode: GameMode, target: i64) -> Result<Self, GuessError> {
        rules.validate()?;
        let bounds = Bounds::new(*rules.low(), *rules.high());
        if !bounds.contains(target) {
            return Err(GuessError::OutOfRange {
                value: target,
                low: bounds.low(),
                high: bounds.high(),
            });
        }
        Ok(Self::start(rules, mode, target))
    }

    /// Builds a fresh state; the caller guarantees `target` is within the rules' range.
    pub(crate) fn start(rules: GameRules, mode: GameMode, target: i64) -> Self {
        debug!(mode = %mode, "Game state initialized");
        Self {
            rules,
            mode,
            bounds: Bounds::new(*rules.low(), *rules.high()),
            target,
            guess_count: 0,
            remaining_attempts: *rules.max_attempts(),
            status: GameStatus::InProgress,
            last_guess: None,
        }
    }

    /// Evaluates an in-range guess, narrowing the bounds.
    ///
    /// Out-of-range guesses and guesses after the game ended are rejected and
    /// leave the state untouched.
    ///
    /// # Errors
    ///
    /// Returns [`GuessError::GameOver`] or [`GuessError::OutOfRange`].
    #[instrument(skip(self), fields(bounds = %self.bounds, mode = %self.mode))]
    pub fn evaluate_guess(&mut self, value: i64) -> Result<GuessOutcome, GuessError> {
        if self.is_finished() {
            debug!("Guess rejected: game already finished");
            return Err(GuessError::GameOver);
        }
        if !self.bounds.contains(value) {
            debug!("Guess rejected: out of range");
            return Err(GuessError::OutOfRange {
                value,
                low: self.bounds.low(),
                high: self.bounds.high(),
            });
        }

        self.guess_count += 1;
        self.last_guess = Some(value);
        if self.mode.is_limited() {
            self.remaining_attempts = self.remaining_attempts.saturating_sub(1);
        }

        let mut outcome = if value < self.target {
            self.bounds.raise_above(value);
            GuessOutcome::TooLow {
                guess: value,
                low: self.bounds.low(),
                high: self.bounds.high(),
            }
        } else if value > self.target {
            self.bounds.lower_below(value);
            GuessOutcome::TooHigh {
                guess: value,
                low: self.bounds.low(),
                high: self.bounds.high(),
            }
        } else {
            GuessOutcome::Correct {
                guess: value,
                guesses: self.guess_count,
            }
        };

        if self.mode.is_limited() && self.remaining_attempts == 0 && !outcome.ends_game() {
            outcome = GuessOutcome::Exhausted {
                guess: value,
                target: self.target,
            };
        }

        if let Some(end) = outcome.game_end() {
            self.status = GameStatus::Finished(end);
            info!(end = %end, guesses = self.guess_count, target = self.target, "Game finished");
        } else {
            debug!(guess_count = self.guess_count, remaining = self.remaining_attempts, "Guess evaluated");
        }

        #[cfg(debug_assertions)]
        {
            let checked = crate::invariants::check_game_state(self);
            debug_assert!(checked.is_ok(), "game state invariants violated: {checked:?}");
        }

        Ok(outcome)
    }

    /// Returns how the game ended, or `None` while it is in progress.
    pub fn end(&self) -> Option<GameEnd> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Finished(end) => Some(end),
        }
    }

    /// Returns true once the game has been won or exhausted.
    pub fn is_finished(&self) -> bool {
        self.end().is_some()
    }

    /// Opening instruction line for the game screen.
    pub fn instructions(&self) -> String {
        let budget = match self.mode {
            GameMode::Practice => "Unlimited attempts!".to_string(),
            GameMode::Game => format!("You have {} attempts.", self.rules.max_attempts()),
        };
        format!(
            "Guess a number between {} and {}. {}",
            self.rules.low(),
            self.rules.high(),
            budget
        )
    }

    /// Remaining attempts line, only meaningful in limited mode.
    pub fn remaining_label(&self) -> Option<String> {
        self.mode
            .is_limited()
            .then(|| format!("Remaining attempts: {}", self.remaining_attempts))
    }
}
