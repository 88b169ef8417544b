//! The guessing engine: a [`GameState`] plus the randomness to restart it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument};

use crate::{GameMode, GameRules, GameState, GuessError, GuessOutcome, RulesError, parse_guess};

/// Owns the current game and draws a fresh random target on every (re)start.
///
/// Generic over the random source so callers can inject a seeded generator.
#[derive(Debug)]
pub struct GuessingEngine<R = StdRng> {
    rules: GameRules,
    rng: R,
    state: GameState,
}

impl GuessingEngine<StdRng> {
    /// Starts a game seeded from operating system entropy.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError`] if the rules are invalid.
    #[instrument]
    pub fn from_entropy(rules: GameRules, mode: GameMode) -> Result<Self, RulesError> {
        Self::new(rules, mode, StdRng::from_entropy())
    }
}

impl<R: Rng> GuessingEngine<R> {
    /// Starts a game, drawing the target uniformly from the rules' range.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError`] if the rules are invalid.
    #[instrument(skip(rng))]
    pub fn new(rules: GameRules, mode: GameMode, mut rng: R) -> Result<Self, RulesError> {
        rules.validate()?;
        let state = Self::fresh_state(rules, mode, &mut rng);
        info!(mode = %mode, "Game started");
        Ok(Self { rules, rng, state })
    }

    // Rules are validated in `new`, so the range is never empty.
    fn fresh_state(rules: GameRules, mode: GameMode, rng: &mut R) -> GameState {
        let target = rng.gen_range(*rules.low()..=*rules.high());
        GameState::start(rules, mode, target)
    }

    /// Evaluates a numeric guess against the current game.
    ///
    /// # Errors
    ///
    /// Returns [`GuessError::OutOfRange`] or [`GuessError::GameOver`]; the state is unchanged.
    #[instrument(skip(self))]
    pub fn evaluate_guess(&mut self, value: i64) -> Result<GuessOutcome, GuessError> {
        self.state.evaluate_guess(value)
    }

    /// Parses raw input text and evaluates it.
    ///
    /// # Errors
    ///
    /// Returns [`GuessError::NotANumber`] before the engine is consulted, or any
    /// error from [`GuessingEngine::evaluate_guess`].
    #[instrument(skip(self))]
    pub fn submit_guess(&mut self, text: &str) -> Result<GuessOutcome, GuessError> {
        let value = parse_guess(text)?;
        self.evaluate_guess(value)
    }

    /// Discards the current game and starts another in the same mode.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        let mode = *self.state.mode();
        debug!(previous_guesses = self.state.guess_count(), "Restarting game");
        self.state = Self::fresh_state(self.rules, mode, &mut self.rng);
        info!(mode = %mode, "Game restarted");
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mode of the current game.
    pub fn mode(&self) -> GameMode {
        *self.state.mode()
    }

    /// Rules every game of this engine is played by.
    pub fn rules(&self) -> &GameRules {
        &self.rules
    }
}
