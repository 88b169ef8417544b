//! Guessing engine - pure number-guessing game logic.
//!
//! A game keeps a closed interval `[low, high]` that always contains a hidden
//! target. Every in-range guess narrows the interval from one side until the
//! target is hit or, in [`GameMode::Game`], the attempt budget runs out.
//!
//! # Example
//!
//! ```
//! use guessing_engine::{GameMode, GameRules, GameState, GuessOutcome};
//!
//! let mut game = GameState::with_target(GameRules::default(), GameMode::Practice, 42)?;
//! assert!(matches!(game.evaluate_guess(500)?, GuessOutcome::TooHigh { high: 499, .. }));
//! assert!(matches!(game.evaluate_guess(10)?, GuessOutcome::TooLow { low: 11, .. }));
//! assert!(matches!(game.evaluate_guess(42)?, GuessOutcome::Correct { .. }));
//! # Ok::<(), guessing_engine::GuessError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bounds;
mod engine;
mod error;
mod input;
pub mod invariants;
mod mode;
mod outcome;
mod rules;
mod state;

pub use bounds::Bounds;
pub use engine::GuessingEngine;
pub use error::GuessError;
pub use input::parse_guess;
pub use mode::GameMode;
pub use outcome::{GameEnd, GameStatus, GuessOutcome};
pub use rules::{DEFAULT_HIGH, DEFAULT_LOW, DEFAULT_MAX_ATTEMPTS, GameRules, RulesError};
pub use state::GameState;
