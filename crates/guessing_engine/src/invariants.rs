//! First-class invariants for the guessing game.
//!
//! Invariants are logical properties that must hold after every guess.
//! They are checked in debug builds and can be tested independently.

use derive_more::{Display, Error};

use crate::{GameEnd, GameMode, GameState, GameStatus};

/// A logical property of a state `S`.
pub trait Invariant<S> {
    /// Rule text reported when the property fails.
    const RULE: &'static str;

    /// Returns true if `state` satisfies the property.
    fn holds(state: &S) -> bool;

    /// Checks `state`, naming the rule on failure.
    fn check(state: &S) -> Result<(), InvariantViolation> {
        if Self::holds(state) {
            Ok(())
        } else {
            Err(InvariantViolation { rule: Self::RULE })
        }
    }
}

/// A failed invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("invariant violated: {rule}")]
pub struct InvariantViolation {
    /// Rule text of the failed invariant.
    pub rule: &'static str,
}

/// Checks every game-state invariant, collecting all failures.
pub fn check_game_state(state: &GameState) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<InvariantViolation> = [
        BoundsContainTarget::check(state),
        AttemptsWithinBudget::check(state),
        StatusConsistent::check(state),
    ]
    .into_iter()
    .filter_map(Result::err)
    .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// Invariant: the bounds always contain the target.
pub struct BoundsContainTarget;

impl Invariant<GameState> for BoundsContainTarget {
    const RULE: &'static str = "bounds contain the target";

    fn holds(state: &GameState) -> bool {
        state.bounds().contains(*state.target())
    }
}

/// Invariant: attempts are only consumed in limited mode, one per counted guess.
pub struct AttemptsWithinBudget;

impl Invariant<GameState> for AttemptsWithinBudget {
    const RULE: &'static str = "guesses plus remaining attempts equal the budget in Game mode";

    fn holds(state: &GameState) -> bool {
        let max = *state.rules().max_attempts();
        match state.mode() {
            GameMode::Practice => *state.remaining_attempts() == max,
            GameMode::Game => {
                state.guess_count().checked_add(*state.remaining_attempts()) == Some(max)
            }
        }
    }
}

/// Invariant: a finished status agrees with the last guess and the budget.
pub struct StatusConsistent;

impl Invariant<GameState> for StatusConsistent {
    const RULE: &'static str = "status agrees with the last guess and remaining attempts";

    fn holds(state: &GameState) -> bool {
        match state.status() {
            GameStatus::InProgress => {
                *state.last_guess() != Some(*state.target())
                    && !(state.mode().is_limited() && *state.remaining_attempts() == 0)
            }
            GameStatus::Finished(GameEnd::Won) => *state.last_guess() == Some(*state.target()),
            GameStatus::Finished(GameEnd::Exhausted) => {
                state.mode().is_limited()
                    && *state.remaining_attempts() == 0
                    && *state.last_guess() != Some(*state.target())
            }
        }
    }
}
