//! Game rules: the guessing range and the attempt budget.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Lowest number of the default guessing range.
pub const DEFAULT_LOW: i64 = 1;
/// Highest number of the default guessing range.
pub const DEFAULT_HIGH: i64 = 1000;
/// Attempt budget in [`GameMode::Game`](crate::GameMode::Game).
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Parameters fixed for every game played in a process.
///
/// Deserializes from a `[rules]` table; missing keys fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters, Setters)]
#[serde(default)]
#[setters(prefix = "with_")]
pub struct GameRules {
    /// Lower end of the full range (inclusive).
    low: i64,
    /// Upper end of the full range (inclusive).
    high: i64,
    /// Attempts allowed per game in limited mode.
    max_attempts: u32,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            low: DEFAULT_LOW,
            high: DEFAULT_HIGH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl GameRules {
    /// Checks that the range is non-empty and the budget allows at least one guess.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError`] describing the first violated constraint.
    #[instrument]
    pub fn validate(&self) -> Result<(), RulesError> {
        if self.low > self.high {
            return Err(RulesError::EmptyRange {
                low: self.low,
                high: self.high,
            });
        }
        if self.max_attempts == 0 {
            return Err(RulesError::NoAttempts);
        }
        debug!(low = self.low, high = self.high, max_attempts = self.max_attempts, "Rules valid");
        Ok(())
    }
}

/// Invalid rule configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Error)]
pub enum RulesError {
    /// `low` is greater than `high`.
    #[display("Empty guessing range: low {low} is greater than high {high}")]
    EmptyRange {
        /// Configured lower bound.
        low: i64,
        /// Configured upper bound.
        high: i64,
    },
    /// `max_attempts` is zero.
    #[display("max_attempts must be at least 1")]
    NoAttempts,
}
