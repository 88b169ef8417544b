//! The shrinking closed interval known to contain the target.

use serde::{Deserialize, Serialize};

/// Closed interval `[low, high]`.
///
/// Narrowing is one-directional: `low` only rises and `high` only falls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds {
    low: i64,
    high: i64,
}

impl Bounds {
    /// Creates the interval `[low, high]`.
    pub const fn new(low: i64, high: i64) -> Self {
        Self { low, high }
    }

    /// Inclusive lower end.
    pub const fn low(&self) -> i64 {
        self.low
    }

    /// Inclusive upper end.
    pub const fn high(&self) -> i64 {
        self.high
    }

    /// Returns true if `value` lies inside the interval.
    pub const fn contains(&self, value: i64) -> bool {
        self.low <= value && value <= self.high
    }

    /// Raises the lower end to just above `guess`; never lowers it.
    pub fn raise_above(&mut self, guess: i64) {
        self.low = self.low.max(guess.saturating_add(1));
    }

    /// Lowers the upper end to just below `guess`; never raises it.
    pub fn lower_below(&mut self, guess: i64) {
        self.high = self.high.min(guess.saturating_sub(1));
    }
}

impl std::fmt::Display for Bounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}
