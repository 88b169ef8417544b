//! Gameplay modes.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};
use tracing::instrument;

/// Gameplay variant chosen on the mode selection screen.
///
/// The mode is fixed for the lifetime of a game and survives restarts.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum GameMode {
    /// Unlimited attempts.
    #[strum(to_string = "Practice Mode")]
    Practice,
    /// Fixed attempt budget.
    #[strum(to_string = "Game Mode")]
    Game,
}

impl GameMode {
    /// Returns true if guesses in this mode consume the attempt budget.
    #[instrument]
    pub fn is_limited(self) -> bool {
        matches!(self, Self::Game)
    }
}
