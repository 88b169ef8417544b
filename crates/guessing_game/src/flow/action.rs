//! Named user actions and the screens they are valid on.

use guessing_engine::GameMode;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoStaticStr};

/// The screen currently shown. Exactly one is active at a time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Screen {
    /// Login / sign-up form.
    #[default]
    Login,
    /// Rules of the game.
    Rules,
    /// Practice or Game mode choice.
    ModeSelect,
    /// Guess entry.
    Game,
    /// Win or loss, with restart and quit.
    End,
}

/// A user-triggered action relayed by the presentation layer.
///
/// Text fields are carried raw; validation happens in the controllers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, IntoStaticStr)]
pub enum Action {
    /// Log in with an existing account.
    Login {
        /// Username field contents.
        username: String,
        /// Password field contents.
        password: String,
    },
    /// Register a new account.
    SignUp {
        /// Username field contents.
        username: String,
        /// Password field contents.
        password: String,
    },
    /// Leave the rules screen.
    ProceedToModeSelect,
    /// Start a game in the chosen mode.
    ChooseMode(GameMode),
    /// Submit the guess field contents.
    SubmitGuess(String),
    /// Start another game in the same mode.
    Restart,
    /// Exit the application.
    Quit,
}

impl Action {
    /// Variant name, safe to log (never includes field contents).
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Returns true if this action may be dispatched while `screen` is shown.
    pub fn available_on(&self, screen: Screen) -> bool {
        match self {
            Self::Login { .. } | Self::SignUp { .. } => screen == Screen::Login,
            Self::ProceedToModeSelect => screen == Screen::Rules,
            Self::ChooseMode(_) => screen == Screen::ModeSelect,
            Self::SubmitGuess(_) => screen == Screen::Game,
            Self::Restart => screen == Screen::End,
            Self::Quit => true,
        }
    }
}
