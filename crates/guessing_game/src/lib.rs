//! Guessing Game - a number-guessing game behind a login gate.
//!
//! # Architecture
//!
//! - **Credential store**: SQLite `users` table behind [`CredentialStore`]
//! - **Auth**: login and sign-up via [`AuthController`]
//! - **Flow**: the Login → Rules → ModeSelect → Game → End state machine
//!   ([`FlowController`]), driven by [`Action`]s and observed through
//!   [`FlowSnapshot`]s
//! - **TUI**: `ratatui` screens that render snapshots and emit actions
//!
//! # Example
//!
//! ```no_run
//! use guessing_game::{Action, AuthController, FlowController, SqliteCredentialStore};
//! use guessing_engine::GameRules;
//!
//! # fn example() -> anyhow::Result<()> {
//! let store = SqliteCredentialStore::open("guessing_game.db")?;
//! let mut flow = FlowController::with_entropy(AuthController::new(store), GameRules::default())?;
//! flow.dispatch(Action::SignUp { username: "ada".into(), password: "pw".into() })?;
//! flow.dispatch(Action::Login { username: "ada".into(), password: "pw".into() })?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod auth;
mod config;
mod db;
mod flow;
pub mod tui;

pub use auth::{AuthController, AuthError, Session};
pub use config::{AppConfig, ConfigError, ConfigOverrides, DATABASE_URL_ENV};
pub use db::{
    CredentialStore, DbError, DbErrorKind, MAX_PASSWORD_LEN, MAX_USERNAME_LEN, MIGRATIONS,
    NewUser, SqliteCredentialStore, User,
};
pub use flow::{Action, Feedback, FlowController, FlowError, FlowSnapshot, Screen, Tone};
