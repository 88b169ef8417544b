//! Login and sign-up against a [`CredentialStore`].

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::{CredentialStore, DbError, MAX_PASSWORD_LEN, MAX_USERNAME_LEN};

/// Proof of a successful login, held for the rest of the process.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, new)]
pub struct Session {
    username: String,
}

/// Reasons a login or sign-up is refused.
///
/// The `Display` text is the message shown to the player.
#[derive(Debug, Clone, Display, Error)]
pub enum AuthError {
    /// Username or password was left empty.
    #[display("Please enter both username and password.")]
    MissingField,
    /// The username is already registered.
    #[display("Username already exists.")]
    DuplicateUsername,
    /// No user matches the username/password pair.
    #[display("Invalid username or password.")]
    InvalidCredentials,
    /// A field exceeds its column width.
    #[display("The {field} must be at most {max} characters.")]
    FieldTooLong {
        /// Which field was too long.
        field: &'static str,
        /// Column width in characters.
        max: usize,
    },
    /// The credential store itself failed.
    #[display("{_0}")]
    Store(DbError),
}

impl From<DbError> for AuthError {
    fn from(err: DbError) -> Self {
        Self::Store(err)
    }
}

impl AuthError {
    /// Dialog title for this error.
    pub fn title(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "Login Failed",
            Self::Store(_) => "Database Error",
            Self::MissingField | Self::DuplicateUsername | Self::FieldTooLong { .. } => {
                "Sign Up Failed"
            }
        }
    }
}

/// Validates logins and registers accounts.
#[derive(Debug)]
pub struct AuthController<S> {
    store: S,
}

impl<S: CredentialStore> AuthController<S> {
    /// Creates a controller over the given store.
    #[instrument(skip(store))]
    pub fn new(store: S) -> Self {
        info!("Creating AuthController");
        Self { store }
    }

    /// Logs in with an exact username/password match.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] when no row matches, or
    /// [`AuthError::Store`] if the lookup fails.
    #[instrument(skip(self, password))]
    pub fn login(&mut self, username: &str, password: &str) -> Result<Session, AuthError> {
        debug!("Attempting login");
        match self.store.find_by_credentials(username, password)? {
            Some(user) => {
                info!(user_id = user.id(), "Login succeeded");
                Ok(Session::new(user.username().clone()))
            }
            None => {
                warn!("Login failed");
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    /// Registers a new account.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingField`] for empty input,
    /// [`AuthError::FieldTooLong`] past the column widths,
    /// [`AuthError::DuplicateUsername`] if the name is taken, or
    /// [`AuthError::Store`] for other store failures.
    #[instrument(skip(self, password))]
    pub fn sign_up(&mut self, username: &str, password: &str) -> Result<(), AuthError> {
        debug!("Attempting sign-up");
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::MissingField);
        }
        if username.chars().count() > MAX_USERNAME_LEN {
            return Err(AuthError::FieldTooLong {
                field: "username",
                max: MAX_USERNAME_LEN,
            });
        }
        if password.chars().count() > MAX_PASSWORD_LEN {
            return Err(AuthError::FieldTooLong {
                field: "password",
                max: MAX_PASSWORD_LEN,
            });
        }

        match self.store.insert_user(username, password) {
            Ok(user) => {
                info!(user_id = user.id(), "Account created");
                Ok(())
            }
            Err(e) if e.is_unique_violation() => Err(AuthError::DuplicateUsername),
            Err(e) => Err(AuthError::Store(e)),
        }
    }

    /// The underlying credential store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access to the underlying credential store.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}
