//! Credential persistence: the `users` table and the store trait over it.

mod error;
mod models;
mod schema; // Diesel generated schema - internal use only
mod store;

pub use error::{DbError, DbErrorKind};
pub use models::{MAX_PASSWORD_LEN, MAX_USERNAME_LEN, NewUser, User};
pub use store::{CredentialStore, MIGRATIONS, SqliteCredentialStore};
