//! Credential store: the `users` table behind a narrow trait.

use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info, instrument, warn};

use crate::db::{DbError, DbErrorKind, NewUser, User, schema};

/// Embedded schema migrations; `users` is created if absent.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Persistent username/password pairs with unique usernames.
pub trait CredentialStore {
    /// Finds the user whose username and password both match exactly.
    fn find_by_credentials(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, DbError>;

    /// Finds a user by username alone.
    fn find_by_username(&mut self, username: &str) -> Result<Option<User>, DbError>;

    /// Inserts a new user.
    ///
    /// A taken username fails with a [`DbError`] whose
    /// [`is_unique_violation`](DbError::is_unique_violation) is true.
    fn insert_user(&mut self, username: &str, password: &str) -> Result<User, DbError>;

    /// Number of registered users.
    fn count_users(&mut self) -> Result<i64, DbError>;
}

/// SQLite-backed credential store holding one connection for the process lifetime.
pub struct SqliteCredentialStore {
    database_url: String,
    conn: SqliteConnection,
}

impl std::fmt::Debug for SqliteCredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteCredentialStore")
            .field("database_url", &self.database_url)
            .finish_non_exhaustive()
    }
}

impl SqliteCredentialStore {
    /// Opens the database and creates the `users` table if it does not exist.
    ///
    /// Use `":memory:"` for a throwaway database.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the connection or schema setup fails.
    #[instrument(skip(database_url), fields(database_url = %database_url))]
    pub fn open(database_url: &str) -> Result<Self, DbError> {
        info!("Opening credential store");
        let mut conn = SqliteConnection::establish(database_url).map_err(|e| {
            DbError::new(
                DbErrorKind::Connection,
                format!("Failed to connect to '{}': {}", database_url, e),
            )
        })?;

        let applied = conn.run_pending_migrations(MIGRATIONS).map_err(|e| {
            DbError::new(DbErrorKind::Migration, format!("Migrations failed: {}", e))
        })?;
        debug!(applied = applied.len(), "Migrations applied");

        Ok(Self {
            database_url: database_url.to_string(),
            conn,
        })
    }

    /// Location the store was opened from.
    pub fn database_url(&self) -> &str {
        &self.database_url
    }
}

impl CredentialStore for SqliteCredentialStore {
    #[instrument(skip(self, password))]
    fn find_by_credentials(
        &mut self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, DbError> {
        debug!("Looking up credentials");
        let user: Option<User> = schema::users::table
            .filter(schema::users::username.eq(username))
            .filter(schema::users::password.eq(password))
            .select(User::as_select())
            .first(&mut self.conn)
            .optional()?;

        if let Some(ref u) = user {
            debug!(user_id = u.id(), "Credentials matched");
        } else {
            debug!("No matching credentials");
        }
        Ok(user)
    }

    #[instrument(skip(self))]
    fn find_by_username(&mut self, username: &str) -> Result<Option<User>, DbError> {
        debug!("Looking up user by name");
        let user: Option<User> = schema::users::table
            .filter(schema::users::username.eq(username))
            .select(User::as_select())
            .first(&mut self.conn)
            .optional()?;
        Ok(user)
    }

    #[instrument(skip(self, password))]
    fn insert_user(&mut self, username: &str, password: &str) -> Result<User, DbError> {
        debug!("Inserting user");
        let new_user = NewUser::new(username, password);

        let user: User = diesel::insert_into(schema::users::table)
            .values(&new_user)
            .returning(User::as_returning())
            .get_result(&mut self.conn)
            .map_err(|e| {
                let err = DbError::from(e);
                if err.is_unique_violation() {
                    warn!("Username already taken");
                }
                err
            })?;

        info!(user_id = user.id(), username = %user.username(), "User created");
        Ok(user)
    }

    #[instrument(skip(self))]
    fn count_users(&mut self) -> Result<i64, DbError> {
        let count: i64 = schema::users::table.count().get_result(&mut self.conn)?;
        debug!(count, "Users counted");
        Ok(count)
    }
}
