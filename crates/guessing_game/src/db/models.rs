//! Credential table models.

use derive_getters::Getters;
use derive_new::new;
use diesel::prelude::*;

use crate::db::schema;

/// Maximum username length, matching the `VARCHAR(50)` column.
pub const MAX_USERNAME_LEN: usize = 50;
/// Maximum password length, matching the `VARCHAR(255)` column.
pub const MAX_PASSWORD_LEN: usize = 255;

/// A registered account.
///
/// The password is stored as plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Identifiable, Selectable, Getters)]
#[diesel(table_name = schema::users)]
pub struct User {
    id: i32,
    username: String,
    #[getter(skip)]
    password: String,
}

impl User {
    /// Returns true if `candidate` equals the stored password.
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}

/// Insertable user model for sign-up.
#[derive(Debug, Clone, Insertable, new)]
#[diesel(table_name = schema::users)]
pub struct NewUser<'a> {
    username: &'a str,
    password: &'a str,
}
