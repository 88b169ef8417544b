//! Tests for login and sign-up.

use guessing_game::{
    AuthController, AuthError, CredentialStore, MAX_PASSWORD_LEN, MAX_USERNAME_LEN,
    SqliteCredentialStore,
};

fn setup_auth() -> AuthController<SqliteCredentialStore> {
    let store = SqliteCredentialStore::open(":memory:").expect("Failed to open store");
    AuthController::new(store)
}

fn user_count(auth: &mut AuthController<SqliteCredentialStore>) -> i64 {
    auth.store_mut().count_users().expect("Count failed")
}

#[test]
fn test_sign_up_then_login() {
    let mut auth = setup_auth();
    auth.sign_up("alice", "pw1").expect("Sign-up failed");

    let session = auth.login("alice", "pw1").expect("Login failed");
    assert_eq!(session.username(), "alice");
    assert_eq!(auth.store().database_url(), ":memory:");
}

#[test]
fn test_sign_up_missing_field() {
    let mut auth = setup_auth();
    for (username, password) in [("", "pw"), ("alice", ""), ("", "")] {
        let err = auth
            .sign_up(username, password)
            .expect_err("Empty field should fail");
        assert!(matches!(err, AuthError::MissingField));
        assert_eq!(err.to_string(), "Please enter both username and password.");
    }
    assert_eq!(user_count(&mut auth), 0);
}

#[test]
fn test_sign_up_duplicate_leaves_count_unchanged() {
    let mut auth = setup_auth();
    auth.sign_up("bob", "pw").expect("First sign-up failed");

    let err = auth
        .sign_up("bob", "different")
        .expect_err("Duplicate should fail");
    assert!(matches!(err, AuthError::DuplicateUsername));
    assert_eq!(err.to_string(), "Username already exists.");
    assert_eq!(err.title(), "Sign Up Failed");
    assert_eq!(user_count(&mut auth), 1);

    // The original password still works.
    auth.login("bob", "pw").expect("Login failed");
}

#[test]
fn test_sign_up_field_too_long() {
    let mut auth = setup_auth();

    let long_name = "u".repeat(MAX_USERNAME_LEN + 1);
    let err = auth.sign_up(&long_name, "pw").expect_err("Long username");
    assert!(matches!(err, AuthError::FieldTooLong { field: "username", .. }));

    let long_password = "p".repeat(MAX_PASSWORD_LEN + 1);
    let err = auth.sign_up("carol", &long_password).expect_err("Long password");
    assert!(matches!(err, AuthError::FieldTooLong { field: "password", .. }));

    auth.sign_up(&"u".repeat(MAX_USERNAME_LEN), "pw")
        .expect("Username at the limit should be accepted");
    assert_eq!(user_count(&mut auth), 1);
}

#[test]
fn test_login_invalid_credentials() {
    let mut auth = setup_auth();
    auth.sign_up("dave", "secret").expect("Sign-up failed");

    for (username, password) in [("dave", "wrong"), ("nobody", "secret"), ("", "")] {
        let err = auth
            .login(username, password)
            .expect_err("Login should fail");
        assert!(matches!(err, AuthError::InvalidCredentials));
        assert_eq!(err.to_string(), "Invalid username or password.");
        assert_eq!(err.title(), "Login Failed");
    }
}
