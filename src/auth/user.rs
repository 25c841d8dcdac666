//! # Accounts
//!
//! Credential requests and account creation.

use serde::Deserialize;

use super::crypto::{hash_password, verify_password};
use super::errors::{AuthError, AuthResult};
use crate::model::{normalize_login, UserRecord};

/// Login and password as submitted by a client
///
/// Missing fields deserialize as empty strings so they are reported as
/// missing credentials rather than a decoding failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub password: String,
}

impl Credentials {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
        }
    }

    /// Normalized login, or an error if either field is empty
    pub fn validated_login(&self) -> AuthResult<String> {
        let login = normalize_login(&self.login);
        if login.is_empty() || self.password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        Ok(login)
    }
}

/// Create a non-admin account for the given password
pub fn new_account(password: &str) -> AuthResult<UserRecord> {
    Ok(UserRecord {
        password_hash: hash_password(password)?,
        admin: false,
    })
}

/// Check a password against a stored account
pub fn check_password(user: &UserRecord, password: &str) -> AuthResult<bool> {
    verify_password(password, &user.password_hash)
}
