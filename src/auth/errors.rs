//! # Auth Errors
//!
//! Error types for the authentication module.

use thiserror::Error;

use crate::store::StoreError;

/// Result type for auth operations
pub type AuthResult<T> = Result<T, AuthError>;

/// Authentication and authorization errors
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    // ==================
    // Registration / Login
    // ==================

    /// Login or password missing from the request
    #[error("login & password required")]
    MissingCredentials,

    /// Login already registered
    #[error("login exists")]
    LoginTaken,

    /// Unknown login or wrong password (deliberately generic)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No account for an administrative operation
    #[error("User not found: {0}")]
    UserNotFound(String),

    // ==================
    // Token Errors
    // ==================

    /// No bearer token supplied
    #[error("Authentication required")]
    AuthenticationRequired,

    #[error("Malformed token")]
    MalformedToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token signature")]
    InvalidSignature,

    // ==================
    // Internal Errors
    // ==================

    #[error("Internal error: password hashing failed")]
    HashingFailed,

    #[error("Internal error: token generation failed")]
    TokenGenerationFailed,

    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl AuthError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            AuthError::MissingCredentials => 400,

            AuthError::InvalidCredentials => 401,
            AuthError::AuthenticationRequired => 401,
            AuthError::MalformedToken => 401,
            AuthError::TokenExpired => 401,
            AuthError::InvalidSignature => 401,

            AuthError::UserNotFound(_) => 404,

            AuthError::LoginTaken => 409,

            AuthError::HashingFailed => 500,
            AuthError::TokenGenerationFailed => 500,
            AuthError::Storage(e) => e.status_code(),
        }
    }

    /// Returns whether this error should be logged at warn level
    pub fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }
}
