//! # Auth Module
//!
//! Accounts, password hashing, bearer tokens and caller identity.

pub mod api;
pub mod crypto;
pub mod errors;
pub mod identity;
pub mod jwt;
pub mod user;

pub use api::AuthService;
pub use errors::{AuthError, AuthResult};
pub use identity::Identity;
pub use jwt::{JwtClaims, JwtConfig, JwtManager, TokenResponse};
pub use user::Credentials;
