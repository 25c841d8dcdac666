//! # Auth Service
//!
//! Registration, login and identity resolution over the users collection.

use std::sync::Arc;

use tracing::info;

use super::errors::{AuthError, AuthResult};
use super::identity::Identity;
use super::jwt::{JwtConfig, JwtManager, TokenResponse};
use super::user::{check_password, new_account, Credentials};
use crate::model::normalize_login;
use crate::store::{SemiVotes, Store, Users};

/// Auth service combining the account store and token manager
pub struct AuthService {
    store: Arc<Store>,
    jwt_manager: JwtManager,
}

impl AuthService {
    pub fn new(store: Arc<Store>, jwt_config: JwtConfig) -> Self {
        Self {
            store,
            jwt_manager: JwtManager::new(jwt_config),
        }
    }

    /// Register a new account and give it an empty semi-final ballot
    pub fn register(&self, credentials: &Credentials) -> AuthResult<()> {
        let login = credentials.validated_login()?;

        let _guard = self.store.lock()?;
        let mut users = self.store.get::<Users>()?;
        if users.contains_key(&login) {
            return Err(AuthError::LoginTaken);
        }

        users.insert(login.clone(), new_account(&credentials.password)?);
        self.store.put::<Users>(&users)?;

        let mut votes = self.store.get::<SemiVotes>()?;
        votes.entry(login.clone()).or_default();
        self.store.put::<SemiVotes>(&votes)?;

        info!(login = %login, "user registered");
        Ok(())
    }

    /// Authenticate and issue a bearer token
    pub fn login(&self, credentials: &Credentials) -> AuthResult<TokenResponse> {
        let login = normalize_login(&credentials.login);
        let users = self.store.get::<Users>()?;

        let user = users.get(&login).ok_or(AuthError::InvalidCredentials)?;
        if !check_password(user, &credentials.password)? {
            return Err(AuthError::InvalidCredentials);
        }

        let access_token = self.jwt_manager.generate_access_token(&login)?;
        Ok(TokenResponse::bearer(
            access_token,
            self.jwt_manager.ttl_seconds(),
        ))
    }

    /// Resolve a bearer token to the caller's identity.
    ///
    /// The admin flag is read from the current users collection; a token for
    /// a deleted account resolves to a non-admin identity.
    pub fn identify(&self, token: &str) -> AuthResult<Identity> {
        let claims = self.jwt_manager.validate_token(token)?;
        let users = self.store.get::<Users>()?;
        let admin = users.get(&claims.sub).map_or(false, |u| u.admin);
        Ok(Identity::new(claims.sub, admin))
    }

    /// Set the admin flag on an existing account
    pub fn grant_admin(&self, login: &str) -> AuthResult<()> {
        let login = normalize_login(login);

        let _guard = self.store.lock()?;
        let mut users = self.store.get::<Users>()?;
        let user = users
            .get_mut(&login)
            .ok_or_else(|| AuthError::UserNotFound(login.clone()))?;
        user.admin = true;
        self.store.put::<Users>(&users)?;

        info!(login = %login, "admin granted");
        Ok(())
    }
}
