//! # Caller Identity

use serde::Serialize;

/// The authenticated caller of a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub login: String,
    pub admin: bool,
}

impl Identity {
    pub fn new(login: impl Into<String>, admin: bool) -> Self {
        Self {
            login: login.into(),
            admin,
        }
    }
}
