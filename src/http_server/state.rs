//! Shared request state and request helpers

use std::sync::Arc;

use axum::{body::Bytes, http::HeaderMap};
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::auth::{AuthError, AuthService, Identity, JwtConfig};
use crate::contest::ContestService;
use crate::store::Store;

/// Services shared by every handler
pub struct AppState {
    pub auth: AuthService,
    pub contest: ContestService,
}

impl AppState {
    pub fn new(store: Arc<Store>, jwt_config: JwtConfig) -> Self {
        Self {
            auth: AuthService::new(store.clone(), jwt_config),
            contest: ContestService::new(store),
        }
    }

    /// Resolve the caller from the `Authorization: Bearer` header
    pub fn authenticate(&self, headers: &HeaderMap) -> Result<Identity, ApiError> {
        let token = extract_bearer_token(headers).ok_or(AuthError::AuthenticationRequired)?;
        Ok(self.auth.identify(token)?)
    }
}

/// Extract Bearer token from Authorization header
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Decode an optional JSON body: empty means `T::default()`.
///
/// Clients are not required to send a JSON content type.
pub fn parse_body<T: DeserializeOwned + Default>(body: &Bytes) -> Result<T, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|e| ApiError::bad_request(format!("invalid JSON body: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    use crate::auth::Credentials;

    #[test]
    fn test_extract_bearer_token() {
        let mut headers = HeaderMap::new();
        assert_eq!(extract_bearer_token(&headers), None);

        headers.insert("authorization", HeaderValue::from_static("Bearer abc.def"));
        assert_eq!(extract_bearer_token(&headers), Some("abc.def"));

        headers.insert("authorization", HeaderValue::from_static("Basic xyz"));
        assert_eq!(extract_bearer_token(&headers), None);
    }

    #[test]
    fn test_parse_body() {
        let empty: Credentials = parse_body(&Bytes::new()).unwrap();
        assert!(empty.login.is_empty());

        let creds: Credentials = parse_body(&Bytes::from_static(br#"{"login": "ann"}"#)).unwrap();
        assert_eq!(creds.login, "ann");

        let bad = parse_body::<Credentials>(&Bytes::from_static(b"{oops"));
        assert_eq!(bad.unwrap_err().status().as_u16(), 400);
    }

    #[test]
    fn test_authenticate_requires_header() {
        let state = AppState::new(Arc::new(Store::in_memory()), JwtConfig::default());
        let err = state.authenticate(&HeaderMap::new()).unwrap_err();
        assert_eq!(err.status().as_u16(), 401);
    }
}
