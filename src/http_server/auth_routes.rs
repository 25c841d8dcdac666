//! Auth HTTP Routes
//!
//! Registration and login. Neither requires a token.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde::Serialize;

use super::error::ApiError;
use super::state::{parse_body, AppState};
use crate::auth::{Credentials, TokenResponse};

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub msg: String,
}

impl MessageResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

/// Auth routes with shared state
pub fn auth_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/register", post(register_handler))
        .route("/login", post(login_handler))
        .with_state(state)
}

async fn register_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let credentials: Credentials = parse_body(&body)?;
    state.auth.register(&credentials)?;
    Ok((StatusCode::CREATED, Json(MessageResponse::new("registered"))))
}

async fn login_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<TokenResponse>, ApiError> {
    let credentials: Credentials = parse_body(&body)?;
    Ok(Json(state.auth.login(&credentials)?))
}
