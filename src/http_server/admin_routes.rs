//! Admin HTTP Routes
//!
//! Grand-final curation. The service layer rejects non-admin callers.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    http::HeaderMap,
    routing::{post, put},
    Json, Router,
};
use serde::Serialize;

use super::auth_routes::MessageResponse;
use super::error::ApiError;
use super::state::{parse_body, AppState};
use crate::contest::ReorderRequest;
use crate::model::ArtistId;

#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub official: bool,
}

/// Admin routes with shared state
pub fn admin_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/admin/final/:id", post(toggle_final_handler))
        .route("/admin/final/order/:id", put(reorder_handler))
        .with_state(state)
}

async fn toggle_final_handler(
    State(state): State<Arc<AppState>>,
    path: Result<Path<ArtistId>, PathRejection>,
    headers: HeaderMap,
) -> Result<Json<ToggleResponse>, ApiError> {
    let identity = state.authenticate(&headers)?;
    let Path(artist_id) = path?;
    let official = state.contest.toggle_official(&identity, artist_id)?;
    Ok(Json(ToggleResponse { official }))
}

async fn reorder_handler(
    State(state): State<Arc<AppState>>,
    path: Result<Path<ArtistId>, PathRejection>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<MessageResponse>, ApiError> {
    let identity = state.authenticate(&headers)?;
    let Path(artist_id) = path?;
    let request: ReorderRequest = parse_body(&body)?;
    state
        .contest
        .reorder(&identity, artist_id, request.direction())?;
    Ok(Json(MessageResponse::new("ok")))
}
