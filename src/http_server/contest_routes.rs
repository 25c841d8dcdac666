//! Contest HTTP Routes
//!
//! Listings, vote submission and results. All require a bearer token.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::HeaderMap,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use super::auth_routes::MessageResponse;
use super::error::ApiError;
use super::state::{parse_body, AppState};
use crate::contest::{ArtistListing, ResultRow, VoteRequest};
use crate::model::VoteContext;

/// Contest routes with shared state
pub fn contest_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/semi-finals/:semi", get(semi_final_handler))
        .route("/grand-final", get(grand_final_handler))
        .route("/vote", post(semi_vote_handler))
        .route("/grand-vote", post(grand_vote_handler))
        .route("/results", get(results_handler))
        .route("/results-final", get(results_final_handler))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct ResultsQuery {
    #[serde(default)]
    pub context: Option<VoteContext>,
}

async fn semi_final_handler(
    State(state): State<Arc<AppState>>,
    path: Result<Path<u32>, PathRejection>,
    headers: HeaderMap,
) -> Result<Json<ArtistListing>, ApiError> {
    let identity = state.authenticate(&headers)?;
    let Path(semi) = path?;
    Ok(Json(state.contest.semi_final_listing(&identity, semi)?))
}

async fn grand_final_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<ArtistListing>, ApiError> {
    let identity = state.authenticate(&headers)?;
    Ok(Json(state.contest.grand_final_listing(&identity)?))
}

async fn semi_vote_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<MessageResponse>, ApiError> {
    submit_vote(&state, &headers, &body, VoteContext::Semi)
}

async fn grand_vote_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<MessageResponse>, ApiError> {
    submit_vote(&state, &headers, &body, VoteContext::Grand)
}

fn submit_vote(
    state: &AppState,
    headers: &HeaderMap,
    body: &Bytes,
    context: VoteContext,
) -> Result<Json<MessageResponse>, ApiError> {
    let identity = state.authenticate(headers)?;
    let request: VoteRequest = parse_body(body)?;
    state.contest.submit_vote(&identity, context, &request)?;
    Ok(Json(MessageResponse::new("saved")))
}

async fn results_handler(
    State(state): State<Arc<AppState>>,
    query: Result<Query<ResultsQuery>, QueryRejection>,
    headers: HeaderMap,
) -> Result<Json<Vec<ResultRow>>, ApiError> {
    state.authenticate(&headers)?;
    let Query(query) = query?;
    let context = query.context.unwrap_or(VoteContext::Semi);
    Ok(Json(state.contest.results(context)?))
}

async fn results_final_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<ResultRow>>, ApiError> {
    state.authenticate(&headers)?;
    Ok(Json(state.contest.grand_final_results()?))
}
