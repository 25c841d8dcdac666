//! # Vote Recording
//!
//! Upserts a user's vote for one artist in one context. Only the fields
//! present in the request are overwritten. Neither the score range nor the
//! artist's existence is checked.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::errors::{ContestError, ContestResult};
use super::ContestService;
use crate::auth::Identity;
use crate::model::{parse_artist_id, present, truthy, ArtistId, Vote, VoteContext, VotePatch};

/// Vote submission as sent by a client
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VoteRequest {
    /// Integer or digit string
    #[serde(default)]
    pub artist_id: Option<Value>,

    /// Absent: keep; `null`: clear
    #[serde(default, deserialize_with = "present")]
    pub score: Option<Option<f64>>,

    /// Coerced by truthiness
    #[serde(rename = "final", default)]
    pub advance: Option<Value>,
}

impl VoteRequest {
    pub fn artist_id(&self) -> ContestResult<ArtistId> {
        self.artist_id
            .as_ref()
            .and_then(parse_artist_id)
            .ok_or(ContestError::MissingField("artist_id"))
    }

    pub fn patch(&self) -> VotePatch {
        VotePatch {
            score: self.score,
            advance: self.advance.as_ref().map(truthy),
        }
    }
}

impl ContestService {
    /// Record a client's vote submission for the caller
    pub fn submit_vote(
        &self,
        identity: &Identity,
        context: VoteContext,
        request: &VoteRequest,
    ) -> ContestResult<Vote> {
        let artist_id = request.artist_id()?;
        self.record_vote(&identity.login, context, artist_id, &request.patch())
    }

    /// Create or update `login`'s vote for `artist_id` and persist the book
    pub fn record_vote(
        &self,
        login: &str,
        context: VoteContext,
        artist_id: ArtistId,
        patch: &VotePatch,
    ) -> ContestResult<Vote> {
        let store = self.store();
        let _guard = store.lock()?;

        let mut book = store.votes(context)?;
        let vote = book
            .entry(login.to_string())
            .or_default()
            .entry(artist_id)
            .or_default();
        patch.apply(vote);
        let recorded = vote.clone();

        store.put_votes(context, &book)?;

        debug!(login, artist_id, context = %context, "vote recorded");
        Ok(recorded)
    }
}
