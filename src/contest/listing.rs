//! # Listings
//!
//! Artists shown to a voter, merged with that voter's own votes.

use std::collections::HashMap;

use serde::Serialize;

use super::errors::ContestResult;
use super::ContestService;
use crate::auth::Identity;
use crate::model::{compare_order, Artist, ArtistId, Ballot, Vote, VoteContext};
use crate::store::{Artists, GrandFinal};

/// One artist row with the caller's vote merged in
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListedArtist {
    pub id: ArtistId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semi: Option<u32>,
    pub order: Option<i64>,
    pub score: Option<f64>,
    #[serde(rename = "final")]
    pub advance: bool,
    pub official: bool,
}

impl ListedArtist {
    fn merge(artist: &Artist, ballot: Option<&Ballot>) -> Self {
        let vote = ballot.and_then(|b| b.get(&artist.id));
        Self {
            id: artist.id,
            name: artist.name.clone(),
            semi: Some(artist.semi_final),
            order: artist.performance_order,
            score: vote.and_then(Vote::score),
            advance: vote.map_or(false, |v| v.advances()),
            official: artist.official_final,
        }
    }
}

/// Listing response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistListing {
    /// Whether the caller may curate
    pub admin: bool,
    pub artists: Vec<ListedArtist>,
}

impl ContestService {
    /// Artists of semi-final `semi`, in running order
    pub fn semi_final_listing(&self, identity: &Identity, semi: u32) -> ContestResult<ArtistListing> {
        let store = self.store();
        let artists = store.get::<Artists>()?;
        let votes = store.votes(VoteContext::Semi)?;
        let ballot = votes.get(&identity.login);

        let mut rows: Vec<ListedArtist> = artists
            .iter()
            .filter(|a| a.semi_final == semi)
            .map(|a| ListedArtist::merge(a, ballot))
            .collect();
        rows.sort_by(|a, b| compare_order(a.order, b.order));

        Ok(ArtistListing {
            admin: identity.admin,
            artists: rows,
        })
    }

    /// The official grand-final line-up, in running order
    pub fn grand_final_listing(&self, identity: &Identity) -> ContestResult<ArtistListing> {
        let store = self.store();
        let roster = store.get::<GrandFinal>()?;
        let artists = store.get::<Artists>()?;
        let votes = store.votes(VoteContext::Grand)?;
        let ballot = votes.get(&identity.login);

        let by_id: HashMap<ArtistId, &Artist> = artists.iter().map(|a| (a.id, a)).collect();

        let mut rows: Vec<ListedArtist> = roster
            .entries()
            .iter()
            .filter_map(|entry| by_id.get(&entry.id).map(|base| entry.resolve(base)))
            .map(|card| ListedArtist {
                semi: None,
                ..ListedArtist::merge(&card, ballot)
            })
            .collect();
        rows.sort_by(|a, b| compare_order(a.order, b.order).then(a.id.cmp(&b.id)));

        Ok(ArtistListing {
            admin: identity.admin,
            artists: rows,
        })
    }
}
