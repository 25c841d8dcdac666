//! # Contest Services
//!
//! Vote recording, listings, results aggregation and finalist curation.
//! All operations read the collections they need from the [`Store`] on each
//! call; nothing is cached between calls.

pub mod curation;
pub mod errors;
pub mod listing;
pub mod results;
pub mod votes;

pub use curation::{Direction, ReorderRequest};
pub use errors::{ContestError, ContestResult};
pub use listing::{ArtistListing, ListedArtist};
pub use results::{tally_votes, ResultRow, Tally};
pub use votes::VoteRequest;

use std::sync::Arc;

use crate::auth::Identity;
use crate::store::Store;

/// Contest operations over a shared store
pub struct ContestService {
    store: Arc<Store>,
}

impl ContestService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }
}

fn require_admin(identity: &Identity) -> ContestResult<()> {
    if identity.admin {
        Ok(())
    } else {
        Err(ContestError::AdminRequired)
    }
}
