//! # Contest Data Model
//!
//! Artists, users, votes and the grand-final roster, in the shapes they
//! take inside the persisted JSON documents.

pub mod artist;
pub mod roster;
pub mod user;
pub mod vote;

pub use artist::{compare_order, normalize_artists, parse_artist_id, Artist, ArtistId, ArtistRecord};
pub use roster::{DisplayOverrides, Roster, RosterEntry};
pub use user::{decode_user_table, normalize_login, UserRecord, UserTable};
pub use vote::{decode_ballot, decode_vote_book, truthy, Ballot, Vote, VoteBook, VoteContext, VotePatch};

use serde::{Deserialize, Deserializer};

/// Deserialize a field that distinguishes "absent" from "explicitly null".
///
/// Use together with `#[serde(default)]`: an absent key yields `None`, a
/// `null` yields `Some(None)`.
pub(crate) fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
