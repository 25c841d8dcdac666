//! # Collections
//!
//! Each collection is one named document with a typed shape and its own
//! decoding rules.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::model::{decode_user_table, decode_vote_book, normalize_artists, Artist, Roster, UserTable, VoteBook};

/// A typed document in the store
pub trait Collection {
    /// Document name in the backend
    const DOCUMENT: &'static str;

    /// In-memory shape; `Default` is what a repaired document resets to
    type Doc: Serialize + DeserializeOwned + Default;

    /// Fails only on invalid JSON or the wrong top-level container;
    /// individual records are read leniently.
    fn decode(bytes: &[u8]) -> serde_json::Result<Self::Doc> {
        serde_json::from_slice(bytes)
    }
}

fn decode_votes(bytes: &[u8]) -> serde_json::Result<VoteBook> {
    let raw: BTreeMap<String, Value> = serde_json::from_slice(bytes)?;
    Ok(decode_vote_book(raw))
}

/// Contestants
pub struct Artists;

impl Collection for Artists {
    const DOCUMENT: &'static str = "artists.json";
    type Doc = Vec<Artist>;

    fn decode(bytes: &[u8]) -> serde_json::Result<Self::Doc> {
        let values: Vec<Value> = serde_json::from_slice(bytes)?;
        Ok(normalize_artists(&values))
    }
}

/// Accounts
pub struct Users;

impl Collection for Users {
    const DOCUMENT: &'static str = "users.json";
    type Doc = UserTable;

    fn decode(bytes: &[u8]) -> serde_json::Result<Self::Doc> {
        let raw: BTreeMap<String, Value> = serde_json::from_slice(bytes)?;
        Ok(decode_user_table(raw))
    }
}

/// Semi-final votes
pub struct SemiVotes;

impl Collection for SemiVotes {
    const DOCUMENT: &'static str = "votes.json";
    type Doc = VoteBook;

    fn decode(bytes: &[u8]) -> serde_json::Result<Self::Doc> {
        decode_votes(bytes)
    }
}

/// Grand-final votes
pub struct GrandVotes;

impl Collection for GrandVotes {
    const DOCUMENT: &'static str = "grand_votes.json";
    type Doc = VoteBook;

    fn decode(bytes: &[u8]) -> serde_json::Result<Self::Doc> {
        decode_votes(bytes)
    }
}

/// Official grand-final line-up
pub struct GrandFinal;

impl Collection for GrandFinal {
    const DOCUMENT: &'static str = "grand_final.json";
    type Doc = Roster;
}
