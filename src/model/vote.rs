//! # Votes
//!
//! A vote is a user's score and "advance" prediction for one artist.
//! Semi-final and grand-final votes live in separate books with the same
//! shape: `{login: {artist_id: {score, final}}}`.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::artist::{parse_artist_id, ArtistId};
use super::present;

/// One user's votes, keyed by artist
pub type Ballot = BTreeMap<ArtistId, Vote>;

/// Every user's ballot, keyed by login
pub type VoteBook = BTreeMap<String, Ballot>;

/// Voting scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteContext {
    Semi,
    Grand,
}

impl VoteContext {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoteContext::Semi => "semi",
            VoteContext::Grand => "grand",
        }
    }
}

impl fmt::Display for VoteContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recorded vote. Fields stay unset until a submission sets them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vote {
    /// `Some(None)`: a score was submitted and later cleared
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub score: Option<Option<f64>>,

    /// Prediction that the artist advances
    #[serde(rename = "final", default, skip_serializing_if = "Option::is_none")]
    pub advance: Option<bool>,
}

impl Vote {
    /// The current score, if one is set
    pub fn score(&self) -> Option<f64> {
        self.score.flatten()
    }

    /// True when neither field has ever been submitted
    pub fn is_empty(&self) -> bool {
        self.score.is_none() && self.advance.is_none()
    }

    pub fn advances(&self) -> bool {
        self.advance.unwrap_or(false)
    }

    /// Read a stored vote leniently; only a non-object is rejected.
    ///
    /// A `score` that is not a number (or numeric string) counts as cleared.
    pub fn from_value(value: &Value) -> Option<Self> {
        let map = value.as_object()?;
        Some(Self {
            score: map.get("score").map(|v| match v {
                Value::Number(n) => n.as_f64(),
                Value::String(s) => s.trim().parse().ok(),
                _ => None,
            }),
            advance: map.get("final").map(truthy),
        })
    }
}

/// Read a stored ballot, dropping entries whose key is not an artist id
/// or whose value is not an object.
pub fn decode_ballot(map: &Map<String, Value>) -> Ballot {
    map.iter()
        .filter_map(|(key, value)| {
            let id = parse_artist_id(&Value::String(key.clone()))?;
            Some((id, Vote::from_value(value)?))
        })
        .collect()
}

/// Read a stored vote book record by record; a non-object ballot is dropped.
pub fn decode_vote_book(raw: BTreeMap<String, Value>) -> VoteBook {
    raw.into_iter()
        .filter_map(|(login, ballot)| Some((login, decode_ballot(ballot.as_object()?))))
        .collect()
}

/// Partial update of a vote: `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VotePatch {
    /// `Some(None)` clears the score
    pub score: Option<Option<f64>>,
    pub advance: Option<bool>,
}

impl VotePatch {
    pub fn apply(&self, vote: &mut Vote) {
        if let Some(score) = self.score {
            vote.score = Some(score);
        }
        if let Some(advance) = self.advance {
            vote.advance = Some(advance);
        }
    }
}

/// Loose JSON truthiness: `null`, `false`, zero, and empty strings,
/// arrays or objects are false.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
