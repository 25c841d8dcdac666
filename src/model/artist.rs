//! # Artists
//!
//! Contestants as stored in `artists.json`. Seed files are hand-edited, so
//! records are read leniently and normalized once when loaded.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::vote::truthy;

/// Stable artist identifier
pub type ArtistId = u64;

/// A contestant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub id: ArtistId,

    pub name: String,

    /// Semi-final the artist performs in
    pub semi_final: u32,

    /// Position in the running order (`None` sorts last)
    pub performance_order: Option<i64>,

    /// Member of the official grand-final line-up
    pub official_final: bool,
}

/// An artist record as found on disk, before defaults are applied.
///
/// Every field is read on its own; a field of the wrong type counts as
/// missing instead of failing the whole record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArtistRecord {
    pub id: Option<ArtistId>,

    pub name: String,

    /// `semi_final`, or the older `semi`
    pub semi_final: Option<u32>,

    /// Absent or unreadable: `None`; explicit `null`: `Some(None)`
    pub performance_order: Option<Option<i64>>,

    pub official_final: bool,
}

impl ArtistRecord {
    /// Read one record; anything but an object is rejected.
    pub fn from_value(value: &Value) -> Option<Self> {
        value.as_object().map(Self::from_object)
    }

    fn from_object(map: &Map<String, Value>) -> Self {
        let semi = |key: &str| {
            map.get(key)
                .and_then(whole_number)
                .and_then(|n| u32::try_from(n).ok())
        };

        Self {
            id: map.get("id").and_then(parse_artist_id),
            name: match map.get("name") {
                None | Some(Value::Null) => String::new(),
                Some(Value::String(s)) => s.clone(),
                Some(other) => other.to_string(),
            },
            semi_final: semi("semi_final").or_else(|| semi("semi")),
            performance_order: match map.get("performance_order") {
                Some(Value::Null) => Some(None),
                Some(other) => whole_number(other).map(Some),
                None => None,
            },
            official_final: map.get("official_final").map_or(false, truthy),
        }
    }
}

/// Apply load-time defaults to raw artist entries.
///
/// Positions are 1-based over the raw list: a record without an id or
/// without a usable running order takes its position. An explicit `null`
/// order is kept. Entries that are not objects are dropped.
pub fn normalize_artists(values: &[Value]) -> Vec<Artist> {
    values
        .iter()
        .enumerate()
        .filter_map(|(idx, value)| {
            let record = ArtistRecord::from_value(value)?;
            let position = idx as u64 + 1;
            Some(Artist {
                id: record.id.unwrap_or(position),
                name: record.name,
                semi_final: record.semi_final.unwrap_or(0),
                performance_order: record
                    .performance_order
                    .unwrap_or(Some(position as i64)),
                official_final: record.official_final,
            })
        })
        .collect()
}

/// Integers, integral floats and integer strings
fn whole_number(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Ids arrive as integers or digit-only strings
pub fn parse_artist_id(value: &Value) -> Option<ArtistId> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => {
            s.parse().ok()
        }
        _ => None,
    }
}

/// Ascending running order with missing values last.
pub fn compare_order(a: Option<i64>, b: Option<i64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
