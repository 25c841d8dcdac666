//! # Grand-Final Roster
//!
//! `grand_final.json` lists the official finalists. Over time the file has
//! held bare ids, digit strings and full snapshot objects; every form is
//! decoded here into a single [`RosterEntry`] and written back as an object.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::artist::{parse_artist_id, Artist, ArtistId};

/// Display fields a roster entry may override on the base artist
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DisplayOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub semi_final: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_order: Option<i64>,
}

/// A finalist reference with optional display overrides
#[derive(Debug, Clone, PartialEq)]
pub struct RosterEntry {
    pub id: ArtistId,
    pub overrides: DisplayOverrides,
}

impl RosterEntry {
    /// Bare reference with no overrides
    pub fn reference(id: ArtistId) -> Self {
        Self {
            id,
            overrides: DisplayOverrides::default(),
        }
    }

    /// Snapshot of the artist's current display fields
    pub fn snapshot(artist: &Artist) -> Self {
        Self {
            id: artist.id,
            overrides: DisplayOverrides {
                name: Some(artist.name.clone()),
                semi_final: Some(artist.semi_final),
                performance_order: artist.performance_order,
            },
        }
    }

    /// The base artist with this entry's overrides applied
    pub fn resolve(&self, base: &Artist) -> Artist {
        Artist {
            id: base.id,
            name: self
                .overrides
                .name
                .clone()
                .unwrap_or_else(|| base.name.clone()),
            semi_final: self.overrides.semi_final.unwrap_or(base.semi_final),
            performance_order: self
                .overrides
                .performance_order
                .or(base.performance_order),
            official_final: true,
        }
    }

    /// Decode any of the accepted on-disk forms; unrecognized values yield `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Object(map) => Self::from_object(map),
            other => parse_artist_id(other).map(Self::reference),
        }
    }

    fn from_object(map: &Map<String, Value>) -> Option<Self> {
        let id = parse_artist_id(map.get("id")?)?;
        let overrides = DisplayOverrides {
            name: map.get("name").and_then(Value::as_str).map(str::to_string),
            semi_final: map
                .get("semi_final")
                .and_then(Value::as_u64)
                .and_then(|n| u32::try_from(n).ok()),
            performance_order: map.get("performance_order").and_then(Value::as_i64),
        };
        Some(Self { id, overrides })
    }
}

impl Serialize for RosterEntry {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Card<'a> {
            id: ArtistId,
            #[serde(flatten)]
            overrides: &'a DisplayOverrides,
            official_final: bool,
        }

        Card {
            id: self.id,
            overrides: &self.overrides,
            official_final: true,
        }
        .serialize(serializer)
    }
}

/// Ordered list of finalists
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    pub fn new(entries: Vec<RosterEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: ArtistId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Drop every entry referencing `id`
    pub fn remove(&mut self, id: ArtistId) {
        self.entries.retain(|e| e.id != id);
    }

    pub fn push(&mut self, entry: RosterEntry) {
        self.entries.push(entry);
    }

    /// Rewrite the running-order override of every entry for `id`
    pub fn set_order(&mut self, id: ArtistId, order: Option<i64>) {
        for entry in self.entries.iter_mut().filter(|e| e.id == id) {
            entry.overrides.performance_order = order;
        }
    }
}

impl<'de> Deserialize<'de> for Roster {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<Value>::deserialize(deserializer)?;
        Ok(Self::new(
            values.iter().filter_map(RosterEntry::from_value).collect(),
        ))
    }
}
