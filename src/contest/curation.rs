//! # Finalist Curation
//!
//! Admin-only changes to the official grand-final line-up.
//!
//! `performance_order` values in the official subset are meant to form a
//! contiguous ranking. Nothing validates that; reordering only ever swaps
//! the values of two neighbours, so it cannot introduce gaps or duplicates.

use serde::Deserialize;
use tracing::info;

use super::errors::{ContestError, ContestResult};
use super::{require_admin, ContestService};
use crate::auth::Identity;
use crate::model::{compare_order, ArtistId, RosterEntry};
use crate::store::{Artists, GrandFinal};

/// Reorder direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Earlier in the running order
    Up,
    /// Later in the running order
    Down,
}

impl Direction {
    /// Parse a client-supplied direction; anything unrecognized is `None`
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            _ => None,
        }
    }
}

/// Reorder request body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReorderRequest {
    #[serde(default)]
    pub direction: Option<String>,
}

impl ReorderRequest {
    pub fn direction(&self) -> Option<Direction> {
        self.direction.as_deref().and_then(Direction::parse)
    }
}

impl ContestService {
    /// Flip an artist's official-final flag and sync the roster.
    ///
    /// Returns the new flag. Promotion appends a snapshot of the artist;
    /// demotion removes every roster entry for it.
    pub fn toggle_official(&self, identity: &Identity, artist_id: ArtistId) -> ContestResult<bool> {
        require_admin(identity)?;

        let store = self.store();
        let _guard = store.lock()?;

        let mut artists = store.get::<Artists>()?;
        let artist = artists
            .iter_mut()
            .find(|a| a.id == artist_id)
            .ok_or(ContestError::ArtistNotFound(artist_id))?;
        artist.official_final = !artist.official_final;
        let official = artist.official_final;
        let snapshot = RosterEntry::snapshot(artist);
        store.put::<Artists>(&artists)?;

        let mut roster = store.get::<GrandFinal>()?;
        roster.remove(artist_id);
        if official {
            roster.push(snapshot);
        }
        store.put::<GrandFinal>(&roster)?;

        info!(by = %identity.login, artist_id, official, "official status toggled");
        Ok(official)
    }

    /// Swap an official artist's running order with its neighbour.
    ///
    /// A move past either end, or without a direction, changes nothing.
    pub fn reorder(
        &self,
        identity: &Identity,
        artist_id: ArtistId,
        direction: Option<Direction>,
    ) -> ContestResult<()> {
        require_admin(identity)?;

        let store = self.store();
        let _guard = store.lock()?;

        let mut artists = store.get::<Artists>()?;

        // Indices into `artists` of the official subset, in running order
        let mut line: Vec<usize> = (0..artists.len())
            .filter(|&i| artists[i].official_final)
            .collect();
        line.sort_by(|&a, &b| compare_order(artists[a].performance_order, artists[b].performance_order));

        let pos = line
            .iter()
            .position(|&i| artists[i].id == artist_id)
            .ok_or(ContestError::NotInFinal(artist_id))?;

        let neighbour = match direction {
            Some(Direction::Up) if pos > 0 => pos - 1,
            Some(Direction::Down) if pos + 1 < line.len() => pos + 1,
            _ => return Ok(()),
        };

        let (a, b) = (line[pos], line[neighbour]);
        let order_a = artists[a].performance_order;
        artists[a].performance_order = artists[b].performance_order;
        artists[b].performance_order = order_a;
        store.put::<Artists>(&artists)?;

        let mut roster = store.get::<GrandFinal>()?;
        roster.set_order(artists[a].id, artists[a].performance_order);
        roster.set_order(artists[b].id, artists[b].performance_order);
        store.put::<GrandFinal>(&roster)?;

        info!(by = %identity.login, artist_id, swapped_with = artists[b].id, "running order changed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::model::Artist;
    use crate::store::Store;

    fn admin() -> Identity {
        Identity::new("root", true)
    }

    fn seeded(artists: Vec<Artist>) -> ContestService {
        let store = Store::in_memory();
        store.put::<Artists>(&artists).unwrap();
        ContestService::new(Arc::new(store))
    }

    fn artist(id: ArtistId, order: i64, official: bool) -> Artist {
        Artist {
            id,
            name: format!("Artist {}", id),
            semi_final: 1,
            performance_order: Some(order),
            official_final: official,
        }
    }

    fn order_of(contest: &ContestService, id: ArtistId) -> Option<i64> {
        let artists = contest.store().get::<Artists>().unwrap();
        artists.iter().find(|a| a.id == id).unwrap().performance_order
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!(Direction::parse("up"), Some(Direction::Up));
        assert_eq!(Direction::parse("down"), Some(Direction::Down));
        assert_eq!(Direction::parse("sideways"), None);
    }

    #[test]
    fn test_toggle_promotes_and_demotes() {
        let contest = seeded(vec![artist(1, 1, false)]);

        assert!(contest.toggle_official(&admin(), 1).unwrap());
        let roster = contest.store().get::<GrandFinal>().unwrap();
        assert!(roster.contains(1));
        assert_eq!(roster.entries()[0].overrides.name.as_deref(), Some("Artist 1"));

        assert!(!contest.toggle_official(&admin(), 1).unwrap());
        assert!(contest.store().get::<GrandFinal>().unwrap().is_empty());
    }

    #[test]
    fn test_toggle_requires_admin() {
        let contest = seeded(vec![artist(1, 1, false)]);
        let result = contest.toggle_official(&Identity::new("ann", false), 1);
        assert!(matches!(result, Err(ContestError::AdminRequired)));
    }

    #[test]
    fn test_toggle_unknown_artist() {
        let contest = seeded(vec![]);
        let result = contest.toggle_official(&admin(), 5);
        assert!(matches!(result, Err(ContestError::ArtistNotFound(5))));
    }

    #[test]
    fn test_reorder_swaps_with_neighbour() {
        let contest = seeded(vec![artist(1, 1, true), artist(2, 2, true), artist(3, 3, false)]);

        contest.reorder(&admin(), 1, Some(Direction::Down)).unwrap();
        assert_eq!(order_of(&contest, 1), Some(2));
        assert_eq!(order_of(&contest, 2), Some(1));
        assert_eq!(order_of(&contest, 3), Some(3));
    }

    #[test]
    fn test_reorder_skips_non_official_artists() {
        let contest = seeded(vec![artist(1, 1, true), artist(2, 2, false), artist(3, 3, true)]);

        contest.reorder(&admin(), 3, Some(Direction::Up)).unwrap();
        assert_eq!(order_of(&contest, 3), Some(1));
        assert_eq!(order_of(&contest, 1), Some(3));
        assert_eq!(order_of(&contest, 2), Some(2));
    }

    #[test]
    fn test_reorder_boundaries_are_noops() {
        let contest = seeded(vec![artist(1, 1, true), artist(2, 2, true)]);

        contest.reorder(&admin(), 1, Some(Direction::Up)).unwrap();
        contest.reorder(&admin(), 2, Some(Direction::Down)).unwrap();
        contest.reorder(&admin(), 1, None).unwrap();

        assert_eq!(order_of(&contest, 1), Some(1));
        assert_eq!(order_of(&contest, 2), Some(2));
    }

    #[test]
    fn test_reorder_not_in_final() {
        let contest = seeded(vec![artist(1, 1, false)]);
        let result = contest.reorder(&admin(), 1, Some(Direction::Up));
        assert!(matches!(result, Err(ContestError::NotInFinal(1))));
    }

    #[test]
    fn test_reorder_refreshes_roster_snapshots() {
        let contest = seeded(vec![artist(1, 1, false), artist(2, 2, false)]);
        contest.toggle_official(&admin(), 1).unwrap();
        contest.toggle_official(&admin(), 2).unwrap();

        contest.reorder(&admin(), 2, Some(Direction::Up)).unwrap();

        let roster = contest.store().get::<GrandFinal>().unwrap();
        let order = |id| {
            roster
                .entries()
                .iter()
                .find(|e| e.id == id)
                .and_then(|e| e.overrides.performance_order)
        };
        assert_eq!(order(1), Some(2));
        assert_eq!(order(2), Some(1));
    }
}
