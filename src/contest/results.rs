//! # Results Aggregation
//!
//! Results are computed on demand by walking every user's ballot in a
//! context. Nothing is maintained incrementally.

use std::collections::HashMap;

use serde::Serialize;

use super::errors::ContestResult;
use super::ContestService;
use crate::model::{compare_order, Artist, ArtistId, VoteBook, VoteContext};
use crate::store::{Artists, GrandFinal};

/// Running totals for one artist
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tally {
    pub scores: Vec<f64>,
    pub finals: u32,
    pub voters: Vec<String>,
}

impl Tally {
    /// Mean score rounded to 2 decimals, `None` without scores
    pub fn average(&self) -> Option<f64> {
        if self.scores.is_empty() {
            return None;
        }
        let mean = self.scores.iter().sum::<f64>() / self.scores.len() as f64;
        Some((mean * 100.0).round() / 100.0)
    }
}

/// Aggregate a vote book per artist, keeping only artists accepted by `include`
pub fn tally_votes(book: &VoteBook, include: impl Fn(ArtistId) -> bool) -> HashMap<ArtistId, Tally> {
    let mut summary: HashMap<ArtistId, Tally> = HashMap::new();

    for (login, ballot) in book {
        for (&artist_id, vote) in ballot {
            if !include(artist_id) {
                continue;
            }
            let tally = summary.entry(artist_id).or_default();
            if let Some(score) = vote.score() {
                tally.scores.push(score);
            }
            if vote.advances() {
                tally.finals += 1;
            }
            if !vote.is_empty() {
                tally.voters.push(login.clone());
            }
        }
    }

    summary
}

/// One results row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRow {
    pub order: Option<i64>,
    pub name: String,
    pub avg: Option<f64>,
    pub final_votes: u32,
    pub voters: Vec<String>,
}

impl ResultRow {
    fn new(order: Option<i64>, name: String, tally: Option<&Tally>) -> Self {
        Self {
            order,
            name,
            avg: tally.and_then(Tally::average),
            final_votes: tally.map_or(0, |t| t.finals),
            voters: tally.map(|t| t.voters.clone()).unwrap_or_default(),
        }
    }
}

fn sort_rows(rows: &mut [ResultRow]) {
    rows.sort_by(|a, b| compare_order(a.order, b.order));
}

impl ContestService {
    /// Results for a context
    pub fn results(&self, context: VoteContext) -> ContestResult<Vec<ResultRow>> {
        match context {
            VoteContext::Semi => self.semi_final_results(),
            VoteContext::Grand => self.grand_final_results(),
        }
    }

    /// One row per artist from the semi-final votes
    pub fn semi_final_results(&self) -> ContestResult<Vec<ResultRow>> {
        let store = self.store();
        let artists = store.get::<Artists>()?;
        let votes = store.votes(VoteContext::Semi)?;

        let summary = tally_votes(&votes, |_| true);

        let mut rows: Vec<ResultRow> = artists
            .iter()
            .map(|a| ResultRow::new(a.performance_order, a.name.clone(), summary.get(&a.id)))
            .collect();
        sort_rows(&mut rows);
        Ok(rows)
    }

    /// One row per roster member from the grand-final votes
    pub fn grand_final_results(&self) -> ContestResult<Vec<ResultRow>> {
        let store = self.store();
        let roster = store.get::<GrandFinal>()?;
        let artists = store.get::<Artists>()?;
        let votes = store.votes(VoteContext::Grand)?;

        let summary = tally_votes(&votes, |id| roster.contains(id));
        let by_id: HashMap<ArtistId, &Artist> = artists.iter().map(|a| (a.id, a)).collect();

        let mut rows: Vec<ResultRow> = roster
            .entries()
            .iter()
            .filter_map(|entry| {
                let card = entry.resolve(by_id.get(&entry.id)?);
                let order = card.performance_order.or(i64::try_from(card.id).ok());
                Some(ResultRow::new(order, card.name, summary.get(&entry.id)))
            })
            .collect();
        sort_rows(&mut rows);
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Ballot, Vote};

    fn vote(score: Option<f64>, advance: Option<bool>) -> Vote {
        Vote {
            score: score.map(Some),
            advance,
        }
    }

    fn book(entries: &[(&str, ArtistId, Vote)]) -> VoteBook {
        let mut book = VoteBook::new();
        for (login, id, v) in entries {
            book.entry(login.to_string())
                .or_insert_with(Ballot::new)
                .insert(*id, v.clone());
        }
        book
    }

    #[test]
    fn test_average_rounds_to_two_places() {
        let tally = Tally {
            scores: vec![1.0, 2.0, 2.0],
            ..Default::default()
        };
        assert_eq!(tally.average(), Some(1.67));
    }

    #[test]
    fn test_no_scores_average_is_none() {
        assert_eq!(Tally::default().average(), None);
    }

    #[test]
    fn test_tally_counts() {
        let book = book(&[
            ("ann", 1, vote(Some(8.0), Some(true))),
            ("bob", 1, vote(None, Some(true))),
            ("cat", 1, vote(Some(4.0), Some(false))),
            ("dan", 1, vote(None, None)),
        ]);

        let summary = tally_votes(&book, |_| true);
        let tally = &summary[&1];

        assert_eq!(tally.average(), Some(6.0));
        assert_eq!(tally.finals, 2);
        // An empty entry is not a vote
        assert_eq!(tally.voters, vec!["ann", "bob", "cat"]);
    }

    #[test]
    fn test_cleared_score_still_counts_voter() {
        use std::sync::Arc;

        use crate::model::VotePatch;
        use crate::store::Store;

        let store = Store::in_memory();
        store
            .put::<Artists>(&vec![Artist {
                id: 1,
                name: "A".to_string(),
                semi_final: 1,
                performance_order: Some(1),
                official_final: false,
            }])
            .unwrap();
        let contest = ContestService::new(Arc::new(store));

        let set = VotePatch {
            score: Some(Some(5.0)),
            advance: None,
        };
        let clear = VotePatch {
            score: Some(None),
            advance: None,
        };
        contest.record_vote("ann", VoteContext::Semi, 1, &set).unwrap();
        contest.record_vote("ann", VoteContext::Semi, 1, &clear).unwrap();

        let rows = contest.semi_final_results().unwrap();
        assert_eq!(rows[0].avg, None);
        assert_eq!(rows[0].voters, vec!["ann"]);
    }

    #[test]
    fn test_tally_filter() {
        let book = book(&[
            ("ann", 1, vote(Some(8.0), None)),
            ("ann", 2, vote(Some(3.0), None)),
        ]);

        let summary = tally_votes(&book, |id| id == 2);
        assert!(!summary.contains_key(&1));
        assert_eq!(summary[&2].average(), Some(3.0));
    }
}
