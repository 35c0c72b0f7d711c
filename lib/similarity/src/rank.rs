//! Ranking of candidates against a query
//!
//! Every candidate is scored against the query, candidates with the same
//! score are grouped together, and the groups are sorted from most similar
//! (lowest score) to most dissimilar (highest score).

use crate::distance::{distance, FieldDistance};
use camsim_schema::NormalizedCameraSettings;
use ordered_float::OrderedFloat;
use serde::Serialize;
use std::collections::BTreeMap;

/// Candidates sharing one score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingEntry {
    pub score: f64,
    /// Candidate identifiers, in the order they were encountered
    pub candidates: Vec<String>,
}

/// Ranking entries sorted ascending by score
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Ranking {
    entries: Vec<RankingEntry>,
}

impl Ranking {
    pub fn entries(&self) -> &[RankingEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<RankingEntry> {
        self.entries
    }

    /// Number of score groups
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of candidates across all groups
    pub fn candidate_count(&self) -> usize {
        self.entries.iter().map(|e| e.candidates.len()).sum()
    }

    /// The lowest-score group, `None` when nothing was ranked
    pub fn best(&self) -> Option<&RankingEntry> {
        self.entries.first()
    }

    /// The highest-score group, `None` when nothing was ranked
    pub fn worst(&self) -> Option<&RankingEntry> {
        self.entries.last()
    }

    /// Identifiers in the lowest-score group; empty when nothing was ranked
    pub fn most_similar(&self) -> &[String] {
        self.best().map(|e| e.candidates.as_slice()).unwrap_or(&[])
    }

    /// Identifiers in the highest-score group; empty when nothing was ranked
    pub fn most_dissimilar(&self) -> &[String] {
        self.worst().map(|e| e.candidates.as_slice()).unwrap_or(&[])
    }
}

/// One candidate's score against the query, with the per-field breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate {
    pub id: String,
    pub score: f64,
    pub distance: FieldDistance,
}

/// Scores and ranks candidates against a fixed query
#[derive(Debug, Clone)]
pub struct Ranker {
    query: NormalizedCameraSettings,
}

impl Ranker {
    pub fn new(query: NormalizedCameraSettings) -> Self {
        Self { query }
    }

    pub fn query(&self) -> &NormalizedCameraSettings {
        &self.query
    }

    /// Score every candidate, keeping input order
    pub fn score_all<I, S>(&self, candidates: I) -> Vec<ScoredCandidate>
    where
        I: IntoIterator<Item = (S, NormalizedCameraSettings)>,
        S: Into<String>,
    {
        candidates
            .into_iter()
            .map(|(id, candidate)| {
                let distance = distance(&self.query, &candidate);
                ScoredCandidate {
                    id: id.into(),
                    score: distance.score(),
                    distance,
                }
            })
            .collect()
    }

    /// Rank candidates against the query
    pub fn rank<I, S>(&self, candidates: I) -> Ranking
    where
        I: IntoIterator<Item = (S, NormalizedCameraSettings)>,
        S: Into<String>,
    {
        group_by_score(
            self.score_all(candidates)
                .into_iter()
                .map(|scored| (scored.score, scored.id)),
        )
    }
}

/// Rank `candidates` against `query`
pub fn rank<I, S>(query: &NormalizedCameraSettings, candidates: I) -> Ranking
where
    I: IntoIterator<Item = (S, NormalizedCameraSettings)>,
    S: Into<String>,
{
    Ranker::new(*query).rank(candidates)
}

/// Group `(score, id)` pairs by exact score and sort the groups ascending
///
/// Two scores share a group only if they compare equal as `f64`; near-equal
/// scores stay in separate groups. Ids keep their input order within a group.
pub fn group_by_score<I>(scored: I) -> Ranking
where
    I: IntoIterator<Item = (f64, String)>,
{
    let mut groups: BTreeMap<OrderedFloat<f64>, Vec<String>> = BTreeMap::new();
    for (score, id) in scored {
        groups.entry(OrderedFloat(score)).or_default().push(id);
    }

    Ranking {
        entries: groups
            .into_iter()
            .map(|(score, candidates)| RankingEntry {
                score: score.into_inner(),
                candidates,
            })
            .collect(),
    }
}
