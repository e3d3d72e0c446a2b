//! Scorecard: the per-player category → recorded-score mapping.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::category::{Category, NUM_CATS};

/// A player's recorded category scores.
///
/// Categories absent from the map have not been played; totals treat them
/// as 0. The game-state collaborator owns the card and writes scorer output
/// into it; this crate only reads snapshots back for totals.
///
/// Serializes as a map keyed by category wire names, matching the
/// collaborator's per-player `scoring` record:
///
/// ```yaml
/// ones: 3
/// threeOfAKind: 17
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scorecard {
    scores: BTreeMap<Category, i32>,
}

impl Scorecard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded score for `category`, or `None` if not yet played.
    pub fn get(&self, category: Category) -> Option<i32> {
        self.scores.get(&category).copied()
    }

    /// Record `score` for `category`, replacing any earlier entry.
    pub fn record(&mut self, category: Category, score: i32) {
        self.scores.insert(category, score);
    }

    /// Number of categories recorded so far.
    pub fn recorded(&self) -> usize {
        self.scores.len()
    }

    /// True once every category has a recorded score.
    pub fn is_complete(&self) -> bool {
        self.scores.len() == NUM_CATS
    }
}
