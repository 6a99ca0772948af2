//! Scenario-subset selection policies.

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How the per-session scenario subset is chosen.
///
/// The subset is drawn once per session and reused for every reprocessing
/// call, so a participant keeps seeing the same forecast runs as the
/// visible date range moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionPolicy {
    /// Hand-picked scenario ids, intersected with what the feed provides.
    Fixed { scenarios: Vec<u32> },
    /// Uniform sample without replacement of `count` distinct ids.
    /// A seed makes the draw reproducible.
    RandomSample { count: usize, seed: Option<u64> },
}

impl SelectionPolicy {
    /// Apply the policy to the scenario ids present in the feed.
    ///
    /// Returns a sorted list of distinct ids. An empty result is valid;
    /// downstream output degrades to empty series rather than an error.
    pub fn select(&self, available: &BTreeSet<u32>) -> Vec<u32> {
        let selected = match self {
            SelectionPolicy::Fixed { scenarios } => {
                let mut picked: Vec<u32> = scenarios
                    .iter()
                    .copied()
                    .filter(|id| available.contains(id))
                    .collect();
                picked.sort_unstable();
                picked.dedup();
                picked
            }
            SelectionPolicy::RandomSample { count, seed } => {
                let pool: Vec<u32> = available.iter().copied().collect();
                let mut rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(*seed),
                    None => StdRng::from_entropy(),
                };
                let mut picked: Vec<u32> =
                    pool.choose_multiple(&mut rng, *count).copied().collect();
                picked.sort_unstable();
                picked
            }
        };
        debug!(scenarios = ?selected, "scenario subset selected");
        selected
    }
}
