//! Assignment execution.
//!
//! # Algorithm
//!
//! 1. Validate configuration, pool, item list and pinned assignments
//! 2. Seed the RNG and derive the initial load of every candidate from
//!    the pinned assignments
//! 3. For each item, in list order:
//!    a. Skip it if it already holds `k` candidates
//!    b. Shuffle the candidates not yet on the item, then stable-sort
//!       them by ascending load
//!    c. Append the first `k - assigned` of them and bump their load

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, info};

use super::config::AssignConfig;
use super::error::AssignError;
use super::types::AssignmentMap;
use crate::report::LoadSummary;

/// Result of an assignment run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignResult<I, C> {
    /// The completed map: pinned items first, then new items in list order.
    pub assignments: AssignmentMap<I, C>,

    /// Final load of every pool candidate, in pool order.
    pub loads: Vec<(C, usize)>,

    /// Number of candidate slots filled by this run.
    pub new_assignments: usize,

    /// Number of listed items that were already complete.
    pub skipped_items: usize,
}

impl<I, C: Clone> AssignResult<I, C> {
    /// Workload summary of the final loads, heaviest first.
    pub fn load_summary(&self) -> LoadSummary<C> {
        LoadSummary::from_loads(self.loads.clone())
    }
}

/// Executes the greedy load-balanced assignment.
pub struct AssignRunner;

impl AssignRunner {
    /// Assigns candidates to every item, starting from an empty map.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_assign::assign::{AssignConfig, AssignRunner};
    ///
    /// let pool = ["A", "B", "C", "D"];
    /// let items = ["P1", "P2"];
    /// let config = AssignConfig::default().with_reviewers_per_item(2).with_seed(1);
    ///
    /// let result = AssignRunner::run(&pool, &items, &config).unwrap();
    /// assert!(result.assignments.is_complete(2));
    /// assert!(result.loads.iter().all(|(_, n)| *n == 1));
    /// ```
    pub fn run<I, C>(
        pool: &[C],
        items: &[I],
        config: &AssignConfig,
    ) -> Result<AssignResult<I, C>, AssignError>
    where
        I: Clone + Eq + Hash + Debug,
        C: Clone + Eq + Hash + Debug,
    {
        Self::run_with_existing(pool, items, config, &AssignmentMap::new())
    }

    /// Completes a partially pinned assignment.
    ///
    /// `existing` is left untouched; the completed map is returned in the
    /// result. Items of `existing` that are not in `items` are carried over
    /// as-is but still count toward candidate load.
    pub fn run_with_existing<I, C>(
        pool: &[C],
        items: &[I],
        config: &AssignConfig,
        existing: &AssignmentMap<I, C>,
    ) -> Result<AssignResult<I, C>, AssignError>
    where
        I: Clone + Eq + Hash + Debug,
        C: Clone + Eq + Hash + Debug,
    {
        let position = validate(pool, items, config, existing)?;
        let k = config.reviewers_per_item;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut loads = vec![0usize; pool.len()];
        for (_, cs) in existing.iter() {
            for c in cs {
                loads[position[c]] += 1;
            }
        }

        let mut assignments = existing.clone();
        let mut new_assignments = 0usize;
        let mut skipped_items = 0usize;

        for item in items {
            let slot = assignments.slot_mut(item);
            if slot.len() == k {
                skipped_items += 1;
                debug!(?item, "already complete, skipping");
                continue;
            }

            let needed = k - slot.len();
            let mut eligible: Vec<usize> = (0..pool.len())
                .filter(|&i| !slot.contains(&pool[i]))
                .collect();

            // Shuffle first so the stable sort breaks load ties randomly.
            eligible.shuffle(&mut rng);
            eligible.sort_by_key(|&i| loads[i]);

            for &i in eligible.iter().take(needed) {
                slot.push(pool[i].clone());
                loads[i] += 1;
            }
            new_assignments += needed;
            debug!(?item, picked = needed, assigned = ?slot, "filled item");
        }

        info!(
            items = items.len(),
            new_assignments, skipped_items, "assignment run complete"
        );

        Ok(AssignResult {
            assignments,
            loads: pool.iter().cloned().zip(loads).collect(),
            new_assignments,
            skipped_items,
        })
    }
}

/// Checks every input up front and returns each candidate's pool index.
fn validate<'a, I, C>(
    pool: &'a [C],
    items: &[I],
    config: &AssignConfig,
    existing: &AssignmentMap<I, C>,
) -> Result<HashMap<&'a C, usize>, AssignError>
where
    I: Eq + Hash + Debug,
    C: Eq + Hash + Debug,
{
    config.validate(pool.len())?;

    let mut position = HashMap::with_capacity(pool.len());
    for (i, c) in pool.iter().enumerate() {
        if position.insert(c, i).is_some() {
            return Err(AssignError::DuplicateCandidate(format!("{c:?}")));
        }
    }

    let mut seen_items = HashSet::with_capacity(items.len());
    for item in items {
        if !seen_items.insert(item) {
            return Err(AssignError::DuplicateItem(format!("{item:?}")));
        }
    }

    let limit = config.reviewers_per_item;
    for (item, cs) in existing.iter() {
        if cs.len() > limit {
            return Err(AssignError::Oversubscribed {
                item: format!("{item:?}"),
                assigned: cs.len(),
                limit,
            });
        }
        let mut seen = HashSet::with_capacity(cs.len());
        for c in cs {
            if !position.contains_key(c) {
                return Err(AssignError::UnknownCandidate {
                    item: format!("{item:?}"),
                    candidate: format!("{c:?}"),
                });
            }
            if !seen.insert(c) {
                return Err(AssignError::RepeatedCandidate {
                    item: format!("{item:?}"),
                    candidate: format!("{c:?}"),
                });
            }
        }
    }

    Ok(position)
}
