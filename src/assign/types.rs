//! Insertion-ordered item → candidates map.

use std::collections::HashMap;
use std::hash::Hash;

use indexmap::IndexMap;

/// Mapping from each work item to its ordered sequence of assigned
/// candidates.
///
/// Iteration follows first-insertion order of the items. Replacing the
/// candidates of an item keeps its original position. Reports render in
/// this order, so pinned items appear before items created by a run.
///
/// The map itself does not enforce the per-item count or distinctness;
/// [`AssignRunner`](super::AssignRunner) validates both before a run and
/// guarantees them afterwards.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        transparent,
        bound(
            serialize = "I: serde::Serialize, C: serde::Serialize",
            deserialize = "I: serde::Deserialize<'de> + Eq + Hash, C: serde::Deserialize<'de>"
        )
    )
)]
pub struct AssignmentMap<I, C> {
    entries: IndexMap<I, Vec<C>>,
}

impl<I, C> AssignmentMap<I, C> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Number of items in the map.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(item, candidates)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&I, &[C])> {
        self.entries.iter().map(|(item, cs)| (item, cs.as_slice()))
    }

    /// Iterates items in insertion order.
    pub fn items(&self) -> impl Iterator<Item = &I> {
        self.entries.keys()
    }

    /// Total number of (item, candidate) pairs across the map.
    pub fn assignment_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Returns `true` if every item holds exactly `k` candidates.
    pub fn is_complete(&self, k: usize) -> bool {
        self.entries.values().all(|cs| cs.len() == k)
    }
}

impl<I: Eq + Hash, C> AssignmentMap<I, C> {
    /// Sets the candidates of `item`, returning the previous ones if the
    /// item was already present.
    pub fn insert(&mut self, item: I, candidates: Vec<C>) -> Option<Vec<C>> {
        self.entries.insert(item, candidates)
    }

    /// Candidates currently assigned to `item`.
    pub fn get(&self, item: &I) -> Option<&[C]> {
        self.entries.get(item).map(Vec::as_slice)
    }

    pub fn contains(&self, item: &I) -> bool {
        self.entries.contains_key(item)
    }
}

impl<I: Eq + Hash + Clone, C> AssignmentMap<I, C> {
    /// Mutable access to the candidates of `item`, inserting an empty
    /// sequence at the end if the item is new.
    pub(crate) fn slot_mut(&mut self, item: &I) -> &mut Vec<C> {
        self.entries.entry(item.clone()).or_default()
    }
}

impl<I, C: Eq + Hash> AssignmentMap<I, C> {
    /// Number of items each candidate appears in.
    ///
    /// Candidates that appear nowhere are absent from the result.
    pub fn count_by_candidate(&self) -> HashMap<&C, usize> {
        let mut counts = HashMap::new();
        for c in self.entries.values().flatten() {
            *counts.entry(c).or_insert(0) += 1;
        }
        counts
    }
}

impl<I, C> Default for AssignmentMap<I, C> {
    fn default() -> Self {
        Self::new()
    }
}

// `IndexMap` equality ignores order; map order is observable here.
impl<I: PartialEq, C: PartialEq> PartialEq for AssignmentMap<I, C> {
    fn eq(&self, other: &Self) -> bool {
        self.entries.iter().eq(other.entries.iter())
    }
}

impl<I: Eq, C: Eq> Eq for AssignmentMap<I, C> {}

impl<I: Eq + Hash, C> FromIterator<(I, Vec<C>)> for AssignmentMap<I, C> {
    fn from_iter<T: IntoIterator<Item = (I, Vec<C>)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<I, C> IntoIterator for AssignmentMap<I, C> {
    type Item = (I, Vec<C>);
    type IntoIter = indexmap::map::IntoIter<I, Vec<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
