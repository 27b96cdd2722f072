//! Pairwise reviewer overlap between items.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use super::rule;
use crate::assign::AssignmentMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Maximum title length shown per item in the rendered report.
const TITLE_WIDTH: usize = 30;

/// Candidates shared by one unordered pair of items.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PairOverlap<I, C> {
    pub first: I,
    pub second: I,
    /// Shared candidates, in the order they appear on `first`.
    pub shared: Vec<C>,
}

impl<I, C> PairOverlap<I, C> {
    pub fn count(&self) -> usize {
        self.shared.len()
    }
}

/// Overlap of every unordered item pair, in map order.
///
/// Quadratic in the number of items; intended for diagnostics only.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OverlapReport<I, C> {
    pairs: Vec<PairOverlap<I, C>>,
}

fn pair_at<I: Clone, C: Clone + Eq + Hash>(
    entries: &[(&I, &[C])],
    i: usize,
    j: usize,
) -> PairOverlap<I, C> {
    let (first, a) = entries[i];
    let (second, b) = entries[j];
    let mut seen = HashSet::with_capacity(a.len());
    PairOverlap {
        first: first.clone(),
        second: second.clone(),
        shared: a
            .iter()
            .filter(|c| b.contains(*c) && seen.insert(*c))
            .cloned()
            .collect(),
    }
}

impl<I, C> OverlapReport<I, C>
where
    I: Clone + Send + Sync,
    C: Clone + Eq + Hash + Send + Sync,
{
    pub fn new(assignments: &AssignmentMap<I, C>) -> Self {
        let entries: Vec<(&I, &[C])> = assignments.iter().collect();
        let n = entries.len();

        #[cfg(feature = "parallel")]
        let pairs = (0..n)
            .into_par_iter()
            .flat_map_iter(|i| (i + 1..n).map(move |j| (i, j)))
            .map(|(i, j)| pair_at(&entries, i, j))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let pairs = (0..n)
            .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
            .map(|(i, j)| pair_at(&entries, i, j))
            .collect();

        Self { pairs }
    }
}

impl<I, C> OverlapReport<I, C> {
    pub fn pairs(&self) -> &[PairOverlap<I, C>] {
        &self.pairs
    }

    /// Largest overlap over all pairs, 0 when there are fewer than two items.
    pub fn max_overlap(&self) -> usize {
        self.pairs.iter().map(PairOverlap::count).max().unwrap_or(0)
    }
}

fn truncate(title: &str) -> String {
    title.chars().take(TITLE_WIDTH).collect()
}

impl<I: fmt::Display, C: fmt::Display> fmt::Display for OverlapReport<I, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "  REVIEWER OVERLAP BETWEEN ITEM PAIRS")?;
        writeln!(f, "{}", rule())?;
        for pair in &self.pairs {
            let first = truncate(&pair.first.to_string());
            let second = truncate(&pair.second.to_string());
            let shared = if pair.shared.is_empty() {
                "none".to_string()
            } else {
                pair.shared
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            writeln!(
                f,
                "  {first:<32} ↔  {second:<32}  overlap: {}  ({shared})",
                pair.count()
            )?;
        }
        writeln!(f, "{}", rule())?;
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AssignmentMap<&'static str, &'static str> {
        [
            ("P1", vec!["A", "B", "C"]),
            ("P2", vec!["C", "B", "D"]),
            ("P3", vec!["E", "F", "G"]),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_all_pairs_in_map_order() {
        let report = OverlapReport::new(&sample());
        let pairs: Vec<_> = report.pairs().iter().map(|p| (p.first, p.second)).collect();
        assert_eq!(pairs, vec![("P1", "P2"), ("P1", "P3"), ("P2", "P3")]);
    }

    #[test]
    fn test_shared_follow_first_item_order() {
        let report = OverlapReport::new(&sample());
        assert_eq!(report.pairs()[0].shared, vec!["B", "C"]);
        assert_eq!(report.pairs()[1].count(), 0);
        assert_eq!(report.max_overlap(), 2);
    }

    #[test]
    fn test_single_item_has_no_pairs() {
        let map: AssignmentMap<&str, &str> = [("P1", vec!["A"])].into_iter().collect();
        let report = OverlapReport::new(&map);
        assert!(report.pairs().is_empty());
        assert_eq!(report.max_overlap(), 0);
    }

    #[test]
    fn test_render_truncates_titles() {
        let long = "214 CellFlow: A Tool For Automatic Jupyter Notebook Workflow Visualization";
        let map: AssignmentMap<&str, &str> = [(long, vec!["A", "B"]), ("P2", vec!["B", "C"])]
            .into_iter()
            .collect();
        let out = OverlapReport::new(&map).to_string();

        assert!(out.contains("214 CellFlow: A Tool For Autom "));
        assert!(!out.contains("Jupyter"));
        assert!(out.contains("overlap: 1  (B)"));
    }

    #[test]
    fn test_render_none_when_disjoint() {
        let map: AssignmentMap<&str, &str> =
            [("P1", vec!["A"]), ("P2", vec!["B"])].into_iter().collect();
        let out = OverlapReport::new(&map).to_string();
        assert!(out.contains("overlap: 0  (none)"));
    }

    #[test]
    fn test_repeated_candidate_counted_once() {
        let map: AssignmentMap<&str, &str> = [("P1", vec!["A", "A"]), ("P2", vec!["A", "B"])]
            .into_iter()
            .collect();
        let report = OverlapReport::new(&map);
        assert_eq!(report.pairs()[0].shared, vec!["A"]);
        assert_eq!(report.pairs()[0].count(), 1);
        assert!(report.to_string().contains("overlap: 1  (A)"));
    }

    #[test]
    fn test_same_bounds_with_and_without_parallel() {
        fn build<I, C>(map: &AssignmentMap<I, C>) -> OverlapReport<I, C>
        where
            I: Clone + Send + Sync,
            C: Clone + Eq + std::hash::Hash + Send + Sync,
        {
            OverlapReport::new(map)
        }

        let map: AssignmentMap<String, String> = [
            ("P1".to_string(), vec!["A".to_string(), "B".to_string()]),
            ("P2".to_string(), vec!["B".to_string(), "C".to_string()]),
        ]
        .into_iter()
        .collect();
        assert_eq!(build(&map).max_overlap(), 1);
    }
}
