//! Per-candidate workload summary.

use std::fmt;
use std::hash::Hash;

use super::rule;
use crate::assign::AssignmentMap;

/// Number of items assigned to every pool candidate, heaviest first.
///
/// Candidates present in the map but absent from the pool are ignored.
/// Equal loads keep pool order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoadSummary<C> {
    rows: Vec<(C, usize)>,
}

impl<C: Clone + Eq + Hash> LoadSummary<C> {
    pub fn new<I>(assignments: &AssignmentMap<I, C>, pool: &[C]) -> Self {
        let counts = assignments.count_by_candidate();
        Self::from_loads(
            pool.iter()
                .map(|c| (c.clone(), counts.get(c).copied().unwrap_or(0)))
                .collect(),
        )
    }
}

impl<C> LoadSummary<C> {
    /// Builds a summary from `(candidate, load)` pairs given in pool order.
    pub fn from_loads(mut rows: Vec<(C, usize)>) -> Self {
        rows.sort_by(|a, b| b.1.cmp(&a.1));
        Self { rows }
    }

    /// `(candidate, load)` rows, heaviest first.
    pub fn rows(&self) -> &[(C, usize)] {
        &self.rows
    }

    pub fn max_load(&self) -> usize {
        self.rows.first().map_or(0, |(_, n)| *n)
    }

    pub fn min_load(&self) -> usize {
        self.rows.last().map_or(0, |(_, n)| *n)
    }

    pub fn spread(&self) -> usize {
        self.max_load() - self.min_load()
    }
}

impl<C: fmt::Display> fmt::Display for LoadSummary<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "  WORKLOAD SUMMARY")?;
        writeln!(f, "{}", rule())?;
        for (candidate, count) in &self.rows {
            let name = candidate.to_string();
            let bar = "█".repeat(*count);
            writeln!(f, "  {name:<20} {bar}  ({count} item(s))")?;
        }
        writeln!(f, "{}", rule())?;
        writeln!(f)
    }
}
