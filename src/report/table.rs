//! Assignment table.

use std::fmt;

use super::rule;
use crate::assign::AssignmentMap;

/// Lists every item with its numbered reviewers, in map order.
pub struct AssignmentTable<'a, I, C> {
    assignments: &'a AssignmentMap<I, C>,
}

impl<'a, I, C> AssignmentTable<'a, I, C> {
    pub fn new(assignments: &'a AssignmentMap<I, C>) -> Self {
        Self { assignments }
    }
}

impl<I: fmt::Display, C: fmt::Display> fmt::Display for AssignmentTable<'_, I, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{}", rule())?;
        writeln!(f, "  REVIEWER ASSIGNMENTS")?;
        writeln!(f, "{}", rule())?;
        for (item, reviewers) in self.assignments.iter() {
            writeln!(f)?;
            writeln!(f, "  {item}")?;
            for (i, reviewer) in reviewers.iter().enumerate() {
                writeln!(f, "    Reviewer {}: {reviewer}", i + 1)?;
            }
        }
        writeln!(f)?;
        writeln!(f, "{}", rule())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_items_in_map_order() {
        let map: AssignmentMap<&str, &str> =
            [("P2", vec!["B", "A"]), ("P1", vec!["C"])].into_iter().collect();
        let out = AssignmentTable::new(&map).to_string();

        let p2 = out.find("  P2\n").unwrap();
        let p1 = out.find("  P1\n").unwrap();
        assert!(p2 < p1);
        assert!(out.contains("    Reviewer 1: B\n    Reviewer 2: A\n"));
        assert!(out.contains("    Reviewer 1: C\n"));
        assert!(out.starts_with(&format!("\n{}\n  REVIEWER ASSIGNMENTS\n", "=".repeat(60))));
    }

    #[test]
    fn test_empty_map_renders_frame_only() {
        let map = AssignmentMap::<&str, &str>::new();
        let out = AssignmentTable::new(&map).to_string();
        assert_eq!(out.matches(&"=".repeat(60)).count(), 3);
        assert!(!out.contains("Reviewer"));
    }
}
