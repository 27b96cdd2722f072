//! Roster files.
//!
//! A roster bundles everything one assignment run needs: the candidate
//! pool, the item list, the per-item reviewer count, the seed and any
//! pinned assignments. Rosters are read from TOML:
//!
//! ```toml
//! reviewers_per_item = 2
//! candidates = ["A", "B", "C", "D"]
//! items = ["P1", "P2"]
//!
//! [[pinned]]
//! item = "P1"
//! reviewers = ["A"]
//! ```
//!
//! `reviewers_per_item` defaults to 3 and `seed` to 42.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::assign::{AssignConfig, AssignError, AssignResult, AssignRunner, AssignmentMap};

/// Errors raised while loading or running a roster.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to read roster {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("item {0:?} is pinned more than once")]
    DuplicatePin(String),

    #[error(transparent)]
    Assign(#[from] AssignError),
}

/// Candidates pinned to one item ahead of the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pin {
    pub item: String,
    pub reviewers: Vec<String>,
}

/// Input of one assignment run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default = "default_reviewers_per_item")]
    pub reviewers_per_item: usize,

    #[serde(default = "default_seed")]
    pub seed: Option<u64>,

    pub candidates: Vec<String>,

    pub items: Vec<String>,

    #[serde(default)]
    pub pinned: Vec<Pin>,
}

fn default_reviewers_per_item() -> usize {
    3
}

fn default_seed() -> Option<u64> {
    Some(42)
}

impl Roster {
    pub fn from_toml_str(s: &str) -> Result<Self, RosterError> {
        Ok(toml::from_str(s)?)
    }

    /// Reads and parses a roster file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RosterError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| RosterError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// The built-in workshop roster: seven PC members, five submissions,
    /// every submission already pinned to three reviewers.
    pub fn demo() -> Self {
        let strings = |xs: &[&str]| xs.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        let pin = |item: &str, reviewers: &[&str]| Pin {
            item: item.to_string(),
            reviewers: strings(reviewers),
        };

        let cellflow =
            "214 CellFlow: A Tool For Automatic Jupyter Notebook Workflow Visualization";
        let enterprise = "215 A Cost-Effective Architecture for Enterprise LLM Applications: \
                          Balancing Competing Requirements through RAG-Augmented CPU-Only Inference";
        let recovery =
            "307 An Efficient Approach for Model Recovery from Image Containing Diagrams";
        let cake = "321 CAKE: Cloud Architecture Knowledge Evaluation of Large Language Models";
        let refactoring = "322 An Empirical Analysis of LLM-Driven Refactoring for Microservices";

        Self {
            reviewers_per_item: default_reviewers_per_item(),
            seed: default_seed(),
            candidates: strings(&[
                "Aslak Johansen",
                "Jakob Hviid",
                "Francesco Daghero",
                "Sune Lundø Sørensen",
                "Matteo Esposito",
                "Alexander Bakhtin",
                "Klara Borowa",
            ]),
            items: strings(&[cellflow, enterprise, recovery, cake, refactoring]),
            pinned: vec![
                pin(
                    cake,
                    &["Matteo Esposito", "Alexander Bakhtin", "Klara Borowa"],
                ),
                pin(
                    refactoring,
                    &["Matteo Esposito", "Alexander Bakhtin", "Klara Borowa"],
                ),
                pin(
                    cellflow,
                    &["Sune Lundø Sørensen", "Jakob Hviid", "Francesco Daghero"],
                ),
                pin(
                    enterprise,
                    &["Aslak Johansen", "Francesco Daghero", "Jakob Hviid"],
                ),
                pin(
                    recovery,
                    &["Sune Lundø Sørensen", "Aslak Johansen", "Matteo Esposito"],
                ),
            ],
        }
    }

    pub fn config(&self) -> AssignConfig {
        AssignConfig {
            reviewers_per_item: self.reviewers_per_item,
            seed: self.seed,
        }
    }

    /// Pinned assignments as a map, in file order.
    pub fn existing(&self) -> Result<AssignmentMap<String, String>, RosterError> {
        let mut seen = HashSet::with_capacity(self.pinned.len());
        let mut map = AssignmentMap::new();
        for pin in &self.pinned {
            if !seen.insert(pin.item.as_str()) {
                return Err(RosterError::DuplicatePin(pin.item.clone()));
            }
            map.insert(pin.item.clone(), pin.reviewers.clone());
        }
        Ok(map)
    }

    /// Runs the assignment described by this roster.
    pub fn assign(&self) -> Result<AssignResult<String, String>, RosterError> {
        let existing = self.existing()?;
        Ok(AssignRunner::run_with_existing(
            &self.candidates,
            &self.items,
            &self.config(),
            &existing,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SMALL: &str = r#"
        reviewers_per_item = 2
        seed = 1
        candidates = ["A", "B", "C", "D"]
        items = ["P1", "P2"]

        [[pinned]]
        item = "P1"
        reviewers = ["A", "B"]
    "#;

    #[test]
    fn test_parse_full_roster() {
        let roster = Roster::from_toml_str(SMALL).unwrap();
        assert_eq!(roster.reviewers_per_item, 2);
        assert_eq!(roster.seed, Some(1));
        assert_eq!(roster.candidates.len(), 4);
        assert_eq!(roster.pinned[0].reviewers, vec!["A", "B"]);
    }

    #[test]
    fn test_defaults_applied() {
        let roster = Roster::from_toml_str(
            r#"
            candidates = ["A", "B", "C"]
            items = ["P1"]
        "#,
        )
        .unwrap();
        assert_eq!(roster.reviewers_per_item, 3);
        assert_eq!(roster.seed, Some(42));
        assert!(roster.pinned.is_empty());
    }

    #[test]
    fn test_missing_candidates_is_parse_error() {
        let err = Roster::from_toml_str("items = [\"P1\"]").unwrap_err();
        assert!(matches!(err, RosterError::Parse(_)));
    }

    #[test]
    fn test_assign_small_roster() {
        let result = Roster::from_toml_str(SMALL).unwrap().assign().unwrap();
        assert_eq!(
            result.assignments.get(&"P1".to_string()),
            Some(&["A".to_string(), "B".to_string()][..])
        );
        assert!(result.loads.iter().all(|(_, n)| *n == 1));
    }

    #[test]
    fn test_duplicate_pin_rejected() {
        let mut roster = Roster::from_toml_str(SMALL).unwrap();
        let repeat = roster.pinned[0].clone();
        roster.pinned.push(repeat);
        assert!(matches!(
            roster.assign().unwrap_err(),
            RosterError::DuplicatePin(item) if item == "P1"
        ));
    }

    #[test]
    fn test_pool_too_small_surfaces_assign_error() {
        let roster = Roster::from_toml_str(
            r#"
            candidates = ["A", "B"]
            items = ["P1"]
        "#,
        )
        .unwrap();
        assert!(matches!(
            roster.assign().unwrap_err(),
            RosterError::Assign(AssignError::PoolTooSmall { required: 3, available: 2 })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SMALL.as_bytes()).unwrap();
        let roster = Roster::load(file.path()).unwrap();
        assert_eq!(roster.items, vec!["P1", "P2"]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Roster::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, RosterError::Io { .. }));
    }

    #[test]
    fn test_demo_is_fully_pinned() {
        let roster = Roster::demo();
        let result = roster.assign().unwrap();
        assert_eq!(result.skipped_items, 5);
        assert_eq!(result.new_assignments, 0);
        assert_eq!(result.assignments, roster.existing().unwrap());
    }

    #[test]
    fn test_demo_without_pins_balances_load() {
        let mut roster = Roster::demo();
        roster.pinned.clear();
        let result = roster.assign().unwrap();
        // 15 slots over 7 candidates.
        assert!(result.load_summary().spread() <= 1);
        assert!(result.loads.iter().all(|(_, n)| *n == 2 || *n == 3));
    }
}
