//! Load-balanced reviewer assignment.
//!
//! Assigns a fixed number of distinct candidates (reviewers) to every
//! item of a work list so that per-candidate workload stays as even as
//! possible and, as a side effect, reviewer sets overlap little across
//! items.
//!
//! - **Assignment**: greedy least-loaded selection with seeded random
//!   tie-breaking, completing a possibly partial, pinned assignment.
//! - **Reporting**: assignment table, workload summary and pairwise
//!   overlap report over a completed assignment.
//! - **Rosters** (feature `toml`): pool, items and pinned assignments
//!   loaded from TOML files.
//!
//! # Examples
//!
//! ```
//! use u_assign::assign::{AssignConfig, AssignRunner};
//! use u_assign::report::LoadSummary;
//!
//! let pool = ["Ada", "Brian", "Claude", "Dana", "Edsger"];
//! let items = ["P1", "P2", "P3"];
//! let config = AssignConfig::default().with_seed(42);
//!
//! let result = AssignRunner::run(&pool, &items, &config).unwrap();
//! let summary = LoadSummary::new(&result.assignments, &pool);
//! assert!(summary.spread() <= 1);
//! ```
//!
//! The assignment is a heuristic: it never backtracks and gives no
//! optimality guarantee on overlap.

pub mod assign;
pub mod report;

#[cfg(feature = "toml")]
pub mod roster;
