//! Load-balanced greedy assignment.
//!
//! Assigns a fixed number of candidates (reviewers) to every item of a
//! work list. Items are visited in list order; each one takes the
//! currently least-loaded eligible candidates, so the workload stays
//! within one assignment of perfectly even when starting from scratch.
//!
//! Ties on load are broken randomly: the eligible candidates are shuffled
//! with a seeded RNG before a stable sort on load, so equal-load candidates
//! early in the pool are not systematically preferred.
//!
//! The runner is incremental. A partially (or fully) pinned
//! [`AssignmentMap`] can be supplied and only the missing slots are
//! filled; pinned candidates count toward the initial load.
//!
//! # References
//!
//! Greedy list scheduling: Graham (1969), "Bounds on Multiprocessing
//! Timing Anomalies"

mod config;
mod error;
mod runner;
mod types;

pub use config::AssignConfig;
pub use error::AssignError;
pub use runner::{AssignResult, AssignRunner};
pub use types::AssignmentMap;
