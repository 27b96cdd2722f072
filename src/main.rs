//! Command-line entry point: runs one assignment pass over a roster and
//! prints the reports.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use u_assign::report::{AssignmentTable, LoadSummary, OverlapReport};
use u_assign::roster::Roster;

/// Assigns a fixed number of reviewers to every item, balancing workload.
#[derive(Debug, Parser)]
#[command(name = "u-assign", version, about)]
struct Args {
    /// Roster TOML file. Runs the built-in demo roster when omitted.
    #[arg(long)]
    roster: Option<PathBuf>,

    /// Seed for tie-breaking (overrides the roster's seed).
    #[arg(long, conflicts_with = "random")]
    seed: Option<u64>,

    /// Break ties from ambient entropy instead of a fixed seed.
    #[arg(long, default_value_t = false)]
    random: bool,

    /// Reviewers required per item (overrides the roster's value).
    #[arg(long, short = 'k')]
    reviewers_per_item: Option<usize>,

    /// Also print the pairwise overlap report.
    #[arg(long, default_value_t = false)]
    overlap: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Args {
    fn roster(&self) -> Result<Roster> {
        let mut roster = match &self.roster {
            Some(path) => Roster::load(path)
                .with_context(|| format!("loading roster {}", path.display()))?,
            None => Roster::demo(),
        };
        if let Some(k) = self.reviewers_per_item {
            roster.reviewers_per_item = k;
        }
        if self.random {
            roster.seed = None;
        } else if let Some(seed) = self.seed {
            roster.seed = Some(seed);
        }
        Ok(roster)
    }
}

fn init_tracing(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("u_assign={level}")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let roster = args.roster()?;
    info!(
        candidates = roster.candidates.len(),
        items = roster.items.len(),
        reviewers_per_item = roster.reviewers_per_item,
        seed = ?roster.seed,
        "running assignment"
    );

    let result = roster.assign()?;

    print!("{}", AssignmentTable::new(&result.assignments));
    print!("{}", LoadSummary::new(&result.assignments, &roster.candidates));
    if args.overlap {
        print!("{}", OverlapReport::new(&result.assignments));
    }
    Ok(())
}
