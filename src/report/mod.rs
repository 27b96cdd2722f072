//! Human-readable reports over a completed assignment.
//!
//! All reports are read-only views of an [`AssignmentMap`]: they never
//! feed back into the assignment. Each implements `Display` and renders
//! a framed plain-text block.
//!
//! [`AssignmentMap`]: crate::assign::AssignmentMap

mod load;
mod overlap;
mod table;

pub use load::LoadSummary;
pub use overlap::{OverlapReport, PairOverlap};
pub use table::AssignmentTable;

/// Width of the `=` rules framing every report.
pub(crate) const RULE_WIDTH: usize = 60;

pub(crate) fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}
