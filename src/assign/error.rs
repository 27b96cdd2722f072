//! Configuration errors raised before an assignment run starts.

use thiserror::Error;

/// Reasons an assignment run refuses to start.
///
/// Every variant is a configuration problem detected up front; once
/// validation passes the runner cannot fail. Offending names are carried
/// in their `Debug` rendering so the error stays independent of the
/// candidate and item types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignError {
    /// Fewer candidates than reviewers required per item.
    #[error(
        "at least {required} candidates are required to assign {required} per item, \
         only {available} were provided"
    )]
    PoolTooSmall { required: usize, available: usize },

    /// `reviewers_per_item` is zero.
    #[error("reviewers_per_item must be at least 1")]
    ZeroReviewers,

    /// The candidate pool names the same candidate twice.
    #[error("candidate {0} appears more than once in the pool")]
    DuplicateCandidate(String),

    /// The item list names the same item twice.
    #[error("item {0} appears more than once in the item list")]
    DuplicateItem(String),

    /// An existing assignment names a candidate outside the pool.
    #[error("item {item} is assigned to {candidate}, who is not in the pool")]
    UnknownCandidate { item: String, candidate: String },

    /// An existing assignment lists the same candidate twice for one item.
    #[error("item {item} lists {candidate} more than once")]
    RepeatedCandidate { item: String, candidate: String },

    /// An existing assignment already holds more candidates than allowed.
    #[error("item {item} already has {assigned} candidates, at most {limit} allowed")]
    Oversubscribed {
        item: String,
        assigned: usize,
        limit: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_too_small_message() {
        let err = AssignError::PoolTooSmall {
            required: 3,
            available: 2,
        };
        assert_eq!(
            err.to_string(),
            "at least 3 candidates are required to assign 3 per item, only 2 were provided"
        );
    }

    #[test]
    fn test_oversubscribed_message() {
        let err = AssignError::Oversubscribed {
            item: "\"P1\"".into(),
            assigned: 4,
            limit: 3,
        };
        assert!(err.to_string().contains("already has 4 candidates"));
    }
}
