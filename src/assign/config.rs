//! Assignment run configuration.

use super::error::AssignError;

/// Configuration for an assignment run.
///
/// # Examples
///
/// ```
/// use u_assign::assign::AssignConfig;
///
/// let config = AssignConfig::default()
///     .with_reviewers_per_item(2)
///     .with_seed(7);
/// assert_eq!(config.reviewers_per_item, 2);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssignConfig {
    /// Number of distinct candidates every item must end up with.
    pub reviewers_per_item: usize,

    /// Random seed for reproducible tie-breaking.
    ///
    /// `None` seeds from ambient entropy, so repeated runs may differ
    /// among equal-load candidates.
    pub seed: Option<u64>,
}

impl Default for AssignConfig {
    fn default() -> Self {
        Self {
            reviewers_per_item: 3,
            seed: None,
        }
    }
}

impl AssignConfig {
    pub fn with_reviewers_per_item(mut self, k: usize) -> Self {
        self.reviewers_per_item = k;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Clears the seed so the run draws from ambient entropy.
    pub fn without_seed(mut self) -> Self {
        self.seed = None;
        self
    }

    /// Validates the configuration against a pool of `pool_size` candidates.
    pub fn validate(&self, pool_size: usize) -> Result<(), AssignError> {
        if self.reviewers_per_item == 0 {
            return Err(AssignError::ZeroReviewers);
        }
        if pool_size < self.reviewers_per_item {
            return Err(AssignError::PoolTooSmall {
                required: self.reviewers_per_item,
                available: pool_size,
            });
        }
        Ok(())
    }
}
