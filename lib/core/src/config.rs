use std::time::Duration;

use crate::{Error, Result};

/// Raw candidates fetched per phase before ranking
pub const DEFAULT_CANDIDATE_LIMIT: usize = 50;
/// Companies returned by a similarity lookup
pub const DEFAULT_SIMILAR_LIMIT: usize = 20;
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration for the matching engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchingConfig {
    pub candidate_limit: usize,
    pub similar_limit: usize,
    /// Upper bound for a single store call
    pub store_timeout: Duration,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            candidate_limit: DEFAULT_CANDIDATE_LIMIT,
            similar_limit: DEFAULT_SIMILAR_LIMIT,
            store_timeout: DEFAULT_STORE_TIMEOUT,
        }
    }
}

impl MatchingConfig {
    pub fn validate(&self) -> Result<()> {
        if self.candidate_limit == 0 {
            return Err(Error::InvalidConfig("candidate_limit must be positive".into()));
        }
        if self.similar_limit == 0 {
            return Err(Error::InvalidConfig("similar_limit must be positive".into()));
        }
        if self.store_timeout.is_zero() {
            return Err(Error::InvalidConfig("store_timeout must be positive".into()));
        }
        Ok(())
    }
}
