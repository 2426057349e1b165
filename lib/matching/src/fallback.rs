//! Geographic fallback for request matching.
//!
//! Phase 1 fetches with the city constraint. Only if it yields nothing is the
//! same filter re-run without the city (phase 2). The phases are strictly
//! sequential: phase 2 is never issued speculatively. Each phase is capped
//! independently.

use std::time::Duration;

use vakfinder_core::{Company, CompanyFilter, Result};
use vakfinder_storage::CompanyStore;

use crate::deadline::bounded;
use crate::guard::retain_matching;

#[derive(Debug, Clone, PartialEq)]
pub struct CandidateSet {
    pub companies: Vec<Company>,
    pub used_fallback: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct FallbackPolicy {
    limit: usize,
    timeout: Duration,
}

impl FallbackPolicy {
    pub fn new(limit: usize, timeout: Duration) -> Self {
        Self { limit, timeout }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Fetch candidates for `filter`, widening past the city when none are local
    pub async fn fetch<S>(&self, store: &S, filter: &CompanyFilter) -> Result<CandidateSet>
    where
        S: CompanyStore + ?Sized,
    {
        let local = self.phase(store, filter).await?;
        tracing::debug!(city = ?filter.city(), candidates = local.len(), "city-restricted fetch");

        if !local.is_empty() || filter.city().is_none() {
            return Ok(CandidateSet { companies: local, used_fallback: false });
        }

        let wide_filter = filter.without_city();
        let wide = self.phase(store, &wide_filter).await?;
        tracing::info!(
            city = ?filter.city(),
            candidates = wide.len(),
            "no local candidates, widened search beyond city"
        );
        Ok(CandidateSet { companies: wide, used_fallback: true })
    }

    /// Single capped fetch; used directly for similarity lookups
    pub async fn phase<S>(&self, store: &S, filter: &CompanyFilter) -> Result<Vec<Company>>
    where
        S: CompanyStore + ?Sized,
    {
        let found = bounded(self.timeout, "company lookup", store.find(filter, self.limit)).await?;
        Ok(retain_matching(filter, found))
    }
}
