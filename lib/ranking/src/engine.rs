//! Ranking engine over candidate sets
//!
//! Both orderings are total: the output never depends on the order in which
//! the store returned candidates.

use vakfinder_core::Company;

use crate::request::RequestRankKey;
use crate::similar::{AnchorProfile, SimilarCompany, SimilarRankKey};

/// Stateless ranking of candidates for the two lookup kinds
#[derive(Debug, Clone, Copy, Default)]
pub struct RankingEngine;

impl RankingEngine {
    pub fn new() -> Self {
        Self
    }

    /// Order candidates for a customer request, best first
    pub fn rank_for_request(&self, mut candidates: Vec<Company>) -> Vec<Company> {
        candidates.sort_by_cached_key(RequestRankKey::new);
        candidates
    }

    /// Order candidates by similarity to `anchor`, best first
    ///
    /// Returns at most `limit` entries, each with the score that placed it.
    pub fn rank_by_similarity(
        &self,
        anchor: &Company,
        candidates: Vec<Company>,
        limit: usize,
    ) -> Vec<SimilarCompany> {
        let profile = AnchorProfile::new(anchor);
        let mut results: Vec<SimilarCompany> = candidates
            .into_iter()
            .map(|company| {
                let score = profile.score(&company);
                SimilarCompany { company, score }
            })
            .collect();

        results.sort_by_cached_key(SimilarRankKey::new);
        results.truncate(limit);
        results
    }
}
