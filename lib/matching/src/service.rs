use std::sync::Arc;

use futures_util::future::try_join_all;
use vakfinder_core::{
    build_anchor_filter, build_request_filter, Company, CompanyFilter, CompanyId, Error,
    FilterCondition, MatchRequest, MatchingConfig, Result,
};
use vakfinder_ranking::{RankingEngine, SimilarCompany};
use vakfinder_storage::{CompanyStore, ReviewAggregate};

use crate::deadline::bounded;
use crate::fallback::{CandidateSet, FallbackPolicy};

/// Ranked companies for a customer request
#[derive(Debug, Clone, PartialEq)]
pub struct MatchOutcome {
    pub companies: Vec<Company>,
    /// The city-restricted search found nothing and the city was dropped
    pub used_fallback: bool,
}

/// Companies similar to an anchor company
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarOutcome {
    pub anchor: Company,
    pub companies: Vec<SimilarCompany>,
}

/// Entry point for company matching
///
/// Holds no per-call state; one instance can serve any number of concurrent
/// requests. Dropping a returned future cancels its outstanding store calls.
pub struct MatchingService {
    companies: Arc<dyn CompanyStore>,
    reviews: Option<Arc<dyn ReviewAggregate>>,
    ranking: RankingEngine,
    config: MatchingConfig,
}

impl MatchingService {
    pub fn new(companies: Arc<dyn CompanyStore>, config: MatchingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            companies,
            reviews: None,
            ranking: RankingEngine::new(),
            config,
        })
    }

    /// Join local ratings from `reviews` instead of trusting the stored field
    #[must_use]
    pub fn with_reviews(mut self, reviews: Arc<dyn ReviewAggregate>) -> Self {
        self.reviews = Some(reviews);
        self
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    fn policy(&self) -> FallbackPolicy {
        FallbackPolicy::new(self.config.candidate_limit, self.config.store_timeout)
    }

    /// Match companies against a customer's category, specialty and city
    pub async fn match_for_request(
        &self,
        category: &str,
        specialty: Option<&str>,
        city: &str,
    ) -> Result<MatchOutcome> {
        let filter = build_request_filter(category, specialty, city)?;
        self.run_request(&filter).await
    }

    pub async fn match_request(&self, request: &MatchRequest) -> Result<MatchOutcome> {
        let filter = request.filter()?;
        self.run_request(&filter).await
    }

    /// Other providers for the anchor's primary category in the anchor's city
    ///
    /// Uses the request-matching contract (fallback included) with the anchor
    /// itself excluded.
    pub async fn match_context(&self, anchor_ref: &str) -> Result<MatchOutcome> {
        let anchor = self.resolve_anchor(anchor_ref).await?;
        let category = anchor.primary_category().unwrap_or_default();
        let filter = build_request_filter(category, None, &anchor.city)?
            .and(FilterCondition::NotId { id: anchor.id.clone() });
        self.run_request(&filter).await
    }

    /// Companies similar to the anchor identified by `anchor_ref` (id or slug)
    pub async fn find_similar(&self, anchor_ref: &str) -> Result<SimilarOutcome> {
        let anchor = self.resolve_anchor(anchor_ref).await?;

        let Some(filter) = build_anchor_filter(&anchor)? else {
            tracing::debug!(anchor = %anchor.id, "anchor has no category, nothing is similar");
            let anchor = self.join_rating(anchor).await?;
            return Ok(SimilarOutcome { anchor, companies: Vec::new() });
        };

        let candidates = self.policy().phase(self.companies.as_ref(), &filter).await?;
        let ranked = self
            .ranking
            .rank_by_similarity(&anchor, candidates, self.config.similar_limit);

        // Ratings play no part in similarity order, so join only the kept slice
        let (anchor, companies) = futures_util::try_join!(
            self.join_rating(anchor),
            try_join_all(ranked.into_iter().map(|SimilarCompany { company, score }| async move {
                Ok::<_, Error>(SimilarCompany { company: self.join_rating(company).await?, score })
            })),
        )?;

        tracing::debug!(anchor = %anchor.id, similar = companies.len(), "similarity lookup");
        Ok(SimilarOutcome { anchor, companies })
    }

    async fn run_request(&self, filter: &CompanyFilter) -> Result<MatchOutcome> {
        let CandidateSet { companies, used_fallback } =
            self.policy().fetch(self.companies.as_ref(), filter).await?;
        let companies = self.join_reviews(companies).await?;
        Ok(MatchOutcome {
            companies: self.ranking.rank_for_request(companies),
            used_fallback,
        })
    }

    async fn join_reviews(&self, companies: Vec<Company>) -> Result<Vec<Company>> {
        if self.reviews.is_none() {
            return Ok(companies);
        }
        try_join_all(companies.into_iter().map(|company| self.join_rating(company))).await
    }

    /// Replace the stored local rating with the review aggregate, when one is set
    async fn join_rating(&self, mut company: Company) -> Result<Company> {
        if let Some(reviews) = &self.reviews {
            company.local_rating = bounded(
                self.config.store_timeout,
                "review lookup",
                reviews.for_company(&company.id),
            )
            .await?;
        }
        Ok(company)
    }

    /// Resolve an anchor by id, then by slug; it must be listed
    async fn resolve_anchor(&self, anchor_ref: &str) -> Result<Company> {
        let anchor_ref = anchor_ref.trim();
        if anchor_ref.is_empty() {
            return Err(Error::AnchorNotFound(String::new()));
        }

        let timeout = self.config.store_timeout;
        let mut found = None;
        for id in candidate_ids(anchor_ref) {
            found = bounded(timeout, "anchor lookup", self.companies.find_by_id(&id)).await?;
            if found.is_some() {
                break;
            }
        }
        if found.is_none() {
            found = bounded(timeout, "anchor lookup", self.companies.find_by_slug(anchor_ref)).await?;
        }

        match found {
            Some(anchor) if anchor.is_listed() => Ok(anchor),
            _ => Err(Error::AnchorNotFound(anchor_ref.to_string())),
        }
    }
}

/// Id interpretations of a path segment: parsed form first, then the raw string
fn candidate_ids(raw: &str) -> Vec<CompanyId> {
    let parsed = CompanyId::parse(raw);
    let literal = CompanyId::String(raw.to_string());
    if parsed == literal {
        vec![parsed]
    } else {
        vec![parsed, literal]
    }
}
