//! # vakfinder
//!
//! Company matching and ranking engine for a service marketplace.
//!
//! A customer asks for a category (say "loodgieter"), optionally a specialty,
//! and a city. vakfinder finds listed companies serving that request, widens
//! the search beyond the city when nothing local exists, and orders the
//! result deterministically: approved local reviews first, then third-party
//! ratings, then verification, then name.
//!
//! It also answers "which companies are similar to this one?", preferring
//! companies in the same city and with overlapping specialties.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! vakfinder --data-file data/companies.json --http-port 8080
//! curl 'http://localhost:8080/match?category=loodgieter&city=Utrecht'
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use vakfinder::prelude::*;
//!
//! # async fn run() -> vakfinder::Result<()> {
//! let store = MemoryCompanyStore::from_companies(vec![
//!     Company::new(1u64, "Loodgieter Jansen", "loodgieter-jansen")
//!         .with_city("Utrecht")
//!         .with_categories(["loodgieter"]),
//! ])?;
//! let service = MatchingService::new(Arc::new(store), MatchingConfig::default())?;
//!
//! let outcome = service.match_for_request("loodgieter", None, "utrecht").await?;
//! assert_eq!(outcome.companies.len(), 1);
//! assert!(!outcome.used_fallback);
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Structure
//!
//! - `vakfinder-core` - Company model, typed filters, predicate building, errors
//! - `vakfinder-ranking` - Request and similarity orderings
//! - `vakfinder-storage` - Store contracts, in-memory adapters, JSON datasets
//! - `vakfinder-matching` - Fallback policy and the matching service
//! - `vakfinder-api` - REST API

// Re-export core types
pub use vakfinder_core::{
    Company, CompanyId, LocalRating,
    CompanyFilter, Filter, FilterCondition,
    MatchRequest, MatchingConfig,
    Error, Result,
};

// Re-export ranking
pub use vakfinder_ranking::{RankingEngine, SimilarCompany, SimilarityScore};

// Re-export storage
pub use vakfinder_storage::{
    CompanyStore, Dataset, MemoryCompanyStore, MemoryReviewStore, Review, ReviewAggregate,
    ReviewStatus,
};

// Re-export matching
pub use vakfinder_matching::{MatchOutcome, MatchingService, SimilarOutcome};

// Re-export API
pub use vakfinder_api::RestApi;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Company, CompanyId, LocalRating,
        CompanyFilter, Filter, FilterCondition,
        MatchRequest, MatchingConfig,
        Error, Result,
        RankingEngine,
        CompanyStore, Dataset, MemoryCompanyStore, MemoryReviewStore, Review, ReviewAggregate,
        ReviewStatus,
        MatchingService, MatchOutcome, SimilarOutcome,
        RestApi,
    };
}
