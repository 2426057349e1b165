//! # vakfinder Matching
//!
//! Orchestrates company matching on top of a [`CompanyStore`] and an optional
//! [`ReviewAggregate`]:
//!
//! ```text
//! request ──> predicate ──> store (city) ──empty?──> store (no city)
//!                                  │                        │
//!                                  └──────> review join <───┘
//!                                               │
//!                                           ranking ──> MatchOutcome
//! ```
//!
//! Similar-company lookups resolve an anchor by id or slug, fetch companies of
//! the anchor's primary category in a single capped phase, and rank them by
//! city and shared specialties.
//!
//! [`CompanyStore`]: vakfinder_storage::CompanyStore
//! [`ReviewAggregate`]: vakfinder_storage::ReviewAggregate

mod deadline;
mod guard;
pub mod fallback;
pub mod service;

pub use fallback::{CandidateSet, FallbackPolicy};
pub use service::{MatchOutcome, MatchingService, SimilarOutcome};
