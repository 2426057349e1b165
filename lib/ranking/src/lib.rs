//! # vakfinder Ranking
//!
//! Deterministic ordering of matched companies.
//!
//! Two orderings are provided:
//!
//! - **Request matching**: approved local reviews, then third-party ratings,
//!   then verification status, then name. See [`request`].
//! - **Similarity**: same city as the anchor, then shared specialties.
//!   See [`similar`].
//!
//! Both break remaining ties on a base-level collation of the company name and
//! finally on the company id, so results are reproducible for identical data.
//!
//! ## Example
//!
//! ```rust
//! use vakfinder_core::Company;
//! use vakfinder_ranking::RankingEngine;
//!
//! let candidates = vec![
//!     Company::new(1u64, "Bravo", "bravo").with_external_rating(4.2),
//!     Company::new(2u64, "Alpha", "alpha").with_local_rating(3, 4.8),
//! ];
//! let ranked = RankingEngine::new().rank_for_request(candidates);
//! assert_eq!(ranked[0].name, "Alpha");
//! ```

pub mod collation;
pub mod engine;
pub mod request;
pub mod similar;

pub use collation::name_key;
pub use engine::RankingEngine;
pub use request::{compare_for_request, RequestRankKey};
pub use similar::{AnchorProfile, SimilarCompany, SimilarRankKey, SimilarityScore};
