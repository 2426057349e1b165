//! # vakfinder Core
//!
//! Core model for the vakfinder matching engine.
//!
//! - [`Company`] - A service-providing company as stored by the company store
//! - [`CompanyFilter`] - Typed conjunction of filter clauses any backend can translate
//! - [`predicate`] - Turns a [`MatchRequest`] or an anchor company into a filter
//! - [`MatchingConfig`] - Candidate caps and store timeout
//!
//! ## Example
//!
//! ```rust
//! use vakfinder_core::{Company, Filter, MatchRequest};
//!
//! let company = Company::new(1u64, "Loodgieter Jansen", "loodgieter-jansen")
//!     .with_city("Utrecht")
//!     .with_categories(["loodgieter"]);
//!
//! let request = MatchRequest::new("loodgieter", None, "utrecht");
//! let filter = request.filter().unwrap();
//! assert!(filter.matches(&company));
//! ```

pub mod company;
pub mod config;
pub mod error;
pub mod filter;
pub mod predicate;

pub use company::{normalize_city, same_city, Company, CompanyId, LocalRating};
pub use config::MatchingConfig;
pub use error::{Error, Result};
pub use filter::{CompanyFilter, Filter, FilterCondition, FlagField, TagField, TextField};
pub use predicate::{build_anchor_filter, build_request_filter, MatchRequest};
