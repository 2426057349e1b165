//! Ordering for request matching.
//!
//! A fixed lexicographic comparator, not a weighted score: each tier is only
//! consulted when every earlier tier is exactly equal.
//!
//! 1. has an approved local rating
//! 2. local average, then local review count (both descending)
//! 3. has an external rating
//! 4. external rating (descending)
//! 5. verified
//! 6. name, base-level collation
//! 7. id

use std::cmp::{Ordering, Reverse};

use ordered_float::OrderedFloat;
use vakfinder_core::{Company, CompanyId};

use crate::collation::name_key;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestRankKey {
    has_local: Reverse<bool>,
    local_average: Reverse<OrderedFloat<f64>>,
    local_count: Reverse<u32>,
    has_external: Reverse<bool>,
    external: Reverse<OrderedFloat<f64>>,
    verified: Reverse<bool>,
    name: String,
    id: CompanyId,
}

impl RequestRankKey {
    pub fn new(company: &Company) -> Self {
        let local = company.effective_local_rating();
        let external = company.effective_external_rating();
        Self {
            has_local: Reverse(local.is_some()),
            local_average: Reverse(OrderedFloat(local.map_or(0.0, |r| r.average))),
            local_count: Reverse(local.map_or(0, |r| r.count)),
            has_external: Reverse(external.is_some()),
            external: Reverse(OrderedFloat(external.unwrap_or(0.0))),
            verified: Reverse(company.is_verified),
            name: name_key(&company.name),
            id: company.id.clone(),
        }
    }
}

pub fn compare_for_request(a: &Company, b: &Company) -> Ordering {
    RequestRankKey::new(a).cmp(&RequestRankKey::new(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company(id: u64, name: &str) -> Company {
        Company::new(id, name, name.to_lowercase())
    }

    #[test]
    fn test_local_presence_beats_external_value() {
        let weak_local = company(1, "Zeta").with_local_rating(1, 0.1);
        let strong_external = company(2, "Alpha").with_external_rating(5.0).with_verified(true);
        assert_eq!(compare_for_request(&weak_local, &strong_external), Ordering::Less);
    }

    #[test]
    fn test_local_average_then_count() {
        let a = company(1, "A").with_local_rating(2, 4.5);
        let b = company(2, "B").with_local_rating(10, 4.0);
        let c = company(3, "C").with_local_rating(5, 4.5);
        assert_eq!(compare_for_request(&a, &b), Ordering::Less);
        assert_eq!(compare_for_request(&c, &a), Ordering::Less);
    }

    #[test]
    fn test_external_tier_among_unrated() {
        let rated = company(1, "Zulu").with_external_rating(3.1);
        let better = company(2, "Yankee").with_external_rating(4.9);
        let none = company(3, "Alpha").with_verified(true);
        assert_eq!(compare_for_request(&better, &rated), Ordering::Less);
        assert_eq!(compare_for_request(&rated, &none), Ordering::Less);
    }

    #[test]
    fn test_verified_before_name() {
        let verified = company(1, "Zulu").with_verified(true);
        let plain = company(2, "Alpha");
        assert_eq!(compare_for_request(&verified, &plain), Ordering::Less);
    }

    #[test]
    fn test_name_collation_then_id() {
        let a = company(2, "émile");
        let b = company(1, "Emile");
        assert_eq!(compare_for_request(&b, &a), Ordering::Less);
        assert_eq!(compare_for_request(&a, &a.clone()), Ordering::Equal);
    }

    #[test]
    fn test_nan_ratings_count_as_absent() {
        let nan = company(1, "A").with_external_rating(f64::NAN);
        let none = company(2, "B");
        assert_eq!(compare_for_request(&nan, &none), Ordering::Less);
        assert_eq!(RequestRankKey::new(&nan).has_external, Reverse(false));
    }
}
