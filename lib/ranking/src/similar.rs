//! Ordering for "similar companies" lookups.
//!
//! Same city as the anchor first, then the number of the anchor's specialties
//! the candidate shares. Name and id break the remaining ties.

use std::cmp::Reverse;
use std::collections::BTreeSet;

use serde::Serialize;
use vakfinder_core::{normalize_city, Company, CompanyId};

use crate::collation::name_key;

/// Why a candidate sits where it does relative to the anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityScore {
    pub same_city: bool,
    pub shared_specialties: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimilarCompany {
    pub company: Company,
    pub score: SimilarityScore,
}

/// Anchor attributes that candidates are compared against
#[derive(Debug, Clone)]
pub struct AnchorProfile<'a> {
    city: String,
    specialties: BTreeSet<&'a str>,
}

impl<'a> AnchorProfile<'a> {
    pub fn new(anchor: &'a Company) -> Self {
        Self {
            city: normalize_city(&anchor.city),
            specialties: anchor.specialties.iter().map(String::as_str).collect(),
        }
    }

    pub fn score(&self, candidate: &Company) -> SimilarityScore {
        SimilarityScore {
            same_city: !self.city.is_empty() && normalize_city(&candidate.city) == self.city,
            shared_specialties: self
                .specialties
                .iter()
                .filter(|s| candidate.has_specialty(s))
                .count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SimilarRankKey {
    same_city: Reverse<bool>,
    shared_specialties: Reverse<usize>,
    name: String,
    id: CompanyId,
}

impl SimilarRankKey {
    pub fn new(similar: &SimilarCompany) -> Self {
        Self {
            same_city: Reverse(similar.score.same_city),
            shared_specialties: Reverse(similar.score.shared_specialties),
            name: name_key(&similar.company.name),
            id: similar.company.id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_profile_scores() {
        let anchor = Company::new(1u64, "Anker", "anker")
            .with_city("Rotterdam")
            .with_specialties(["familierecht", "arbeidsrecht", "familierecht"]);
        let profile = AnchorProfile::new(&anchor);

        let candidate = Company::new(2u64, "X", "x")
            .with_city("rotterdam ")
            .with_specialties(["familierecht", "strafrecht"]);
        assert_eq!(
            profile.score(&candidate),
            SimilarityScore { same_city: true, shared_specialties: 1 }
        );
    }

    #[test]
    fn test_empty_city_never_matches() {
        let anchor = Company::new(1u64, "Anker", "anker");
        let candidate = Company::new(2u64, "X", "x");
        assert!(!AnchorProfile::new(&anchor).score(&candidate).same_city);
    }

    #[test]
    fn test_anchor_without_specialties_scores_zero_overlap() {
        let anchor = Company::new(1u64, "Anker", "anker").with_city("Delft");
        let candidate = Company::new(2u64, "X", "x").with_specialties(["a", "b"]);
        assert_eq!(AnchorProfile::new(&anchor).score(&candidate).shared_specialties, 0);
    }
}
