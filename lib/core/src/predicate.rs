//! Translation of match requests and anchor companies into [`CompanyFilter`]s.

use serde::{Deserialize, Serialize};

use crate::filter::{CompanyFilter, FilterCondition, FlagField, TagField, TextField};
use crate::{Company, Error, Result};

/// Criteria a customer submits when looking for a company
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRequest {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(default)]
    pub city: String,
}

impl MatchRequest {
    pub fn new(category: impl Into<String>, specialty: Option<&str>, city: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            specialty: specialty.map(str::to_string),
            city: city.into(),
        }
    }

    pub fn filter(&self) -> Result<CompanyFilter> {
        build_request_filter(&self.category, self.specialty.as_deref(), &self.city)
    }
}

fn listed() -> [FilterCondition; 2] {
    [
        FilterCondition::Equals { field: FlagField::Active, value: true },
        FilterCondition::Equals { field: FlagField::Published, value: true },
    ]
}

/// Build the candidate filter for a customer request.
///
/// `category` and `city` are required; `specialty` may be empty. A company
/// without declared specialties is assumed to serve the whole category.
pub fn build_request_filter(category: &str, specialty: Option<&str>, city: &str) -> Result<CompanyFilter> {
    let category = category.trim();
    let city = city.trim();
    let specialty = specialty.map(str::trim).filter(|s| !s.is_empty());

    let missing: Vec<&str> = [("category", category), ("city", city)]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect();
    if !missing.is_empty() {
        return Err(Error::MissingCriteria(missing.join(", ")));
    }

    let mut filter = CompanyFilter::new(listed().to_vec())
        .and(FilterCondition::EqualsIgnoreCase {
            field: TextField::City,
            value: city.to_string(),
        })
        .and(FilterCondition::Contains {
            field: TagField::Categories,
            value: category.to_string(),
        });

    if let Some(specialty) = specialty {
        filter = filter.and(FilterCondition::EmptyOrContains {
            field: TagField::Specialties,
            value: specialty.to_string(),
        });
    }

    Ok(filter)
}

/// Build the candidate filter for companies similar to `anchor`.
///
/// The anchor must be listed. Similarity is defined by the anchor's primary
/// (first) category; an anchor without categories has no similarity class and
/// yields `None`.
pub fn build_anchor_filter(anchor: &Company) -> Result<Option<CompanyFilter>> {
    if !anchor.is_listed() {
        return Err(Error::AnchorNotFound(anchor.id.to_string()));
    }

    let Some(primary) = anchor.primary_category() else {
        return Ok(None);
    };

    let filter = CompanyFilter::new(listed().to_vec())
        .and(FilterCondition::NotId { id: anchor.id.clone() })
        .and(FilterCondition::Contains {
            field: TagField::Categories,
            value: primary.to_string(),
        });

    Ok(Some(filter))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Filter;

    fn fixtures() -> Vec<Company> {
        vec![
            Company::new(1u64, "Open", "open")
                .with_city("Utrecht")
                .with_categories(["loodgieter"]),
            Company::new(2u64, "Spoed", "spoed")
                .with_city("utrecht")
                .with_categories(["cv-monteur", "loodgieter"])
                .with_specialties(["spoedservice"]),
            Company::new(3u64, "Lekkage", "lekkage")
                .with_city("Utrecht")
                .with_categories(["loodgieter"])
                .with_specialties(["lekkage"]),
            Company::new(4u64, "Inactive", "inactive")
                .with_city("Utrecht")
                .with_categories(["loodgieter"])
                .with_active(false),
            Company::new(5u64, "Hidden", "hidden")
                .with_city("Utrecht")
                .with_categories(["loodgieter"])
                .with_published(false),
            Company::new(6u64, "Elders", "elders")
                .with_city("Amersfoort")
                .with_categories(["loodgieter"]),
            Company::new(7u64, "Dakwerk", "dakwerk")
                .with_city("Utrecht")
                .with_categories(["dakdekker"]),
        ]
    }

    fn selected(filter: &CompanyFilter) -> Vec<u64> {
        fixtures()
            .iter()
            .filter(|c| filter.matches(c))
            .map(|c| match c.id {
                crate::CompanyId::Integer(i) => i,
                _ => unreachable!(),
            })
            .collect()
    }

    #[test]
    fn test_request_filter_without_specialty() {
        let filter = build_request_filter("loodgieter", None, "UTRECHT").unwrap();
        assert_eq!(selected(&filter), vec![1, 2, 3]);
    }

    #[test]
    fn test_request_filter_with_specialty() {
        let filter = build_request_filter("loodgieter", Some("spoedservice"), "Utrecht").unwrap();
        // 1 declares no specialties, 2 declares the requested one
        assert_eq!(selected(&filter), vec![1, 2]);
    }

    #[test]
    fn test_blank_specialty_is_no_restriction() {
        let filter = build_request_filter("loodgieter", Some("  "), "Utrecht").unwrap();
        assert_eq!(selected(&filter), vec![1, 2, 3]);
    }

    #[test]
    fn test_missing_criteria() {
        let err = build_request_filter("", None, "Utrecht").unwrap_err();
        assert!(matches!(err, Error::MissingCriteria(ref f) if f == "category"));

        let err = build_request_filter("loodgieter", Some("spoedservice"), " ").unwrap_err();
        assert!(matches!(err, Error::MissingCriteria(ref f) if f == "city"));

        let err = build_request_filter("", None, "").unwrap_err();
        assert!(matches!(err, Error::MissingCriteria(ref f) if f == "category, city"));
    }

    #[test]
    fn test_anchor_filter_uses_primary_category() {
        let anchor = Company::new(99u64, "Anker", "anker")
            .with_city("Utrecht")
            .with_categories(["cv-monteur", "loodgieter"]);
        let filter = build_anchor_filter(&anchor).unwrap().unwrap();
        assert_eq!(selected(&filter), vec![2]);
    }

    #[test]
    fn test_anchor_filter_excludes_anchor() {
        let anchor = fixtures().remove(0);
        let filter = build_anchor_filter(&anchor).unwrap().unwrap();
        assert_eq!(selected(&filter), vec![2, 3, 6]);
    }

    #[test]
    fn test_inactive_anchor_is_not_found() {
        let anchor = Company::new(42u64, "Advocaat", "advocaat")
            .with_categories(["advocaat"])
            .with_active(false);
        assert!(matches!(build_anchor_filter(&anchor), Err(Error::AnchorNotFound(_))));
    }

    #[test]
    fn test_anchor_without_categories() {
        let anchor = Company::new(1u64, "Leeg", "leeg");
        assert!(build_anchor_filter(&anchor).unwrap().is_none());
    }
}
