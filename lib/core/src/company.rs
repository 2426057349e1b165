use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque company identifier
///
/// Stored data uses numeric ids, UUIDs or free-form strings (hex object ids);
/// all three round-trip through JSON unchanged. The derived ordering is total
/// and is used as the last tie-break when ranking.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompanyId {
    Integer(u64),
    Uuid(Uuid),
    String(String),
}

impl CompanyId {
    /// Parse an identifier taken from a URL path or query string
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if let Ok(i) = raw.parse::<u64>() {
            return CompanyId::Integer(i);
        }
        if let Ok(u) = Uuid::parse_str(raw) {
            return CompanyId::Uuid(u);
        }
        CompanyId::String(raw.to_string())
    }
}

impl std::fmt::Display for CompanyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompanyId::Integer(i) => write!(f, "{}", i),
            CompanyId::Uuid(u) => write!(f, "{}", u),
            CompanyId::String(s) => write!(f, "{}", s),
        }
    }
}

impl From<u64> for CompanyId {
    fn from(i: u64) -> Self {
        CompanyId::Integer(i)
    }
}

impl From<Uuid> for CompanyId {
    fn from(u: Uuid) -> Self {
        CompanyId::Uuid(u)
    }
}

impl From<String> for CompanyId {
    fn from(s: String) -> Self {
        CompanyId::String(s)
    }
}

impl From<&str> for CompanyId {
    fn from(s: &str) -> Self {
        CompanyId::String(s.to_string())
    }
}

/// Aggregate of approved reviews collected on the platform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocalRating {
    pub count: u32,
    /// Mean rating in `[0, 5]`
    pub average: f64,
}

impl LocalRating {
    pub fn new(count: u32, average: f64) -> Self {
        Self { count, average }
    }

    /// A rating only counts when at least one review backs it.
    #[inline]
    pub fn is_present(&self) -> bool {
        self.count > 0 && !self.average.is_nan()
    }
}

/// A service-providing company as read from the company store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub city: String,
    /// First entry is the primary category
    #[serde(default)]
    pub categories: Vec<String>,
    /// Empty means the company serves every specialty of its categories
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default = "default_true")]
    pub published: bool,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_rating: Option<LocalRating>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_rating: Option<f64>,
}

fn default_true() -> bool {
    true
}

impl Company {
    #[must_use]
    pub fn new(id: impl Into<CompanyId>, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: slug.into(),
            city: String::new(),
            categories: Vec::new(),
            specialties: Vec::new(),
            active: true,
            published: true,
            is_verified: false,
            local_rating: None,
            external_rating: None,
        }
    }

    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    #[must_use]
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_specialties<I, S>(mut self, specialties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.specialties = specialties.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    #[must_use]
    pub fn with_published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }

    #[must_use]
    pub fn with_verified(mut self, verified: bool) -> Self {
        self.is_verified = verified;
        self
    }

    #[must_use]
    pub fn with_local_rating(mut self, count: u32, average: f64) -> Self {
        self.local_rating = Some(LocalRating::new(count, average));
        self
    }

    #[must_use]
    pub fn with_external_rating(mut self, rating: f64) -> Self {
        self.external_rating = Some(rating);
        self
    }

    /// Active and published; the only companies allowed in any result.
    #[inline]
    pub fn is_listed(&self) -> bool {
        self.active && self.published
    }

    #[inline]
    pub fn primary_category(&self) -> Option<&str> {
        self.categories.first().map(String::as_str)
    }

    /// Local rating if it is backed by at least one review
    #[inline]
    pub fn effective_local_rating(&self) -> Option<LocalRating> {
        self.local_rating.filter(LocalRating::is_present)
    }

    #[inline]
    pub fn effective_external_rating(&self) -> Option<f64> {
        self.external_rating.filter(|r| !r.is_nan())
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    pub fn has_specialty(&self, specialty: &str) -> bool {
        self.specialties.iter().any(|s| s == specialty)
    }

    /// Case-insensitive city comparison; an empty city never matches.
    pub fn in_city(&self, city: &str) -> bool {
        same_city(&self.city, city)
    }
}

/// Normalized form used for city comparisons
pub fn normalize_city(city: &str) -> String {
    city.trim().to_lowercase()
}

pub fn same_city(a: &str, b: &str) -> bool {
    let a = normalize_city(a);
    !a.is_empty() && a == normalize_city(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_company_id_parse() {
        assert_eq!(CompanyId::parse("42"), CompanyId::Integer(42));
        assert_eq!(
            CompanyId::parse("64b7f0c2e4b0a1a2b3c4d5e6"),
            CompanyId::String("64b7f0c2e4b0a1a2b3c4d5e6".to_string())
        );
        let u = Uuid::new_v4();
        assert_eq!(CompanyId::parse(&u.to_string()), CompanyId::Uuid(u));
    }

    #[test]
    fn test_company_deserialize_defaults() {
        let company: Company = serde_json::from_value(json!({
            "id": 42,
            "name": "Loodgieter Jansen",
            "slug": "loodgieter-jansen",
            "city": "Utrecht",
            "categories": ["loodgieter"],
            "isVerified": true,
            "localRating": {"count": 3, "average": 4.5}
        }))
        .unwrap();

        assert_eq!(company.id, CompanyId::Integer(42));
        assert!(company.active);
        assert!(company.published);
        assert!(company.is_verified);
        assert!(company.specialties.is_empty());
        assert_eq!(company.local_rating, Some(LocalRating::new(3, 4.5)));
        assert_eq!(company.external_rating, None);
    }

    #[test]
    fn test_zero_count_rating_is_absent() {
        let company = Company::new(1u64, "A", "a").with_local_rating(0, 4.0);
        assert!(company.effective_local_rating().is_none());
    }

    #[test]
    fn test_city_match_is_case_insensitive() {
        let company = Company::new(1u64, "A", "a").with_city(" Den Haag");
        assert!(company.in_city("den haag"));
        assert!(!company.in_city("Rotterdam"));
        assert!(!same_city("", ""));
    }

    #[test]
    fn test_listed_requires_active_and_published() {
        let company = Company::new(1u64, "A", "a");
        assert!(company.is_listed());
        assert!(!company.clone().with_active(false).is_listed());
        assert!(!company.with_published(false).is_listed());
    }
}
