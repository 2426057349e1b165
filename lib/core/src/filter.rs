// Typed company filter that any storage backend can translate
use serde::{Deserialize, Serialize};
use crate::{Company, CompanyId};

pub trait Filter {
    fn matches(&self, company: &Company) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FlagField {
    Active,
    Published,
    Verified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextField {
    City,
    Slug,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TagField {
    Categories,
    Specialties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum FilterCondition {
    Equals { field: FlagField, value: bool },
    EqualsIgnoreCase { field: TextField, value: String },
    Contains { field: TagField, value: String },
    EmptyOrContains { field: TagField, value: String },
    NotId { id: CompanyId },
}

impl FilterCondition {
    fn flag(company: &Company, field: FlagField) -> bool {
        match field {
            FlagField::Active => company.active,
            FlagField::Published => company.published,
            FlagField::Verified => company.is_verified,
        }
    }

    fn text(company: &Company, field: TextField) -> &str {
        match field {
            TextField::City => &company.city,
            TextField::Slug => &company.slug,
        }
    }

    fn tags(company: &Company, field: TagField) -> &[String] {
        match field {
            TagField::Categories => &company.categories,
            TagField::Specialties => &company.specialties,
        }
    }

    pub fn matches(&self, company: &Company) -> bool {
        match self {
            FilterCondition::Equals { field, value } => Self::flag(company, *field) == *value,
            FilterCondition::EqualsIgnoreCase { field, value } => {
                let actual = Self::text(company, *field).trim();
                !actual.is_empty() && actual.to_lowercase() == value.trim().to_lowercase()
            }
            FilterCondition::Contains { field, value } => {
                Self::tags(company, *field).iter().any(|t| t == value)
            }
            FilterCondition::EmptyOrContains { field, value } => {
                let tags = Self::tags(company, *field);
                tags.is_empty() || tags.iter().any(|t| t == value)
            }
            FilterCondition::NotId { id } => &company.id != id,
        }
    }
}

/// Conjunction of filter conditions over companies
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyFilter {
    conditions: Vec<FilterCondition>,
}

impl CompanyFilter {
    pub fn new(conditions: Vec<FilterCondition>) -> Self {
        Self { conditions }
    }

    #[must_use]
    pub fn and(mut self, condition: FilterCondition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn conditions(&self) -> &[FilterCondition] {
        &self.conditions
    }

    /// City constraint, if the filter carries one
    pub fn city(&self) -> Option<&str> {
        self.conditions.iter().find_map(|c| match c {
            FilterCondition::EqualsIgnoreCase { field: TextField::City, value } => Some(value.as_str()),
            _ => None,
        })
    }

    /// Same filter with the geographic constraint dropped
    #[must_use]
    pub fn without_city(&self) -> Self {
        Self {
            conditions: self
                .conditions
                .iter()
                .filter(|c| {
                    !matches!(c, FilterCondition::EqualsIgnoreCase { field: TextField::City, .. })
                })
                .cloned()
                .collect(),
        }
    }

    /// First condition the company fails, if any
    pub fn first_violation(&self, company: &Company) -> Option<&FilterCondition> {
        self.conditions.iter().find(|c| !c.matches(company))
    }
}

impl Filter for CompanyFilter {
    fn matches(&self, company: &Company) -> bool {
        self.conditions.iter().all(|c| c.matches(company))
    }
}
