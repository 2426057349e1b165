use ahash::AHashMap;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;
use vakfinder_core::{Company, CompanyFilter, CompanyId, Error, Filter, Result};

use crate::store::CompanyStore;

/// In-memory company store
///
/// Records are kept ordered by id, so `find` returns candidates in a stable
/// order and the per-phase cap always keeps the same companies.
#[derive(Default)]
pub struct MemoryCompanyStore {
    companies: Arc<RwLock<BTreeMap<CompanyId, Company>>>,
    slugs: Arc<RwLock<AHashMap<String, CompanyId>>>,
}

impl MemoryCompanyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from a list of companies, rejecting duplicate ids or slugs
    pub fn from_companies(companies: Vec<Company>) -> Result<Self> {
        let store = Self::new();
        for company in companies {
            if store.get(&company.id).is_some() {
                return Err(Error::InvalidRecord(format!("duplicate company id {}", company.id)));
            }
            store.upsert(company)?;
        }
        Ok(store)
    }

    /// Insert or replace a company
    pub fn upsert(&self, company: Company) -> Result<()> {
        validate(&company)?;

        let mut companies = self.companies.write();
        let mut slugs = self.slugs.write();

        if let Some(owner) = slugs.get(&company.slug) {
            if owner != &company.id {
                return Err(Error::InvalidRecord(format!(
                    "slug '{}' already used by company {}",
                    company.slug, owner
                )));
            }
        }

        if let Some(previous) = companies.get(&company.id) {
            slugs.remove(&previous.slug);
        }
        slugs.insert(company.slug.clone(), company.id.clone());
        companies.insert(company.id.clone(), company);
        Ok(())
    }

    pub fn get(&self, id: &CompanyId) -> Option<Company> {
        self.companies.read().get(id).cloned()
    }

    pub fn count(&self) -> usize {
        self.companies.read().len()
    }

    /// Snapshot of all records, in id order
    pub fn all(&self) -> Vec<Company> {
        self.companies.read().values().cloned().collect()
    }
}

fn validate(company: &Company) -> Result<()> {
    if company.slug.trim().is_empty() {
        return Err(Error::InvalidRecord(format!("company {} has an empty slug", company.id)));
    }
    if let Some(rating) = company.local_rating {
        if !(0.0..=5.0).contains(&rating.average) {
            return Err(Error::InvalidRecord(format!(
                "company {} local rating {} outside [0, 5]",
                company.id, rating.average
            )));
        }
    }
    if let Some(rating) = company.external_rating {
        if !(0.0..=5.0).contains(&rating) {
            return Err(Error::InvalidRecord(format!(
                "company {} external rating {} outside [0, 5]",
                company.id, rating
            )));
        }
    }
    Ok(())
}

#[async_trait]
impl CompanyStore for MemoryCompanyStore {
    async fn find(&self, filter: &CompanyFilter, limit: usize) -> Result<Vec<Company>> {
        let companies = self.companies.read();
        Ok(companies
            .values()
            .filter(|company| filter.matches(company))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &CompanyId) -> Result<Option<Company>> {
        Ok(self.get(id))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Company>> {
        let id = self.slugs.read().get(slug).cloned();
        Ok(id.and_then(|id| self.get(&id)))
    }
}
