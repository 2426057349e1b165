use async_trait::async_trait;
use std::sync::Arc;
use vakfinder_core::{Company, CompanyFilter, CompanyId, Result};

/// Read-only access to company records
///
/// Implementations translate [`CompanyFilter`] into their own query language.
/// Transport or backend failures must surface as
/// [`vakfinder_core::Error::StoreUnavailable`], never as an empty result.
#[async_trait]
pub trait CompanyStore: Send + Sync {
    /// Companies matching `filter`, at most `limit` of them
    async fn find(&self, filter: &CompanyFilter, limit: usize) -> Result<Vec<Company>>;

    async fn find_by_id(&self, id: &CompanyId) -> Result<Option<Company>>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Company>>;
}

#[async_trait]
impl<T: CompanyStore + ?Sized> CompanyStore for Arc<T> {
    async fn find(&self, filter: &CompanyFilter, limit: usize) -> Result<Vec<Company>> {
        (**self).find(filter, limit).await
    }

    async fn find_by_id(&self, id: &CompanyId) -> Result<Option<Company>> {
        (**self).find_by_id(id).await
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Company>> {
        (**self).find_by_slug(slug).await
    }
}
