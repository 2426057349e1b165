//! Review aggregates feeding the local-rating tier of request ranking.
//!
//! Only approved reviews are ever counted; pending and reported reviews are
//! invisible to the matching engine.

use ahash::AHashMap;
use async_trait::async_trait;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use vakfinder_core::{CompanyId, Error, LocalRating, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    #[default]
    Pending,
    Approved,
    Reported,
}

/// A single customer review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub company_id: CompanyId,
    /// Stars, 1 to 5
    pub rating: u8,
    #[serde(default)]
    pub status: ReviewStatus,
}

impl Review {
    pub fn approved(company_id: impl Into<CompanyId>, rating: u8) -> Self {
        Self {
            company_id: company_id.into(),
            rating,
            status: ReviewStatus::Approved,
        }
    }

    #[must_use]
    pub fn with_status(mut self, status: ReviewStatus) -> Self {
        self.status = status;
        self
    }
}

/// Source of per-company local ratings
#[async_trait]
pub trait ReviewAggregate: Send + Sync {
    /// `None` when the company has no approved reviews
    async fn for_company(&self, id: &CompanyId) -> Result<Option<LocalRating>>;
}

#[async_trait]
impl<T: ReviewAggregate + ?Sized> ReviewAggregate for Arc<T> {
    async fn for_company(&self, id: &CompanyId) -> Result<Option<LocalRating>> {
        (**self).for_company(id).await
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    count: u32,
    sum: u64,
}

/// In-memory review store keeping a running tally of approved reviews
#[derive(Default)]
pub struct MemoryReviewStore {
    reviews: Arc<RwLock<Vec<Review>>>,
    approved: Arc<RwLock<AHashMap<CompanyId, Tally>>>,
}

impl MemoryReviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_reviews(reviews: Vec<Review>) -> Result<Self> {
        let store = Self::new();
        for review in reviews {
            store.add(review)?;
        }
        Ok(store)
    }

    pub fn add(&self, review: Review) -> Result<()> {
        if !(1..=5).contains(&review.rating) {
            return Err(Error::InvalidRecord(format!(
                "review for company {} has rating {}, expected 1 to 5",
                review.company_id, review.rating
            )));
        }

        if review.status == ReviewStatus::Approved {
            let mut approved = self.approved.write();
            let tally = approved.entry(review.company_id.clone()).or_default();
            tally.count += 1;
            tally.sum += u64::from(review.rating);
        }
        self.reviews.write().push(review);
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.reviews.read().len()
    }

    pub fn all(&self) -> Vec<Review> {
        self.reviews.read().clone()
    }

    pub fn rating(&self, id: &CompanyId) -> Option<LocalRating> {
        self.approved
            .read()
            .get(id)
            .filter(|t| t.count > 0)
            .map(|t| LocalRating::new(t.count, t.sum as f64 / f64::from(t.count)))
    }
}

#[async_trait]
impl ReviewAggregate for MemoryReviewStore {
    async fn for_company(&self, id: &CompanyId) -> Result<Option<LocalRating>> {
        Ok(self.rating(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_only_approved_reviews_count() {
        let store = MemoryReviewStore::from_reviews(vec![
            Review::approved(1u64, 5),
            Review::approved(1u64, 4),
            Review::approved(1u64, 1).with_status(ReviewStatus::Reported),
            Review::approved(1u64, 1).with_status(ReviewStatus::Pending),
        ])
        .unwrap();

        let rating = store.for_company(&CompanyId::Integer(1)).await.unwrap().unwrap();
        assert_eq!(rating.count, 2);
        assert!((rating.average - 4.5).abs() < f64::EPSILON);
        assert_eq!(store.count(), 4);
    }

    #[tokio::test]
    async fn test_no_approved_reviews_is_none() {
        let store = MemoryReviewStore::from_reviews(vec![
            Review::approved(2u64, 3).with_status(ReviewStatus::Pending),
        ])
        .unwrap();
        assert!(store.for_company(&CompanyId::Integer(2)).await.unwrap().is_none());
        assert!(store.for_company(&CompanyId::Integer(3)).await.unwrap().is_none());
    }

    #[test]
    fn test_rating_out_of_range_rejected() {
        let store = MemoryReviewStore::new();
        assert!(matches!(store.add(Review::approved(1u64, 0)), Err(Error::InvalidRecord(_))));
        assert!(matches!(store.add(Review::approved(1u64, 6)), Err(Error::InvalidRecord(_))));
    }

    #[test]
    fn test_status_deserializes_lowercase() {
        let review: Review =
            serde_json::from_str(r#"{"companyId": 7, "rating": 4, "status": "approved"}"#).unwrap();
        assert_eq!(review.status, ReviewStatus::Approved);

        let review: Review = serde_json::from_str(r#"{"companyId": "abc", "rating": 2}"#).unwrap();
        assert_eq!(review.status, ReviewStatus::Pending);
        assert_eq!(review.company_id, CompanyId::String("abc".into()));
    }
}
