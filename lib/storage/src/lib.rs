pub mod store;
pub mod memory;
pub mod reviews;
pub mod dataset;

pub use store::CompanyStore;
pub use memory::MemoryCompanyStore;
pub use reviews::{MemoryReviewStore, Review, ReviewAggregate, ReviewStatus};
pub use dataset::Dataset;
