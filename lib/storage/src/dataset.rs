// JSON dataset used to seed the in-memory stores
use atomicwrites::{AtomicFile, OverwriteBehavior};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use vakfinder_core::{Company, Error, Result};

use crate::memory::MemoryCompanyStore;
use crate::reviews::{MemoryReviewStore, Review};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub companies: Vec<Company>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl Dataset {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let dataset: Dataset = serde_json::from_reader(BufReader::new(file))?;
        tracing::debug!(
            companies = dataset.companies.len(),
            reviews = dataset.reviews.len(),
            "dataset loaded from {:?}",
            path.as_ref()
        );
        Ok(dataset)
    }

    /// Write the dataset; readers never observe a half-written file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        AtomicFile::new(path.as_ref(), OverwriteBehavior::AllowOverwrite)
            .write(|f| serde_json::to_writer_pretty(f, self))
            .map_err(|e| match e {
                atomicwrites::Error::Internal(io) => Error::Io(io),
                atomicwrites::Error::User(json) => Error::from(json),
            })
    }

    /// Split into validated in-memory stores
    pub fn into_stores(self) -> Result<(MemoryCompanyStore, MemoryReviewStore)> {
        let companies = MemoryCompanyStore::from_companies(self.companies)?;
        let reviews = MemoryReviewStore::from_reviews(self.reviews)?;
        Ok((companies, reviews))
    }
}
