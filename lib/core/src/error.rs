use thiserror::Error;

use crate::CompanyId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing criteria: {0}")]
    MissingCriteria(String),

    #[error("Anchor company not found: {0}")]
    AnchorNotFound(String),

    #[error("Company store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Invariant violation for company {id}: {reason}")]
    InvariantViolation { id: CompanyId, reason: String },

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Only store outages are worth retrying; validation failures are terminal.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::StoreUnavailable(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
