use crate::storage::StorageError;
use thiserror::Error;

/// Failure modes of the marketplace store. Every operation either fully
/// applies (in memory and persisted) or returns one of these with state
/// untouched.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("post limit reached for employer {employer_id}")]
    QuotaExceeded { employer_id: String },

    #[error("job {0} not found")]
    JobNotFound(String),

    #[error("{collection} record {id} not found")]
    RecordNotFound { collection: &'static str, id: String },

    #[error("storage unavailable: {0}")]
    Storage(#[from] StorageError),
}

pub type StoreResult<T> = Result<T, StoreError>;
