//! UseCase 層のエラー定義

use thiserror::Error;

use crate::domain::{CustomerId, LookupClientError, LookupSource, RepositoryError};

/// Dual-source lookup failure
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchLookupError {
    /// One of the two sub-calls failed; no partial result is returned
    #[error("lookup against {which} failed: {cause}")]
    AggregatedFetch {
        which: LookupSource,
        #[source]
        cause: LookupClientError,
    },
}

/// Customer use case failures
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CustomerError {
    /// No customer is stored under the id
    #[error("Customer not found: {id}")]
    NotFound { id: CustomerId },

    /// The customer repository failed
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
