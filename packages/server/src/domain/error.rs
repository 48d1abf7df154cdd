//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// CustomerId must be a positive integer
    #[error("CustomerId must be positive (got {0})")]
    CustomerIdNotPositive(i64),

    /// IdempotencyKey validation error
    #[error("Idempotency-Key cannot be empty")]
    IdempotencyKeyEmpty,

    /// IdempotencyKey too long error
    #[error("Idempotency-Key cannot exceed {max} characters (got {actual})")]
    IdempotencyKeyTooLong { max: usize, actual: usize },

    /// LookupKey validation error
    #[error("Lookup key cannot be empty")]
    LookupKeyEmpty,
}

/// Errors raised by repository implementations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The backing store could not serve the request
    #[error("Repository unavailable: {0}")]
    Unavailable(String),
}

/// Errors raised by a single external lookup call
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupClientError {
    /// Connection, DNS or body decoding failure
    #[error("transport error: {0}")]
    Transport(String),

    /// Upstream answered with a non-success status
    #[error("upstream responded with status {status}")]
    Status { status: u16 },

    /// The call did not finish within its deadline
    #[error("no response within {after_ms}ms")]
    Timeout { after_ms: u64 },

    /// The worker running the call panicked or was cancelled
    #[error("lookup task aborted: {0}")]
    TaskAborted(String),

    /// The endpoint could not be turned into a request URL
    #[error("invalid endpoint url '{0}'")]
    InvalidEndpoint(String),
}
