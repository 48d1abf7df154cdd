//! Domain layer for the service.
//!
//! This module contains business types and collaborator traits that are
//! independent of data transfer objects (DTOs) and infrastructure concerns.

pub mod entity;
pub mod error;
pub mod repository;
pub mod value_object;

pub use entity::{
    Customer, CustomerDraft, CustomerPatch, IdempotencyRecord, LookupEndpoint, LookupResult,
    LookupSource, LookupStrategy, RequestShape,
};
pub use error::{LookupClientError, RepositoryError, ValueObjectError};
pub use repository::{CustomerRepository, IdempotencyStore, LookupClient};
pub use value_object::{CustomerId, IdempotencyKey, LookupKey, Timestamp};

#[cfg(test)]
pub use repository::{MockCustomerRepository, MockLookupClient};
