//! Collaborator traits the use cases depend on.
//!
//! The infrastructure layer provides the implementations; use cases only see
//! these traits (dependency inversion).

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::OnceCell;

use super::{
    entity::{Customer, CustomerDraft, IdempotencyRecord, LookupEndpoint},
    error::{LookupClientError, RepositoryError},
    value_object::{CustomerId, IdempotencyKey, LookupKey},
};

/// Customer storage
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, RepositoryError>;

    /// Insert a new customer, assigning the next identifier
    async fn create(&self, draft: CustomerDraft) -> Result<Customer, RepositoryError>;

    /// Insert or overwrite the customer stored under `customer.id`
    async fn save(&self, customer: Customer) -> Result<Customer, RepositoryError>;

    async fn delete_by_id(&self, id: CustomerId) -> Result<(), RepositoryError>;

    /// All customers ordered by id
    async fn find_all(&self) -> Result<Vec<Customer>, RepositoryError>;
}

/// Shared map from idempotency key to the recorded write outcome.
///
/// Each key owns a single-flight slot: whoever initializes the slot first
/// wins, and every other caller holding the same slot observes that value.
/// A slot that was never successfully initialized counts as unseen, and is
/// dropped by [`IdempotencyStore::release`] once nobody holds it.
#[async_trait]
pub trait IdempotencyStore: Send + Sync {
    /// Get the slot for `key`, creating an empty one if the key is unseen
    async fn slot(&self, key: &IdempotencyKey) -> Arc<OnceCell<IdempotencyRecord>>;

    /// Recorded outcome for `key`, if any
    async fn get(&self, key: &IdempotencyKey) -> Option<IdempotencyRecord>;

    /// Forget `key` if its slot is still empty and no caller holds it
    async fn release(&self, key: &IdempotencyKey);
}

/// A single call to one external lookup API
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LookupClient: Send + Sync {
    /// Fetch the raw payload `endpoint` returns for `key`
    async fn call(
        &self,
        endpoint: &LookupEndpoint,
        key: &LookupKey,
    ) -> Result<String, LookupClientError>;
}
