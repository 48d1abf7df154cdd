//! Server state shared by all handlers.

use std::{sync::Arc, time::Duration};

use crate::{
    config::Config,
    domain::{
        CustomerRepository, IdempotencyStore, LookupClient, LookupEndpoint, LookupKey,
        ValueObjectError,
    },
    infrastructure::{
        client::ReqwestLookupClient,
        repository::{InMemoryCustomerRepository, InMemoryIdempotencyStore},
    },
};

/// Errors while assembling [`AppState`] from configuration
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("invalid health probe key: {0}")]
    ProbeKey(#[from] ValueObjectError),
}

/// Shared application state
pub struct AppState {
    /// Customer storage
    pub repository: Arc<dyn CustomerRepository>,
    /// Idempotency records for PUT, shared across requests
    pub idempotency: Arc<dyn IdempotencyStore>,
    /// Client used for both lookup sources and the health probe
    pub lookup_client: Arc<dyn LookupClient>,
    pub source_a: LookupEndpoint,
    pub source_b: LookupEndpoint,
    pub lookup_timeout: Duration,
    pub health_probe_key: LookupKey,
}

impl AppState {
    /// Wire in-memory storage and the reqwest lookup client from `config`
    pub fn from_config(config: &Config) -> Result<Self, StateError> {
        let lookup_client = ReqwestLookupClient::new(config.lookup_timeout())?;

        Ok(Self {
            repository: Arc::new(InMemoryCustomerRepository::new()),
            idempotency: Arc::new(InMemoryIdempotencyStore::new()),
            lookup_client: Arc::new(lookup_client),
            source_a: config.source_a(),
            source_b: config.source_b(),
            lookup_timeout: config.lookup_timeout(),
            health_probe_key: config.health_probe_key()?,
        })
    }
}
