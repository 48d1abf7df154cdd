//! Core domain models for the service.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::value_object::{CustomerId, IdempotencyKey, Timestamp};

/// A stored customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Customer identifier, assigned by the repository
    pub id: CustomerId,
    pub name: String,
    pub email: String,
}

impl Customer {
    /// Create a customer with the given id from draft data
    pub fn from_draft(id: CustomerId, draft: CustomerDraft) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
        }
    }

    /// Overwrite the fields present in `patch`, leaving the others untouched
    pub fn apply_patch(&mut self, patch: CustomerPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
    }
}

/// Customer data without an identifier (create / full replace input)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDraft {
    pub name: String,
    pub email: String,
}

impl CustomerDraft {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Partial customer update; `None` fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Outcome of the first successful write seen for an idempotency key.
///
/// `customer` is an owned snapshot, so later changes to the stored customer
/// never leak into replayed responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdempotencyRecord {
    pub key: IdempotencyKey,
    pub customer: Customer,
    pub recorded_at: Timestamp,
}

impl IdempotencyRecord {
    pub fn new(key: IdempotencyKey, customer: Customer, recorded_at: Timestamp) -> Self {
        Self {
            key,
            customer,
            recorded_at,
        }
    }
}

/// Concurrency primitive used to fan out the two lookup calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LookupStrategy {
    /// Both calls polled together on the caller's task
    JoinedFutures,
    /// Each call on its own worker thread from the blocking pool
    TaskPerCall,
}

impl LookupStrategy {
    pub fn label(&self) -> &'static str {
        match self {
            Self::JoinedFutures => "joined-futures",
            Self::TaskPerCall => "task-per-call",
        }
    }
}

impl fmt::Display for LookupStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which of the two external sources a call targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LookupSource {
    SourceA,
    SourceB,
}

impl fmt::Display for LookupSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceA => f.write_str("source-a"),
            Self::SourceB => f.write_str("source-b"),
        }
    }
}

/// How a lookup key is placed into the request URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestShape {
    /// `{base}/{key}/{suffix}`; an empty suffix yields `{base}/{key}`
    PathSegment { suffix: String },
    /// `{base}/?{param}={key}`
    QueryParam { param: String },
}

/// An external lookup API and the request shape it expects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupEndpoint {
    pub source: LookupSource,
    pub base_url: String,
    pub shape: RequestShape,
}

impl LookupEndpoint {
    pub fn new(source: LookupSource, base_url: impl Into<String>, shape: RequestShape) -> Self {
        Self {
            source,
            base_url: base_url.into(),
            shape,
        }
    }
}

/// Merged payloads of one fan-out/join, with its wall-clock duration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    source_a: String,
    source_b: String,
    elapsed_ms: u64,
    strategy: LookupStrategy,
}

impl LookupResult {
    pub fn new(
        source_a: String,
        source_b: String,
        elapsed_ms: u64,
        strategy: LookupStrategy,
    ) -> Self {
        Self {
            source_a,
            source_b,
            elapsed_ms,
            strategy,
        }
    }

    pub fn source_a(&self) -> &str {
        &self.source_a
    }

    pub fn source_b(&self) -> &str {
        &self.source_b
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn strategy(&self) -> LookupStrategy {
        self.strategy
    }
}
