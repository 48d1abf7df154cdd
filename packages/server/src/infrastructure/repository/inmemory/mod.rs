//! In-memory implementations backed by mutex-guarded maps.

mod customer;
mod idempotency;

pub use customer::InMemoryCustomerRepository;
pub use idempotency::InMemoryIdempotencyStore;
