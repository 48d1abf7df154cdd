//! CRUD service library.
//!
//! Provides a concurrent dual-source lookup (two strategies for the same
//! fan-out/join) and customer CRUD whose replace operation is guarded by
//! client-supplied idempotency keys.

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use config::Config;
pub use ui::run as run_server;
