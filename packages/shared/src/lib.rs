//! Shared utilities for the fundamentals service.
//!
//! Logger initialization and time helpers used by the server package.

pub mod logger;
pub mod time;
