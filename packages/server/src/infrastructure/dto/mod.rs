//! Wire DTOs.

pub mod http;
