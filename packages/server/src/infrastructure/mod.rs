//! Infrastructure layer: storage, outbound HTTP and wire DTOs.

pub mod client;
pub mod dto;
pub mod repository;
