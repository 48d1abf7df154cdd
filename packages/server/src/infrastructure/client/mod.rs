//! Outbound clients for the external lookup APIs.

mod http;

pub use http::{ReqwestLookupClient, request_url};
