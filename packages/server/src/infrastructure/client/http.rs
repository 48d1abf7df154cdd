//! reqwest implementation of [`LookupClient`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;

use crate::domain::{LookupClient, LookupClientError, LookupEndpoint, LookupKey, RequestShape};

/// Lookup client backed by a shared `reqwest::Client` connection pool.
#[derive(Debug, Clone)]
pub struct ReqwestLookupClient {
    http: reqwest::Client,
    timeout: Duration,
}

impl ReqwestLookupClient {
    /// Build a client whose requests give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, timeout })
    }

    fn map_error(&self, err: reqwest::Error) -> LookupClientError {
        if err.is_timeout() {
            LookupClientError::Timeout {
                after_ms: self.timeout.as_millis() as u64,
            }
        } else {
            LookupClientError::Transport(err.to_string())
        }
    }
}

/// Build the request URL for `key` against `endpoint`.
///
/// The key is percent-encoded as a path segment or query value.
pub fn request_url(endpoint: &LookupEndpoint, key: &LookupKey) -> Result<Url, LookupClientError> {
    let invalid = || LookupClientError::InvalidEndpoint(endpoint.base_url.clone());
    let mut url = Url::parse(&endpoint.base_url).map_err(|_| invalid())?;

    {
        let mut segments = url.path_segments_mut().map_err(|_| invalid())?;
        segments.pop_if_empty();
        match &endpoint.shape {
            RequestShape::PathSegment { suffix } => {
                segments.push(key.as_str());
                if !suffix.is_empty() {
                    segments.push(suffix);
                }
            }
            RequestShape::QueryParam { .. } => {
                segments.push("");
            }
        }
    }

    if let RequestShape::QueryParam { param } = &endpoint.shape {
        url.query_pairs_mut().append_pair(param, key.as_str());
    }

    Ok(url)
}

#[async_trait]
impl LookupClient for ReqwestLookupClient {
    async fn call(
        &self,
        endpoint: &LookupEndpoint,
        key: &LookupKey,
    ) -> Result<String, LookupClientError> {
        let url = request_url(endpoint, key)?;
        tracing::debug!("GET {} ({})", url, endpoint.source);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.map_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupClientError::Status {
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| self.map_error(e))
    }
}
