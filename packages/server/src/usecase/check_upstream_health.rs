//! UseCase: 外部 API の死活確認
//!
//! 固定のプローブキーで source-a を一度呼び出し、応答の有無だけを見ます。

use std::sync::Arc;

use crate::domain::{LookupClient, LookupEndpoint, LookupKey};

/// 外部 API の状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamHealth {
    Up,
    Down { error: String },
}

/// 死活確認のユースケース
pub struct CheckUpstreamHealthUseCase {
    client: Arc<dyn LookupClient>,
    endpoint: LookupEndpoint,
    probe_key: LookupKey,
}

impl CheckUpstreamHealthUseCase {
    pub fn new(
        client: Arc<dyn LookupClient>,
        endpoint: LookupEndpoint,
        probe_key: LookupKey,
    ) -> Self {
        Self {
            client,
            endpoint,
            probe_key,
        }
    }

    pub async fn execute(&self) -> UpstreamHealth {
        match self.client.call(&self.endpoint, &self.probe_key).await {
            Ok(_) => UpstreamHealth::Up,
            Err(e) => {
                tracing::warn!("Upstream {} unavailable: {}", self.endpoint.source, e);
                UpstreamHealth::Down {
                    error: e.to_string(),
                }
            }
        }
    }
}
