//! UseCase: 二つの外部 API への並列問い合わせ
//!
//! 同じキーで二つのソースを同時に呼び出し、両方の結果を一つの
//! [`LookupResult`] にまとめます。経過時間は個々の呼び出しではなく
//! fan-out/join 全体で計測します。
//!
//! ## 戦略
//!
//! - `JoinedFutures`: 呼び出し元のタスク上で二つの future を同時に poll する
//! - `TaskPerCall`: 呼び出しごとに blocking プールのスレッドを一つ使う
//!
//! どちらも最初の失敗で即座にエラーを返します。`TaskPerCall` で既に
//! 走っているもう一方のスレッドは完了まで走らせます。

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use tokio::{runtime::Handle, task::JoinHandle};

use crate::domain::{
    LookupClient, LookupClientError, LookupEndpoint, LookupKey, LookupResult, LookupSource,
    LookupStrategy,
};

use super::error::FetchLookupError;

/// 並列問い合わせのユースケース
pub struct FetchLookupUseCase {
    client: Arc<dyn LookupClient>,
    source_a: LookupEndpoint,
    source_b: LookupEndpoint,
    /// 各呼び出しの上限時間
    call_timeout: Duration,
}

impl FetchLookupUseCase {
    /// 新しい FetchLookupUseCase を作成
    pub fn new(
        client: Arc<dyn LookupClient>,
        source_a: LookupEndpoint,
        source_b: LookupEndpoint,
        call_timeout: Duration,
    ) -> Self {
        Self {
            client,
            source_a,
            source_b,
            call_timeout,
        }
    }

    /// 並列問い合わせを実行
    ///
    /// # Arguments
    ///
    /// * `key` - 両方のソースにそのまま渡すキー
    /// * `strategy` - 並列化の方式
    ///
    /// # Returns
    ///
    /// * `Ok(LookupResult)` - 両方のペイロードと経過時間
    /// * `Err(FetchLookupError)` - どちらかの呼び出しが失敗
    pub async fn execute(
        &self,
        key: LookupKey,
        strategy: LookupStrategy,
    ) -> Result<LookupResult, FetchLookupError> {
        tracing::info!("Fetching data for key ({}): {}", strategy, key);
        let start = Instant::now();

        let (source_a, source_b) = match strategy {
            LookupStrategy::JoinedFutures => self.join_futures(&key).await?,
            LookupStrategy::TaskPerCall => self.task_per_call(&key).await?,
        };

        let elapsed_ms = start.elapsed().as_millis() as u64;
        tracing::info!("Parallel query ({}) completed in {}ms", strategy, elapsed_ms);

        Ok(LookupResult::new(source_a, source_b, elapsed_ms, strategy))
    }

    async fn join_futures(&self, key: &LookupKey) -> Result<(String, String), FetchLookupError> {
        tokio::try_join!(
            call_with_deadline(self.client.as_ref(), &self.source_a, key, self.call_timeout),
            call_with_deadline(self.client.as_ref(), &self.source_b, key, self.call_timeout),
        )
    }

    async fn task_per_call(&self, key: &LookupKey) -> Result<(String, String), FetchLookupError> {
        let task_a = self.spawn_call(self.source_a.clone(), key.clone());
        let task_b = self.spawn_call(self.source_b.clone(), key.clone());

        tokio::try_join!(
            join_call(self.source_a.source, task_a),
            join_call(self.source_b.source, task_b),
        )
    }

    /// blocking プールのスレッド上で呼び出しを完了まで駆動する
    fn spawn_call(
        &self,
        endpoint: LookupEndpoint,
        key: LookupKey,
    ) -> JoinHandle<Result<String, FetchLookupError>> {
        let client = Arc::clone(&self.client);
        let call_timeout = self.call_timeout;
        let runtime = Handle::current();

        tokio::task::spawn_blocking(move || {
            runtime.block_on(call_with_deadline(
                client.as_ref(),
                &endpoint,
                &key,
                call_timeout,
            ))
        })
    }
}

async fn call_with_deadline(
    client: &dyn LookupClient,
    endpoint: &LookupEndpoint,
    key: &LookupKey,
    deadline: Duration,
) -> Result<String, FetchLookupError> {
    let result = match tokio::time::timeout(deadline, client.call(endpoint, key)).await {
        Ok(result) => result,
        Err(_) => Err(LookupClientError::Timeout {
            after_ms: deadline.as_millis() as u64,
        }),
    };

    result.map_err(|cause| {
        tracing::warn!("Lookup against {} failed: {}", endpoint.source, cause);
        FetchLookupError::AggregatedFetch {
            which: endpoint.source,
            cause,
        }
    })
}

async fn join_call(
    which: LookupSource,
    task: JoinHandle<Result<String, FetchLookupError>>,
) -> Result<String, FetchLookupError> {
    match task.await {
        Ok(result) => result,
        Err(e) => Err(FetchLookupError::AggregatedFetch {
            which,
            cause: LookupClientError::TaskAborted(e.to_string()),
        }),
    }
}
