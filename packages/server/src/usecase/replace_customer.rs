//! UseCase: 顧客の置き換え（PUT）と冪等キー
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ReplaceCustomerUseCase::execute() メソッド
//! - 冪等キーなし: 毎回ストアに書き込む
//! - 冪等キーあり: 最初に成功した書き込みの結果だけを記録し、以後は再生する
//!
//! ### なぜこのテストが必要か
//! - クライアントのリトライで同じ書き込みが二重に適用されないことを保証
//! - 同じキーの同時リクエストでも勝者は一つだけで、全員が同じ値を受け取ることを保証
//! - 記録はスナップショットであり、後からの更新で再生内容が変わらないことを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：キーなし置き換え、キーありの初回と再送
//! - 異常系：存在しない id（キーは記録されない）
//! - エッジケース：同じキーでの同時リクエスト

use std::{sync::Arc, time::Instant};

use fundamentals_shared::time::{get_jst_timestamp, timestamp_to_jst_rfc3339};

use crate::domain::{
    Customer, CustomerDraft, CustomerId, CustomerRepository, IdempotencyKey, IdempotencyRecord,
    IdempotencyStore, Timestamp,
};

use super::error::CustomerError;

/// 置き換え結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceOutcome {
    pub customer: Customer,
    /// 記録済みの結果を再生した場合は true
    pub cache_hit: bool,
    pub elapsed_ms: u64,
}

/// 顧客置き換えのユースケース
pub struct ReplaceCustomerUseCase {
    repository: Arc<dyn CustomerRepository>,
    idempotency: Arc<dyn IdempotencyStore>,
}

impl ReplaceCustomerUseCase {
    /// 新しい ReplaceCustomerUseCase を作成
    pub fn new(
        repository: Arc<dyn CustomerRepository>,
        idempotency: Arc<dyn IdempotencyStore>,
    ) -> Self {
        Self {
            repository,
            idempotency,
        }
    }

    /// 置き換えを実行
    ///
    /// # Arguments
    ///
    /// * `idempotency_key` - クライアントが指定した冪等キー（任意）
    /// * `id` - 置き換え対象の顧客 ID
    /// * `draft` - 新しい内容（id は `id` に固定される）
    ///
    /// # Returns
    ///
    /// * `Ok(ReplaceOutcome)` - 書き込んだ、または再生した顧客
    /// * `Err(CustomerError::NotFound)` - 対象が存在しない（キーは記録されない）
    pub async fn execute(
        &self,
        idempotency_key: Option<IdempotencyKey>,
        id: CustomerId,
        draft: CustomerDraft,
    ) -> Result<ReplaceOutcome, CustomerError> {
        tracing::info!("Replacing Customer for id: {}", id);
        let start = Instant::now();

        let (customer, cache_hit) = match idempotency_key {
            None => (self.replace(id, draft).await?, false),
            Some(key) => self.replace_once(key, id, draft).await?,
        };

        let elapsed_ms = start.elapsed().as_millis() as u64;
        if !cache_hit {
            tracing::info!("Replace for id {} completed in {}ms", id, elapsed_ms);
        }

        Ok(ReplaceOutcome {
            customer,
            cache_hit,
            elapsed_ms,
        })
    }

    async fn replace(
        &self,
        id: CustomerId,
        draft: CustomerDraft,
    ) -> Result<Customer, CustomerError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(CustomerError::NotFound { id })?;

        let customer = Customer::from_draft(id, draft);
        self.repository.save(customer.clone()).await?;
        Ok(customer)
    }

    /// キーごとに一度だけ書き込む
    ///
    /// 同じキーの呼び出しは同じスロットを共有し、スロットを初期化できた
    /// 呼び出しだけがストアに書き込む。失敗した場合スロットは空のまま残り、
    /// 待っていた次の呼び出しが書き込みを試みる。誰も待っていなければ
    /// 空のスロットはストアから取り除かれる。
    async fn replace_once(
        &self,
        key: IdempotencyKey,
        id: CustomerId,
        draft: CustomerDraft,
    ) -> Result<(Customer, bool), CustomerError> {
        if let Some(record) = self.idempotency.get(&key).await {
            log_replay(&record);
            return Ok((record.customer, true));
        }

        let slot = self.idempotency.slot(&key).await;
        let mut written = false;
        let written_flag = &mut written;
        let record_key = key.clone();

        let result = slot
            .get_or_try_init(move || async move {
                let customer = self.replace(id, draft).await?;
                *written_flag = true;
                Ok::<_, CustomerError>(IdempotencyRecord::new(
                    record_key,
                    customer,
                    Timestamp::new(get_jst_timestamp()),
                ))
            })
            .await
            .cloned();
        drop(slot);

        let record = match result {
            Ok(record) => record,
            Err(e) => {
                self.idempotency.release(&key).await;
                return Err(e);
            }
        };

        if !written {
            log_replay(&record);
        }
        Ok((record.customer, !written))
    }
}

fn log_replay(record: &IdempotencyRecord) {
    tracing::warn!(
        "Idempotency-Key '{}' duplicated, replaying response recorded at {}",
        record.key,
        timestamp_to_jst_rfc3339(record.recorded_at.value())
    );
}
