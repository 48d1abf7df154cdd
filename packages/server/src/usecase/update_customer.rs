//! UseCase: 顧客の部分更新（PATCH）
//!
//! 指定されたフィールドだけを上書きします。冪等キーは扱いません。

use std::{sync::Arc, time::Instant};

use crate::domain::{Customer, CustomerId, CustomerPatch, CustomerRepository};

use super::error::CustomerError;

/// 顧客部分更新のユースケース
pub struct UpdateCustomerUseCase {
    repository: Arc<dyn CustomerRepository>,
}

impl UpdateCustomerUseCase {
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }

    /// 部分更新を実行し、更新後の顧客と所要時間（ms）を返す
    pub async fn execute(
        &self,
        id: CustomerId,
        patch: CustomerPatch,
    ) -> Result<(Customer, u64), CustomerError> {
        tracing::info!("Update Customer for id: {}", id);
        let start = Instant::now();

        let mut existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(CustomerError::NotFound { id })?;
        existing.apply_patch(patch);
        let saved = self.repository.save(existing).await?;

        let elapsed_ms = start.elapsed().as_millis() as u64;
        tracing::info!("Update for id {} completed in {}ms", id, elapsed_ms);
        Ok((saved, elapsed_ms))
    }
}
