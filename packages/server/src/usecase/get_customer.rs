//! UseCase: 顧客の取得（単体 / 一覧）

use std::{sync::Arc, time::Instant};

use crate::domain::{Customer, CustomerId, CustomerRepository};

use super::error::CustomerError;

/// 顧客取得のユースケース
pub struct GetCustomerUseCase {
    repository: Arc<dyn CustomerRepository>,
}

impl GetCustomerUseCase {
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }

    /// id で顧客を取得し、所要時間（ms）と一緒に返す
    pub async fn execute(&self, id: CustomerId) -> Result<(Customer, u64), CustomerError> {
        tracing::info!("Get Customer by id: {}", id);
        let start = Instant::now();

        let customer = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(CustomerError::NotFound { id })?;

        let elapsed_ms = start.elapsed().as_millis() as u64;
        tracing::info!("Get Customer id {} completed in {}ms", id, elapsed_ms);
        Ok((customer, elapsed_ms))
    }
}

/// 顧客一覧のユースケース
pub struct ListCustomersUseCase {
    repository: Arc<dyn CustomerRepository>,
}

impl ListCustomersUseCase {
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }

    /// 全顧客を id 順で返す
    pub async fn execute(&self) -> Result<Vec<Customer>, CustomerError> {
        Ok(self.repository.find_all().await?)
    }
}
