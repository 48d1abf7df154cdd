//! UseCase: 顧客の削除

use std::{sync::Arc, time::Instant};

use crate::domain::{Customer, CustomerId, CustomerRepository};

use super::error::CustomerError;

/// 顧客削除のユースケース
pub struct DeleteCustomerUseCase {
    repository: Arc<dyn CustomerRepository>,
}

impl DeleteCustomerUseCase {
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }

    /// 顧客を削除し、削除前の内容を返す
    pub async fn execute(&self, id: CustomerId) -> Result<Customer, CustomerError> {
        tracing::info!("Delete Customer by id: {}", id);
        let start = Instant::now();

        let existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(CustomerError::NotFound { id })?;
        self.repository.delete_by_id(id).await?;

        tracing::info!(
            "Delete Customer id {} completed in {}ms",
            id,
            start.elapsed().as_millis()
        );
        Ok(existing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{CustomerDraft, MockCustomerRepository},
        infrastructure::repository::InMemoryCustomerRepository,
    };

    fn id(value: i64) -> CustomerId {
        CustomerId::new(value).unwrap()
    }

    #[tokio::test]
    async fn test_delete_returns_deleted_customer() {
        // テスト項目: 削除した顧客が返され、ストアから消える
        // given (前提条件):
        let lucas = Customer::from_draft(id(1), CustomerDraft::new("Lucas", "lucas@email.com"));
        let repository = Arc::new(InMemoryCustomerRepository::with_customers([lucas.clone()]));
        let usecase = DeleteCustomerUseCase::new(repository.clone());

        // when (操作):
        let deleted = usecase.execute(id(1)).await.unwrap();

        // then (期待する結果):
        assert_eq!(deleted, lucas);
        assert_eq!(repository.find_by_id(id(1)).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_missing_customer_is_not_found() {
        // テスト項目: 存在しない id は NotFound になり delete_by_id は呼ばれない
        let mut repository = MockCustomerRepository::new();
        repository.expect_find_by_id().returning(|_| Ok(None));
        repository.expect_delete_by_id().never();
        let usecase = DeleteCustomerUseCase::new(Arc::new(repository));

        let result = usecase.execute(id(7)).await;

        assert_eq!(result, Err(CustomerError::NotFound { id: id(7) }));
    }
}
