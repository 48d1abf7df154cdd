//! UseCase: 顧客の新規作成

use std::{sync::Arc, time::Instant};

use crate::domain::{Customer, CustomerDraft, CustomerRepository};

use super::error::CustomerError;

/// 顧客作成のユースケース
pub struct CreateCustomerUseCase {
    repository: Arc<dyn CustomerRepository>,
}

impl CreateCustomerUseCase {
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }

    /// 顧客を作成し、採番された id を含めて返す
    pub async fn execute(&self, draft: CustomerDraft) -> Result<Customer, CustomerError> {
        tracing::info!("Creating new Customer: {}", draft.name);
        let start = Instant::now();

        let saved = self.repository.create(draft).await?;

        tracing::info!(
            "Customer created with id {} in {}ms",
            saved.id,
            start.elapsed().as_millis()
        );
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{CustomerId, MockCustomerRepository, RepositoryError},
        infrastructure::repository::InMemoryCustomerRepository,
    };

    #[tokio::test]
    async fn test_create_returns_saved_customer_with_generated_id() {
        // テスト項目: 作成した顧客が採番済みの id 付きで返される
        // given (前提条件):
        let repository = Arc::new(InMemoryCustomerRepository::new());
        let usecase = CreateCustomerUseCase::new(repository.clone());

        // when (操作):
        let result = usecase
            .execute(CustomerDraft::new("Lucas", "lucas@email.com"))
            .await
            .unwrap();

        // then (期待する結果):
        assert_eq!(result.id, CustomerId::new(1).unwrap());
        assert_eq!(result.name, "Lucas");
        assert_eq!(result.email, "lucas@email.com");
        assert_eq!(
            repository.find_by_id(result.id).await.unwrap(),
            Some(result)
        );
    }

    #[tokio::test]
    async fn test_create_propagates_repository_error() {
        // テスト項目: リポジトリのエラーはそのまま返される
        let mut repository = MockCustomerRepository::new();
        repository
            .expect_create()
            .returning(|_| Err(RepositoryError::Unavailable("down".to_string())));
        let usecase = CreateCustomerUseCase::new(Arc::new(repository));

        let result = usecase
            .execute(CustomerDraft::new("Lucas", "lucas@email.com"))
            .await;

        assert_eq!(
            result,
            Err(CustomerError::Repository(RepositoryError::Unavailable(
                "down".to_string()
            )))
        );
    }
}
