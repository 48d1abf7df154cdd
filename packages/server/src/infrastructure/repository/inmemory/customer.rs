//! InMemory Customer Repository 実装
//!
//! ドメイン層が定義する CustomerRepository trait の具体的な実装。
//! BTreeMap をインメモリ DB として使用し、id 順の一覧取得をそのまま提供します。

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Customer, CustomerDraft, CustomerId, CustomerRepository, RepositoryError};

#[derive(Debug)]
struct Table {
    rows: BTreeMap<CustomerId, Customer>,
    next_id: i64,
}

impl Table {
    fn bump_sequence(&mut self, id: CustomerId) {
        if id.value() >= self.next_id {
            self.next_id = id.value() + 1;
        }
    }
}

/// インメモリ Customer Repository 実装
///
/// 採番は 1 から始まる連番。`save` で採番済みより大きい id が保存された場合は
/// 次の採番をその後ろにずらします。
#[derive(Debug)]
pub struct InMemoryCustomerRepository {
    table: Mutex<Table>,
}

impl InMemoryCustomerRepository {
    /// 空の InMemoryCustomerRepository を作成
    pub fn new() -> Self {
        Self {
            table: Mutex::new(Table {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// 既存データを投入した InMemoryCustomerRepository を作成
    pub fn with_customers(customers: impl IntoIterator<Item = Customer>) -> Self {
        let mut table = Table {
            rows: BTreeMap::new(),
            next_id: 1,
        };
        for customer in customers {
            table.bump_sequence(customer.id);
            table.rows.insert(customer.id, customer);
        }
        Self {
            table: Mutex::new(table),
        }
    }
}

impl Default for InMemoryCustomerRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, RepositoryError> {
        let table = self.table.lock().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn create(&self, draft: CustomerDraft) -> Result<Customer, RepositoryError> {
        let mut table = self.table.lock().await;
        let id = CustomerId::new(table.next_id)
            .map_err(|e| RepositoryError::Unavailable(e.to_string()))?;
        let customer = Customer::from_draft(id, draft);
        table.bump_sequence(id);
        table.rows.insert(id, customer.clone());
        Ok(customer)
    }

    async fn save(&self, customer: Customer) -> Result<Customer, RepositoryError> {
        let mut table = self.table.lock().await;
        table.bump_sequence(customer.id);
        table.rows.insert(customer.id, customer.clone());
        Ok(customer)
    }

    async fn delete_by_id(&self, id: CustomerId) -> Result<(), RepositoryError> {
        let mut table = self.table.lock().await;
        table.rows.remove(&id);
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Customer>, RepositoryError> {
        let table = self.table.lock().await;
        Ok(table.rows.values().cloned().collect())
    }
}
