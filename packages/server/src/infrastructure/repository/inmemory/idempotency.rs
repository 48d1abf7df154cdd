//! InMemory IdempotencyStore 実装
//!
//! 冪等キーごとに `OnceCell` のスロットを一つだけ払い出します。
//! スロットの作成は Mutex 下で行うため、同じキーに対して二つのスロットが
//! 生まれることはありません。書き込みに失敗したキーの空スロットは
//! `release` で取り除かれ、マップには記録済みのキーだけが残ります。

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::{Mutex, OnceCell};

use crate::domain::{IdempotencyKey, IdempotencyRecord, IdempotencyStore};

/// インメモリ IdempotencyStore 実装
///
/// 記録は削除されません（期限切れなし）。
#[derive(Debug, Default)]
pub struct InMemoryIdempotencyStore {
    slots: Mutex<HashMap<IdempotencyKey, Arc<OnceCell<IdempotencyRecord>>>>,
}

impl InMemoryIdempotencyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 記録済み（スロットが初期化済み）のキー数
    pub async fn recorded_count(&self) -> usize {
        let slots = self.slots.lock().await;
        slots.values().filter(|slot| slot.initialized()).count()
    }

    /// マップに残っているスロット数（空のスロットを含む）
    pub async fn slot_count(&self) -> usize {
        self.slots.lock().await.len()
    }
}

#[async_trait]
impl IdempotencyStore for InMemoryIdempotencyStore {
    async fn slot(&self, key: &IdempotencyKey) -> Arc<OnceCell<IdempotencyRecord>> {
        let mut slots = self.slots.lock().await;
        slots
            .entry(key.clone())
            .or_insert_with(|| Arc::new(OnceCell::new()))
            .clone()
    }

    async fn get(&self, key: &IdempotencyKey) -> Option<IdempotencyRecord> {
        let slots = self.slots.lock().await;
        slots.get(key).and_then(|slot| slot.get().cloned())
    }

    async fn release(&self, key: &IdempotencyKey) {
        let mut slots = self.slots.lock().await;
        // スロットの複製は slot() 経由でロック下でのみ作られる
        let unheld_and_empty = slots
            .get(key)
            .is_some_and(|slot| !slot.initialized() && Arc::strong_count(slot) == 1);
        if unheld_and_empty {
            slots.remove(key);
        }
    }
}
