//! Subscription - スナップショット購読のハンドル
//!
//! # 設計
//! - 生産者（ストア）は `watch::Sender<Arc<Snapshot>>` に最新スナップショットを置く
//! - 購読者は最初に現在のスナップショットを受け取り、以降は変更ごとに受け取る
//! - 途中のスナップショットは合流されうる（最新のみ届く）が、届くものは常に完全
//! - `unsubscribe()` または drop した時点で登録を解除する（後始末を暗黙にしない）

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;

use crate::domain::{Snapshot, SubscriptionId};

/// 生きている購読の一覧
///
/// Drop から触るので tokio ではなく std の Mutex を使う。
#[derive(Debug, Clone, Default)]
pub struct SubscriptionRegistry {
    active: Arc<Mutex<HashSet<SubscriptionId>>>,
}

impl SubscriptionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 集合は挿入・削除が 1 回で完結するので、poison されても中身は一貫している
    fn active(&self) -> MutexGuard<'_, HashSet<SubscriptionId>> {
        self.active.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn len(&self) -> usize {
        self.active().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, id: &SubscriptionId) -> bool {
        self.active().contains(id)
    }

    fn register(&self, id: SubscriptionId) {
        self.active().insert(id);
    }

    fn release(&self, id: &SubscriptionId) -> bool {
        self.active().remove(id)
    }
}

/// スナップショットの遅延・無限・再開可能な列
///
/// # 使用例
/// ```ignore
/// let mut sub = store.subscribe();
/// while let Some(snapshot) = sub.next().await {
///     let view = engine.view(&snapshot);
///     sink.render(&view);
/// }
/// ```
#[derive(Debug)]
pub struct Subscription {
    id: SubscriptionId,
    collection: String,
    rx: watch::Receiver<Arc<Snapshot>>,
    registry: SubscriptionRegistry,
    primed: bool,
    released: bool,
}

impl Subscription {
    /// 購読を登録して作成（ストア実装から呼ぶ）
    pub fn open(
        id: SubscriptionId,
        collection: impl Into<String>,
        rx: watch::Receiver<Arc<Snapshot>>,
        registry: SubscriptionRegistry,
    ) -> Self {
        let collection = collection.into();
        registry.register(id.clone());
        tracing::debug!(subscription = %id, collection = %collection, "subscription opened");
        Self {
            id,
            collection,
            rx,
            registry,
            primed: false,
            released: false,
        }
    }

    pub fn id(&self) -> &SubscriptionId {
        &self.id
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// 次のスナップショットを待つ
    ///
    /// 初回は現在のスナップショットを即座に返す。生産者がいなくなったら `None`。
    pub async fn next(&mut self) -> Option<Arc<Snapshot>> {
        if self.released {
            return None;
        }
        if !self.primed {
            self.primed = true;
            return Some(self.rx.borrow_and_update().clone());
        }
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }

    /// 明示的に購読を解除
    pub fn unsubscribe(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        if self.registry.release(&self.id) {
            tracing::debug!(
                subscription = %self.id,
                collection = %self.collection,
                "subscription released"
            );
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}
