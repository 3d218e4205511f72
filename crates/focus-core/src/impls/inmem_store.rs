//! InMemoryTaskStore - 開発用・テスト用のタスクコレクション
//!
//! # 実装詳細
//! - 状態は `tokio::sync::Mutex` で保護（書き込みは直列化される）
//! - 書き込みが確定するたびに新しい `Snapshot` を作り、`watch` で全購読者に配る
//! - 挿入順を保持する（ランキングの安定性テストで入力順が意味を持つため）

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, watch};

use crate::domain::{Snapshot, Task, TaskDraft, TaskId};
use crate::ports::{
    Clock, IdGenerator, StoreError, Subscription, SubscriptionRegistry, SystemClock, TaskStore,
    UlidGenerator,
};

struct InMemoryStoreState {
    /// 挿入順
    tasks: Vec<Task>,
    revision: u64,
}

impl InMemoryStoreState {
    fn position(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| &t.id == id)
    }

    fn snapshot(&self) -> Arc<Snapshot> {
        Arc::new(Snapshot::new(self.revision, self.tasks.clone()))
    }
}

/// In-memory implementation of [`TaskStore`] for one collection.
pub struct InMemoryTaskStore {
    collection: String,
    state: Mutex<InMemoryStoreState>,
    publisher: watch::Sender<Arc<Snapshot>>,
    subscriptions: SubscriptionRegistry,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

impl InMemoryTaskStore {
    pub fn new(collection: impl Into<String>) -> Self {
        Self::with_parts(
            collection,
            Arc::new(SystemClock),
            Arc::new(UlidGenerator::new(SystemClock)),
        )
    }

    pub fn with_parts(
        collection: impl Into<String>,
        clock: Arc<dyn Clock>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        let (publisher, _) = watch::channel(Arc::new(Snapshot::default()));
        Self {
            collection: collection.into(),
            state: Mutex::new(InMemoryStoreState {
                tasks: Vec::new(),
                revision: 0,
            }),
            publisher,
            subscriptions: SubscriptionRegistry::new(),
            clock,
            ids,
        }
    }

    /// 既存ドキュメントを流し込んで作る（ID や createdAt はそのまま）
    pub fn seeded(collection: impl Into<String>, tasks: Vec<Task>) -> Self {
        let mut store = Self::new(collection);
        let state = store.state.get_mut();
        state.tasks = tasks;
        let snapshot = state.snapshot();
        store.publisher.send_replace(snapshot);
        store
    }

    /// 現在生きている購読の数
    pub fn active_subscriptions(&self) -> usize {
        self.subscriptions.len()
    }

    /// ロックを持ったまま呼ぶ。確定した状態を配信する。
    fn publish(&self, state: &mut InMemoryStoreState) {
        state.revision += 1;
        let snapshot = state.snapshot();
        tracing::debug!(
            collection = %self.collection,
            revision = snapshot.revision,
            tasks = snapshot.len(),
            subscribers = self.subscriptions.len(),
            "snapshot published"
        );
        // 購読者がいなくても値は保持される
        self.publisher.send_replace(snapshot);
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    fn collection(&self) -> &str {
        &self.collection
    }

    async fn create(&self, draft: TaskDraft) -> Result<TaskId, StoreError> {
        let id = self.ids.generate_task_id();
        let task = draft.into_task(id.clone(), self.clock.now());

        let mut state = self.state.lock().await;
        tracing::info!(
            collection = %self.collection,
            task_id = %id,
            importance = %task.importance,
            is_habit = task.is_habit,
            "task created"
        );
        state.tasks.push(task);
        self.publish(&mut state);
        Ok(id)
    }

    async fn update(&self, id: &TaskId, draft: TaskDraft) -> Result<(), StoreError> {
        let mut state = self.state.lock().await;
        let Some(index) = state.position(id) else {
            return Err(StoreError::NotFound(id.clone()));
        };
        draft.apply_to(&mut state.tasks[index]);
        tracing::info!(collection = %self.collection, task_id = %id, "task updated");
        self.publish(&mut state);
        Ok(())
    }

    async fn delete(&self, id: &TaskId) -> Result<(), StoreError> {
        let mut state = self.state.lock().await;
        let Some(index) = state.position(id) else {
            tracing::debug!(
                collection = %self.collection,
                task_id = %id,
                "delete of missing task ignored"
            );
            return Ok(());
        };
        state.tasks.remove(index);
        tracing::info!(collection = %self.collection, task_id = %id, "task deleted");
        self.publish(&mut state);
        Ok(())
    }

    async fn snapshot(&self) -> Result<Arc<Snapshot>, StoreError> {
        let state = self.state.lock().await;
        Ok(state.snapshot())
    }

    fn subscribe(&self) -> Subscription {
        Subscription::open(
            self.ids.generate_subscription_id(),
            self.collection.clone(),
            self.publisher.subscribe(),
            self.subscriptions.clone(),
        )
    }
}
