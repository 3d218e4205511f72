//! TaskStore port - タスクコレクションの正本（source of truth）
//!
//! 永続化・リアルタイム同期・競合解決はすべてストア側（外部のドキュメントストア）の責務です。
//! コアはこの trait を通して書き込み命令を出し、スナップショットを購読するだけです。
//!
//! # 実装
//! - `impls::InMemoryTaskStore`（開発用・テスト用）

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Snapshot, TaskDraft, TaskId};
use crate::ports::Subscription;

#[derive(Debug, Error)]
pub enum StoreError {
    /// 更新対象のドキュメントが存在しない
    #[error("document not found: {0}")]
    NotFound(TaskId),

    /// 接続断など、ストア側で処理できなかった
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// TaskStore は 1 つのコレクションへの書き込みと購読を提供
///
/// # セマンティクス（ドキュメントストアに合わせる）
/// - `create`: ID と `createdAt` はストアが払い出す
/// - `update`: 編集可能な 4 フィールドのみ上書き。存在しなければ `NotFound`
/// - `delete`: 存在しなくても成功
/// - `subscribe`: 現在のスナップショットから始まる購読
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// コレクション名
    fn collection(&self) -> &str;

    async fn create(&self, draft: TaskDraft) -> Result<TaskId, StoreError>;

    async fn update(&self, id: &TaskId, draft: TaskDraft) -> Result<(), StoreError>;

    async fn delete(&self, id: &TaskId) -> Result<(), StoreError>;

    /// 現在のスナップショットを 1 回だけ取得
    async fn snapshot(&self) -> Result<Arc<Snapshot>, StoreError>;

    fn subscribe(&self) -> Subscription;
}
