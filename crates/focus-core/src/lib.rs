//! focus-core
//!
//! Priority ranking and focus-set selection for a snapshot-synced to-do list.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, importance, context, task, snapshot, errors）
//! - **ranking**: 優先度ランキングとフォーカスセット（純粋関数 + RankingEngine）
//! - **ports**: 抽象化レイヤー（TaskStore, Subscription, ViewSink, Clock, IdGenerator）
//! - **impls**: 実装（InMemoryTaskStore など開発用）
//! - **form**: フォーム状態と reducer
//! - **app**: 保存・削除コマンドと focus loop
//! - **config**: figment による設定読み込み
//! - **observability**: スナップショットの集計ビュー

pub mod app;
pub mod config;
pub mod domain;
pub mod form;
pub mod impls;
pub mod observability;
pub mod ports;
pub mod ranking;

pub use domain::{FocusError, Importance, Snapshot, Task, TaskContext, TaskDraft, TaskId};
pub use ranking::{FocusLimit, RankedView, RankingEngine, rank_by_priority, select_focus_set};
