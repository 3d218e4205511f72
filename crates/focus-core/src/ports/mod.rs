//! Ports - 抽象化レイヤー
//!
//! このモジュールは Hexagonal Architecture の「ポート」を定義します。
//! ドキュメントストア（永続化・同期）と描画側はどちらも外部の協力者で、
//! コアは trait 越しにしか触りません。

pub mod clock;
pub mod id_generator;
pub mod subscription;
pub mod task_store;
pub mod view_sink;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::id_generator::{IdGenerator, UlidGenerator};
pub use self::subscription::{Subscription, SubscriptionRegistry};
pub use self::task_store::{StoreError, TaskStore};
pub use self::view_sink::{CollectingSink, ViewSink};
