//! Impls - ports の実装（開発用・テスト用）
//!
//! # 含まれる実装
//! - **InMemoryTaskStore**: 1 コレクション分のインメモリストア
//!
//! 本番のドキュメントストアへのアダプタはこのクレートの外に置きます。

pub mod inmem_store;

pub use self::inmem_store::InMemoryTaskStore;
