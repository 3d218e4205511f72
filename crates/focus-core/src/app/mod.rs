//! App - ストア・ランキング・描画をつなぐアプリケーション層
//!
//! - commands: フォーム保存・削除（UI → ストア）
//! - focus_loop: スナップショット購読 → ランキング → 描画（ストア → UI）

pub mod commands;
pub mod focus_loop;

pub use self::commands::{delete_task, save_form};
pub use self::focus_loop::{FocusLoopReport, FocusPipeline, run_focus_loop};
