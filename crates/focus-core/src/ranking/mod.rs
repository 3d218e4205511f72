//! Ranking - 優先度順の並べ替えとフォーカスセットの選択
//!
//! # ルール
//! - 重み `High: 3, Medium: 2, Low: 1`、未知の値は 0（Low より下）で降順に並べる
//! - 同じ重み同士は入力順を保つ（安定ソート）。二次キーはない
//! - フォーカスセットは全体ランキングの先頭 `limit` 件
//! - どちらも入力を変更せず新しい `Vec` を返す純粋関数

mod engine;
mod limit;

pub use engine::{RankedView, RankingEngine};
pub use limit::FocusLimit;

use std::cmp::Reverse;
use std::sync::Arc;

use crate::domain::{Importance, Task};

/// ランキング対象になれる型
pub trait Prioritized {
    fn importance(&self) -> Importance;

    fn weight(&self) -> u8 {
        self.importance().weight()
    }
}

impl Prioritized for Task {
    fn importance(&self) -> Importance {
        self.importance
    }
}

impl Prioritized for Importance {
    fn importance(&self) -> Importance {
        *self
    }
}

impl<T: Prioritized + ?Sized> Prioritized for &T {
    fn importance(&self) -> Importance {
        (**self).importance()
    }
}

impl<T: Prioritized + ?Sized> Prioritized for Arc<T> {
    fn importance(&self) -> Importance {
        (**self).importance()
    }
}

/// 入力のインデックスをランキング順に並べる。`sort_by_key` は安定ソート。
fn ranked_order<T: Prioritized>(items: &[T]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by_key(|&i| Reverse(items[i].weight()));
    order
}

/// Stable sort by descending importance weight.
pub fn rank_by_priority<T: Prioritized + Clone>(items: &[T]) -> Vec<T> {
    ranked_order(items)
        .into_iter()
        .map(|i| items[i].clone())
        .collect()
}

/// The first `limit` items of [`rank_by_priority`]. Only those are cloned.
pub fn select_focus_set<T: Prioritized + Clone>(items: &[T], limit: FocusLimit) -> Vec<T> {
    ranked_order(items)
        .into_iter()
        .take(limit.get())
        .map(|i| items[i].clone())
        .collect()
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::domain::{Importance, Task, TaskContext, TaskId};

    pub fn task(id: &str, importance: Importance) -> Task {
        Task {
            id: TaskId::new(id),
            title: format!("task {id}"),
            importance,
            context: TaskContext::General,
            is_habit: false,
            streak: Some(0),
            created_at: None,
        }
    }

    pub fn ids(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.id.as_str()).collect()
    }
}
