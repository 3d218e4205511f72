use serde::Serialize;

use super::{FocusLimit, rank_by_priority};
use crate::domain::{Snapshot, Task};

/// What the renderer receives for one snapshot: every task in rank order
/// plus the focus shortlist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedView {
    pub revision: u64,
    pub ranked: Vec<Task>,
    pub focus: Vec<Task>,
}

/// Stateless apart from its configured focus limit. Re-run in full on every
/// snapshot; nothing is carried over between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct RankingEngine {
    focus_limit: FocusLimit,
}

impl RankingEngine {
    pub fn new(focus_limit: FocusLimit) -> Self {
        Self { focus_limit }
    }

    pub fn focus_limit(&self) -> FocusLimit {
        self.focus_limit
    }

    pub fn rank(&self, tasks: &[Task]) -> Vec<Task> {
        rank_by_priority(tasks)
    }

    pub fn focus(&self, tasks: &[Task]) -> Vec<Task> {
        super::select_focus_set(tasks, self.focus_limit)
    }

    /// The focus list is cut from the same ranking, so the two never disagree.
    pub fn view(&self, snapshot: &Snapshot) -> RankedView {
        let ranked = rank_by_priority(&snapshot.tasks);
        let focus = ranked
            .iter()
            .take(self.focus_limit.get())
            .cloned()
            .collect();
        RankedView {
            revision: snapshot.revision,
            ranked,
            focus,
        }
    }
}
