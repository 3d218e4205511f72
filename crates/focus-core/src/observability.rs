use serde::{Deserialize, Serialize};

use crate::domain::{Importance, Snapshot, Task};

/// Per-importance breakdown of one snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCounts {
    pub total: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub unknown: usize,
    pub habits: usize,
}

impl TaskCounts {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let mut counts = TaskCounts::default();
        for task in tasks {
            counts.total += 1;
            match task.importance {
                Importance::High => counts.high += 1,
                Importance::Medium => counts.medium += 1,
                Importance::Low => counts.low += 1,
                Importance::Unknown => counts.unknown += 1,
            }
            if task.is_habit {
                counts.habits += 1;
            }
        }
        counts
    }
}

impl From<&Snapshot> for TaskCounts {
    fn from(snapshot: &Snapshot) -> Self {
        Self::from_tasks(&snapshot.tasks)
    }
}
