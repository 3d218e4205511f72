use serde::{Deserialize, Serialize};

use super::task::Task;

/// A complete, consistent view of one collection at one point in time.
///
/// `revision` increases by one with every committed mutation, so consumers
/// can tell whether two snapshots describe the same state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub revision: u64,
    pub tasks: Vec<Task>,
}

impl Snapshot {
    pub fn new(revision: u64, tasks: Vec<Task>) -> Self {
        Self { revision, tasks }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
