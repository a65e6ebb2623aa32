//! In-memory view of the task table.
//!
//! The list is never patched: every refresh replaces the whole snapshot
//! with a fresh ordered read of the store. A failed read leaves the
//! previous snapshot in place.

use super::error::TaskResult;
use super::task::TaskRecord;
use crate::db::tasks::Tasks;
use tracing::debug;

#[derive(Debug, Default)]
pub struct TaskList {
    snapshot: Vec<TaskRecord>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refresh(&mut self, store: &Tasks) -> TaskResult<&[TaskRecord]> {
        let fresh = store.list_all_ordered()?;
        debug!(count = fresh.len(), "task list refreshed");
        self.snapshot = fresh;

        Ok(&self.snapshot)
    }

    /// Last successfully read snapshot.
    pub fn snapshot(&self) -> &[TaskRecord] {
        &self.snapshot
    }
}
