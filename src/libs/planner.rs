//! Command facade for the three user actions.
//!
//! Each action is a fixed pipeline: validate (add only), mutate the
//! store, then refresh the task list. The list is refreshed only after
//! the store reports success, so a failed action leaves the visible list
//! at the last good read.
//!
//! ```rust,no_run
//! use dayplan::db::{db::Db, tasks::Tasks};
//! use dayplan::libs::{planner::Planner, task::TaskInput, validator::Validator};
//!
//! let mut store = Tasks::new(Db::new()?)?;
//! let mut planner = Planner::new(&mut store, Validator::lenient());
//! let id = planner.add_task(&TaskInput::new("Standup", "", "2024-05-01", "09:00", "High", "Pending"))?;
//! planner.complete_task(Some(id))?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::error::{TaskError, TaskResult};
use super::task::{Status, TaskInput, TaskRecord};
use super::task_list::TaskList;
use super::validator::Validator;
use crate::db::tasks::Tasks;
use tracing::{debug, warn};

pub struct Planner<'a> {
    store: &'a mut Tasks,
    list: TaskList,
    validator: Validator,
}

impl<'a> Planner<'a> {
    pub fn new(store: &'a mut Tasks, validator: Validator) -> Self {
        Self {
            store,
            list: TaskList::new(),
            validator,
        }
    }

    /// Ensures the schema exists and loads the first snapshot.
    pub fn initialize(&mut self) -> TaskResult<&[TaskRecord]> {
        self.store.initialize()?;
        self.list.refresh(self.store)
    }

    /// Validates and stores a new task, returning its id.
    ///
    /// If the insert succeeds but the refresh fails, the error is returned
    /// even though the row is already stored; the list keeps its previous
    /// snapshot until the next successful refresh.
    pub fn add_task(&mut self, input: &TaskInput) -> TaskResult<i64> {
        let task = self.validator.validate(input).inspect_err(|e| warn!(field = %e.field(), "task rejected: {e}"))?;
        let id = self.store.create(&task)?;
        self.list
            .refresh(self.store)
            .inspect_err(|e| warn!(id, "task stored but list refresh failed: {e}"))?;
        debug!(id, "add_task completed");

        Ok(id)
    }

    /// Deletes the selected task. Confirmation is the caller's job and must
    /// happen before this is called.
    pub fn delete_task(&mut self, selected: Option<i64>) -> TaskResult<()> {
        let id = selected.ok_or(TaskError::NoSelection)?;
        self.store.delete(id)?;
        self.list.refresh(self.store)?;
        debug!(id, "delete_task completed");

        Ok(())
    }

    /// Marks the selected task as completed. Completing a completed task is
    /// a successful no-op.
    pub fn complete_task(&mut self, selected: Option<i64>) -> TaskResult<()> {
        let id = selected.ok_or(TaskError::NoSelection)?;
        self.store.update_status(id, Status::Completed)?;
        self.list.refresh(self.store)?;
        debug!(id, "complete_task completed");

        Ok(())
    }

    pub fn refresh(&mut self) -> TaskResult<&[TaskRecord]> {
        self.list.refresh(self.store)
    }

    /// Current view of the store, as of the last successful refresh.
    pub fn tasks(&self) -> &[TaskRecord] {
        self.list.snapshot()
    }
}
