use super::db::Db;
use crate::libs::error::{TaskError, TaskResult};
use crate::libs::task::{NewTask, Status, TaskRecord};
use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::debug;

// AUTOINCREMENT keeps ids unique across deleted rows as well.
const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT,
    date TEXT NOT NULL,
    time TEXT NOT NULL,
    priority TEXT NOT NULL,
    status TEXT NOT NULL
);";
const INDEX_TASKS_SCHEDULE: &str = "CREATE INDEX IF NOT EXISTS idx_tasks_schedule ON tasks(date, time)";
const INSERT_TASK: &str = "INSERT INTO tasks (title, description, date, time, priority, status) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_TASKS: &str = "SELECT id, title, description, date, time, priority, status FROM tasks";
const ORDER_BY_SCHEDULE: &str = "ORDER BY date, time, id";
const WHERE_ID: &str = "WHERE id = ?1";
const UPDATE_STATUS: &str = "UPDATE tasks SET status = ?2 WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const COUNT_TASKS: &str = "SELECT COUNT(*) FROM tasks";

/// Durable table of task records.
///
/// Only `status` can change after creation; every other column is written
/// once by [`Tasks::create`].
pub struct Tasks {
    pub conn: Connection,
}

impl Tasks {
    /// Takes over the connection of `db` and makes sure the schema exists.
    pub fn new(db: Db) -> TaskResult<Tasks> {
        let tasks = Tasks { conn: db.conn };
        tasks.initialize()?;

        Ok(tasks)
    }

    /// Creates the table and its index if absent. Existing rows are left
    /// untouched, so this is safe to run on every start.
    pub fn initialize(&self) -> TaskResult<()> {
        self.conn.execute(SCHEMA_TASKS, [])?;
        self.conn.execute(INDEX_TASKS_SCHEDULE, [])?;

        Ok(())
    }

    pub fn create(&mut self, task: &NewTask) -> TaskResult<i64> {
        self.conn.execute(
            INSERT_TASK,
            params![task.title, task.description, task.date, task.time, task.priority, task.status],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!(id, title = %task.title, "task created");

        Ok(id)
    }

    /// All tasks ordered by date, then time (text order on the stored form).
    pub fn list_all_ordered(&self) -> TaskResult<Vec<TaskRecord>> {
        let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_TASKS, ORDER_BY_SCHEDULE))?;
        let task_iter = stmt.query_map([], Self::map_row)?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }

        Ok(tasks)
    }

    pub fn get(&self, id: i64) -> TaskResult<Option<TaskRecord>> {
        let task = self
            .conn
            .query_row(&format!("{} {}", SELECT_TASKS, WHERE_ID), params![id], Self::map_row)
            .optional()?;

        Ok(task)
    }

    pub fn count(&self) -> TaskResult<usize> {
        let count: i64 = self.conn.query_row(COUNT_TASKS, [], |row| row.get(0))?;

        Ok(usize::try_from(count).unwrap_or_default())
    }

    /// Sets the status of one task. Re-applying the current status succeeds.
    pub fn update_status(&mut self, id: i64, status: Status) -> TaskResult<()> {
        let affected = self.conn.execute(UPDATE_STATUS, params![id, status])?;
        if affected == 0 {
            return Err(TaskError::NotFound(id));
        }
        debug!(id, %status, "task status updated");

        Ok(())
    }

    pub fn delete(&mut self, id: i64) -> TaskResult<()> {
        let affected = self.conn.execute(DELETE_TASK, params![id])?;
        if affected == 0 {
            return Err(TaskError::NotFound(id));
        }
        debug!(id, "task deleted");

        Ok(())
    }

    fn map_row(row: &Row<'_>) -> rusqlite::Result<TaskRecord> {
        Ok(TaskRecord {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
            date: row.get(3)?,
            time: row.get(4)?,
            priority: row.get(5)?,
            status: row.get(6)?,
        })
    }
}
