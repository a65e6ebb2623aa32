use super::task::TaskRecord;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[TaskRecord]) -> Result<()> {
        Self::task_table(tasks).printstd();

        Ok(())
    }

    /// Header row plus one row per task, in the given order.
    pub fn task_table(tasks: &[TaskRecord]) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "DATE", "TIME", "PRIORITY", "STATUS"]);
        for task in tasks {
            table.add_row(row![task.id, task.title, task.date, task.time, task.priority, task.status]);
        }

        table
    }

    pub fn tasks_json(tasks: &[TaskRecord]) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(tasks)?);

        Ok(())
    }
}
