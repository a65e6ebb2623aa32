pub mod add;
pub mod complete;
pub mod delete;
pub mod init;
pub mod list;

use crate::db::{db::Db, tasks::Tasks};
use crate::libs::config::Config;
use crate::libs::error::{TaskError, ValidationError};
use crate::libs::messages::Message;
use crate::libs::task::TaskRecord;
use crate::{msg_debug, msg_error, msg_error_anyhow};
use anyhow::Result;
use clap::{Parser, Subcommand};
use dialoguer::{theme::ColorfulTheme, Select};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure form defaults")]
    Init(init::InitArgs),
    #[command(about = "Add a task")]
    Add(add::AddArgs),
    #[command(about = "Show all tasks ordered by date and time")]
    List(list::ListArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
    #[command(about = "Mark a task as completed")]
    Complete(complete::CompleteArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Complete(args) => complete::cmd(args),
        }
    }
}

/// Opens the store configured for this run. The returned store owns the
/// connection until the command finishes.
fn open_store(config: &Config) -> Result<Tasks> {
    let path = config.database_path()?;
    msg_debug!(Message::DatabaseOpened(path.display().to_string()));
    let db = Db::open(&path).map_err(TaskError::from)?;

    Ok(Tasks::new(db)?)
}

/// Turns a failed task operation into user feedback.
///
/// Recoverable errors are shown and the command ends normally; database
/// errors are passed up so the process exits with a failure status.
fn report(error: TaskError) -> Result<()> {
    match error {
        TaskError::Validation(ValidationError::Required(field)) => msg_error!(Message::FieldRequired(field)),
        TaskError::Validation(e) => msg_error!(Message::FieldInvalid(e.to_string())),
        TaskError::NoSelection => msg_error!(Message::NoTaskSelected),
        TaskError::NotFound(id) => msg_error!(Message::TaskNotFound(id)),
        TaskError::Persistence(e) => return Err(msg_error_anyhow!(Message::DatabaseError(e.to_string()))),
    }
    Ok(())
}

/// True when no id was given and there is nothing to pick from, in which
/// case the command stops after telling the user the list is empty.
fn nothing_to_select(tasks: &[TaskRecord], id: Option<i64>) -> bool {
    id.is_none() && tasks.is_empty()
}

/// Lets the user pick a task from the list. `None` when the list is empty
/// or the prompt is dismissed.
fn select_task(tasks: &[TaskRecord], prompt: Message) -> Result<Option<i64>> {
    if tasks.is_empty() {
        return Ok(None);
    }

    let labels: Vec<String> = tasks.iter().map(TaskRecord::label).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .items(&labels)
        .default(0)
        .interact_opt()?;

    Ok(selection.and_then(|index| tasks.get(index)).map(|task| task.id))
}

#[cfg(test)]
mod tests {
    use super::nothing_to_select;
    use crate::libs::task::{Priority, Status, TaskRecord};

    fn record(id: i64) -> TaskRecord {
        TaskRecord {
            id,
            title: "Gym".to_string(),
            description: String::new(),
            date: "2024-05-01".to_string(),
            time: "07:00".to_string(),
            priority: Priority::Low,
            status: Status::Pending,
        }
    }

    #[test]
    fn test_empty_list_without_id_stops_early() {
        assert!(nothing_to_select(&[], None));
    }

    #[test]
    fn test_explicit_id_or_existing_tasks_continue() {
        assert!(!nothing_to_select(&[], Some(3)));
        assert!(!nothing_to_select(&[record(1)], None));
    }
}
