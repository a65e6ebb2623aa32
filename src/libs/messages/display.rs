use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let s = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Task #{} added", id),
            Message::TaskDeleted(id) => format!("Task #{} deleted", id),
            Message::TaskCompleted(id) => format!("Task #{} marked as Completed", id),
            Message::TaskNotFound(id) => format!("Task #{} no longer exists. Refresh the list and try again", id),
            Message::TasksHeader => "Tasks:".to_string(),
            Message::NoTasksFound => "No tasks yet".to_string(),
            Message::ConfirmDeleteTask(label) => format!("Delete task {}?", label),
            Message::SelectTaskToDelete => "Select a task to delete".to_string(),
            Message::SelectTaskToComplete => "Select a task to complete".to_string(),
            Message::NoTaskSelected => "Please select a task first".to_string(),
            Message::UnsortableTasks(count) => format!(
                "{} task(s) have a date or time outside YYYY-MM-DD / HH:MM form and may be listed out of order",
                count
            ),

            // === FORM MESSAGES ===
            Message::PromptTitle => "Title".to_string(),
            Message::PromptDescription => "Description".to_string(),
            Message::PromptDate => "Date (YYYY-MM-DD)".to_string(),
            Message::PromptTime => "Time (HH:MM)".to_string(),
            Message::PromptPriority => "Priority".to_string(),
            Message::PromptStatus => "Status".to_string(),
            Message::FieldRequired(field) => format!("The {} field is required", field),
            Message::FieldInvalid(details) => format!("Invalid input: {}", details),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigNotFound => "No configuration file to remove".to_string(),
            Message::PromptDefaultTime => "Default time (HH:MM)".to_string(),
            Message::PromptDefaultPriority => "Default priority".to_string(),
            Message::PromptDefaultStatus => "Default status".to_string(),
            Message::PromptStrictDates => "Require real calendar dates and clock times?".to_string(),
            Message::InvalidTimeFormat => "Expected a time in HH:MM form".to_string(),

            // === DATABASE MESSAGES ===
            Message::DatabaseOpened(path) => format!("Using database {}", path),
            Message::DatabaseError(details) => format!("Database error: {}", details),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };
        write!(f, "{}", s)
    }
}
