use crate::libs::error::Field;

#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(i64),
    TaskDeleted(i64),
    TaskCompleted(i64),
    TaskNotFound(i64),
    TasksHeader,
    NoTasksFound,
    ConfirmDeleteTask(String),
    SelectTaskToDelete,
    SelectTaskToComplete,
    NoTaskSelected,
    UnsortableTasks(usize),

    // === FORM MESSAGES ===
    PromptTitle,
    PromptDescription,
    PromptDate,
    PromptTime,
    PromptPriority,
    PromptStatus,
    FieldRequired(Field),
    FieldInvalid(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    PromptDefaultTime,
    PromptDefaultPriority,
    PromptDefaultStatus,
    PromptStrictDates,
    InvalidTimeFormat,

    // === DATABASE MESSAGES ===
    DatabaseOpened(String),
    DatabaseError(String),

    // === GENERAL MESSAGES ===
    OperationCancelled,
}
