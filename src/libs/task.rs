//! Task record and its enumerated fields.
//!
//! A task moves through three shapes on its way into the store:
//!
//! - [`TaskInput`]: raw text as collected by the form or command line
//! - [`NewTask`]: validated, trimmed fields without an id
//! - [`TaskRecord`]: a persisted row, id assigned by the store
//!
//! `Priority` and `Status` are stored as their canonical English names
//! and decoded through `FromSql`, so a row can never carry free text in
//! those columns.

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// Error returned when text does not name a known priority or status.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unrecognized value: '{0}'")]
pub struct ParseValueError(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl FromStr for Priority {
    type Err = ParseValueError;

    /// Accepts the canonical names and the Spanish labels used by older
    /// databases, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" | "alta" => Ok(Priority::High),
            "medium" | "media" => Ok(Priority::Medium),
            "low" | "baja" => Ok(Priority::Low),
            _ => Err(ParseValueError(s.to_string())),
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Pending,
    InProgress,
    Completed,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Pending, Status::InProgress, Status::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::InProgress => "InProgress",
            Status::Completed => "Completed",
        }
    }
}

impl FromStr for Status {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s.trim().to_lowercase().split_whitespace().collect::<Vec<_>>().join(" ");
        match normalized.as_str() {
            "pending" | "pendiente" => Ok(Status::Pending),
            "inprogress" | "in progress" | "in_progress" | "en progreso" => Ok(Status::InProgress),
            "completed" | "completado" => Ok(Status::Completed),
            _ => Err(ParseValueError(s.to_string())),
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Both enums share the same column encoding: canonical name as TEXT.
macro_rules! sql_text_enum {
    ($ty:ty) => {
        impl ToSql for $ty {
            fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
                Ok(ToSqlOutput::from(self.as_str()))
            }
        }

        impl FromSql for $ty {
            fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
                value.as_str()?.parse().map_err(|e: ParseValueError| FromSqlError::Other(Box::new(e)))
            }
        }
    };
}

sql_text_enum!(Priority);
sql_text_enum!(Status);

/// Raw, unvalidated task fields as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskInput {
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub priority: String,
    pub status: String,
}

impl TaskInput {
    pub fn new(title: &str, description: &str, date: &str, time: &str, priority: &str, status: &str) -> Self {
        TaskInput {
            title: title.to_string(),
            description: description.to_string(),
            date: date.to_string(),
            time: time.to_string(),
            priority: priority.to_string(),
            status: status.to_string(),
        }
    }
}

/// A validated task that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub priority: Priority,
    pub status: Status,
}

/// A task as persisted in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRecord {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub priority: Priority,
    pub status: Status,
}

impl TaskRecord {
    /// Short one-line label used in selection prompts.
    pub fn label(&self) -> String {
        format!("#{} {} {} {} [{}]", self.id, self.date, self.time, self.title, self.status)
    }

    /// Compares every field except the store-assigned id.
    pub fn matches(&self, task: &NewTask) -> bool {
        self.title == task.title
            && self.description == task.description
            && self.date == task.date
            && self.time == task.time
            && self.priority == task.priority
            && self.status == task.status
    }
}
