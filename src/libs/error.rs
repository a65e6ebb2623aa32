//! Error taxonomy for task operations.
//!
//! Every failure is returned to the caller as a value; none of them is
//! fatal to the process. Store failures are never retried.

use std::fmt::{self, Display, Formatter};
use thiserror::Error;

/// Task field a validation failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Date,
    Time,
    Priority,
    Status,
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Title => "title",
            Field::Date => "date",
            Field::Time => "time",
            Field::Priority => "priority",
            Field::Status => "status",
        })
    }
}

/// Bad or missing user input. Nothing is written when this is returned.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(Field),

    #[error("{field} '{value}' does not match {expected}")]
    Malformed { field: Field, value: String, expected: &'static str },

    #[error("{field} '{value}' is not one of the allowed values")]
    Unrecognized { field: Field, value: String },
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::Required(field) => *field,
            ValidationError::Malformed { field, .. } => *field,
            ValidationError::Unrecognized { field, .. } => *field,
        }
    }
}

#[derive(Debug, Error)]
pub enum TaskError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The action needs a selected task and none was given.
    #[error("no task selected")]
    NoSelection,

    /// The target id does not exist (anymore).
    #[error("task #{0} not found")]
    NotFound(i64),

    /// The store could not complete the operation, including busy/locked
    /// databases and rows that fail to decode.
    #[error("database error: {0}")]
    Persistence(#[from] rusqlite::Error),
}

pub type TaskResult<T> = Result<T, TaskError>;
