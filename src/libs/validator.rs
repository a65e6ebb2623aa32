//! Input validation for new tasks.
//!
//! Validation is pure: it trims text fields, checks the gating fields and
//! turns priority/status text into their enumerated values.
//!
//! Two modes exist:
//!
//! - **Lenient** (default): only `title` and `date` must be non-empty.
//!   `time` is trimmed but may be empty, and date/time text is stored as
//!   typed. Lexical order then equals chronological order only when the
//!   user types zero-padded values.
//! - **Strict**: `date` must be a real calendar date (`YYYY-MM-DD`) and
//!   `time` a real clock time (`HH:MM`). Both are rewritten in zero-padded
//!   form, so the stored text always sorts chronologically.

use super::error::{Field, ValidationError};
use super::task::{NewTask, Priority, Status, TaskInput};
use chrono::{NaiveDate, NaiveTime};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validator {
    strict: bool,
}

impl Validator {
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }

    pub fn lenient() -> Self {
        Self::new(false)
    }

    pub fn strict() -> Self {
        Self::new(true)
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn validate(&self, input: &TaskInput) -> Result<NewTask, ValidationError> {
        let title = required(Field::Title, &input.title)?;
        let date = required(Field::Date, &input.date)?;
        let time = input.time.trim().to_string();

        let (date, time) = if self.strict {
            (normalize_date(&date)?, normalize_time(&time)?)
        } else {
            (date, time)
        };

        let priority = input.priority.parse::<Priority>().map_err(|_| ValidationError::Unrecognized {
            field: Field::Priority,
            value: input.priority.clone(),
        })?;
        let status = input.status.parse::<Status>().map_err(|_| ValidationError::Unrecognized {
            field: Field::Status,
            value: input.status.clone(),
        })?;

        Ok(NewTask {
            title,
            description: input.description.trim().to_string(),
            date,
            time,
            priority,
            status,
        })
    }
}

/// Validates with the default (lenient) rules.
pub fn validate(input: &TaskInput) -> Result<NewTask, ValidationError> {
    Validator::lenient().validate(input)
}

fn required(field: Field, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(trimmed.to_string())
}

fn normalize_date(value: &str) -> Result<String, ValidationError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map(|date| date.format(DATE_FORMAT).to_string())
        .map_err(|_| ValidationError::Malformed {
            field: Field::Date,
            value: value.to_string(),
            expected: "YYYY-MM-DD",
        })
}

fn normalize_time(value: &str) -> Result<String, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Required(Field::Time));
    }
    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .map(|time| time.format(TIME_FORMAT).to_string())
        .map_err(|_| ValidationError::Malformed {
            field: Field::Time,
            value: value.to_string(),
            expected: "HH:MM",
        })
}

/// Whether the stored text is already in zero-padded `YYYY-MM-DD` /
/// `HH:MM` form, i.e. sorts chronologically.
pub fn is_canonical(date: &str, time: &str) -> bool {
    normalize_date(date).is_ok_and(|normalized| normalized == date) && normalize_time(time).is_ok_and(|normalized| normalized == time)
}
