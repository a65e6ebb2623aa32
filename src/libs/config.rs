//! Configuration for the dayplan application.
//!
//! Settings live in `config.json` in the per-user data directory:
//!
//! - **Windows**: `%LOCALAPPDATA%\dayplan\config.json`
//! - **macOS**: `~/Library/Application Support/dayplan/config.json`
//! - **Linux**: `~/.local/share/dayplan/config.json`
//!
//! A missing file is not an error; every field has a default. The
//! database location can be overridden with the `DAYPLAN_DB` environment
//! variable (also picked up from a `.env` file).
//!
//! ```rust,no_run
//! use dayplan::libs::config::Config;
//!
//! let mut config = Config::read()?;
//! config.strict_dates = true;
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::messages::Message;
use super::task::{Priority, Status};
use super::validator::{Validator, TIME_FORMAT};
use crate::db::db::DB_FILE_NAME;
use anyhow::Result;
use chrono::NaiveTime;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable overriding the database path.
pub const DB_PATH_ENV: &str = "DAYPLAN_DB";

/// Values pre-filled in the task form.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TaskDefaults {
    /// Time offered when none is given, `HH:MM`.
    pub time: String,
    pub priority: Priority,
    pub status: Status,
}

impl Default for TaskDefaults {
    fn default() -> Self {
        TaskDefaults {
            time: "09:00".to_string(),
            priority: Priority::Low,
            status: Status::Pending,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Database file; defaults to `tasks.db` next to the configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<PathBuf>,

    #[serde(default)]
    pub defaults: TaskDefaults,

    /// Require real calendar dates and clock times and store them
    /// zero-padded.
    #[serde(default)]
    pub strict_dates: bool,
}

impl Config {
    /// Reads the configuration from the data directory, falling back to
    /// defaults when no file exists.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns whether a file was removed.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// Database path: `DAYPLAN_DB`, then the configured path, then the
    /// default file in the data directory.
    pub fn database_path(&self) -> Result<PathBuf> {
        if let Ok(path) = env::var(DB_PATH_ENV) {
            if !path.trim().is_empty() {
                return Ok(PathBuf::from(path));
            }
        }
        match &self.database {
            Some(path) => Ok(path.clone()),
            None => DataStorage::new().get_path(DB_FILE_NAME),
        }
    }

    pub fn validator(&self) -> Validator {
        Validator::new(self.strict_dates)
    }

    /// Interactive wizard for the form defaults, starting from the
    /// currently saved values.
    pub fn init() -> Result<Config> {
        let mut config = Config::read()?;
        let theme = ColorfulTheme::default();

        config.defaults.time = Input::with_theme(&theme)
            .with_prompt(Message::PromptDefaultTime.to_string())
            .default(config.defaults.time.clone())
            .validate_with(|input: &String| -> Result<(), String> {
                NaiveTime::parse_from_str(input.trim(), TIME_FORMAT)
                    .map(|_| ())
                    .map_err(|_| Message::InvalidTimeFormat.to_string())
            })
            .interact_text()?;

        let priorities: Vec<&str> = Priority::ALL.iter().map(Priority::as_str).collect();
        let selected = Select::with_theme(&theme)
            .with_prompt(Message::PromptDefaultPriority.to_string())
            .items(&priorities)
            .default(Priority::ALL.iter().position(|p| *p == config.defaults.priority).unwrap_or(0))
            .interact()?;
        config.defaults.priority = Priority::ALL.get(selected).copied().unwrap_or(Priority::Low);

        let statuses: Vec<&str> = Status::ALL.iter().map(Status::as_str).collect();
        let selected = Select::with_theme(&theme)
            .with_prompt(Message::PromptDefaultStatus.to_string())
            .items(&statuses)
            .default(Status::ALL.iter().position(|s| *s == config.defaults.status).unwrap_or(0))
            .interact()?;
        config.defaults.status = Status::ALL.get(selected).copied().unwrap_or(Status::Pending);

        config.strict_dates = Confirm::with_theme(&theme)
            .with_prompt(Message::PromptStrictDates.to_string())
            .default(config.strict_dates)
            .interact()?;

        Ok(config)
    }
}
