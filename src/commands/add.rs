//! Task entry.
//!
//! With `--title` the task is built from the flags, missing fields taking
//! the configured defaults. Without it an interactive form asks for every
//! field with the same defaults pre-filled.

use super::{open_store, report};
use crate::{
    libs::{
        config::Config,
        messages::Message,
        planner::Planner,
        task::{Priority, Status, TaskInput},
        validator::DATE_FORMAT,
        view::View,
    },
    msg_print, msg_success,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title; when omitted the interactive form is shown
    #[arg(short, long)]
    title: Option<String>,
    #[arg(short, long)]
    description: Option<String>,
    /// Date in YYYY-MM-DD form (defaults to today)
    #[arg(long)]
    date: Option<String>,
    /// Time in HH:MM form
    #[arg(long)]
    time: Option<String>,
    /// High, Medium or Low
    #[arg(short, long)]
    priority: Option<String>,
    /// Pending, InProgress or Completed
    #[arg(short, long)]
    status: Option<String>,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let config = Config::read()?;

    let input = match args.title.clone() {
        Some(title) => from_args(title, args, &config),
        None => form(&config)?,
    };

    let mut store = open_store(&config)?;
    let mut planner = Planner::new(&mut store, config.validator());
    if let Err(e) = planner.initialize() {
        return report(e);
    }

    match planner.add_task(&input) {
        Ok(id) => {
            msg_success!(Message::TaskCreated(id));
            msg_print!(Message::TasksHeader, true);
            View::tasks(planner.tasks())
        }
        Err(e) => report(e),
    }
}

fn today() -> String {
    Local::now().format(DATE_FORMAT).to_string()
}

fn from_args(title: String, args: AddArgs, config: &Config) -> TaskInput {
    let defaults = &config.defaults;

    TaskInput {
        title,
        description: args.description.unwrap_or_default(),
        date: args.date.unwrap_or_else(today),
        time: args.time.unwrap_or_else(|| defaults.time.clone()),
        priority: args.priority.unwrap_or_else(|| defaults.priority.to_string()),
        status: args.status.unwrap_or_else(|| defaults.status.to_string()),
    }
}

// Emptiness and format checks stay in the validator so the form and the
// flags are held to the same rules.
fn form(config: &Config) -> Result<TaskInput> {
    let theme = ColorfulTheme::default();
    let defaults = &config.defaults;

    let title: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptTitle.to_string())
        .allow_empty(true)
        .interact_text()?;
    let description: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptDescription.to_string())
        .allow_empty(true)
        .interact_text()?;
    let date: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptDate.to_string())
        .default(today())
        .allow_empty(true)
        .interact_text()?;
    let time: String = Input::with_theme(&theme)
        .with_prompt(Message::PromptTime.to_string())
        .default(defaults.time.clone())
        .allow_empty(true)
        .interact_text()?;

    let priorities: Vec<&str> = Priority::ALL.iter().map(Priority::as_str).collect();
    let priority = Select::with_theme(&theme)
        .with_prompt(Message::PromptPriority.to_string())
        .items(&priorities)
        .default(Priority::ALL.iter().position(|p| *p == defaults.priority).unwrap_or(0))
        .interact()?;

    let statuses: Vec<&str> = Status::ALL.iter().map(Status::as_str).collect();
    let status = Select::with_theme(&theme)
        .with_prompt(Message::PromptStatus.to_string())
        .items(&statuses)
        .default(Status::ALL.iter().position(|s| *s == defaults.status).unwrap_or(0))
        .interact()?;

    Ok(TaskInput {
        title,
        description,
        date,
        time,
        priority: priorities.get(priority).copied().unwrap_or_default().to_string(),
        status: statuses.get(status).copied().unwrap_or_default().to_string(),
    })
}
