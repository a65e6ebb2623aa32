use super::{nothing_to_select, open_store, report, select_task};
use crate::{
    libs::{config::Config, messages::Message, planner::Planner, task::TaskRecord, view::View},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task id; when omitted the task is picked from the list
    id: Option<i64>,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let config = Config::read()?;
    let mut store = open_store(&config)?;
    let mut planner = Planner::new(&mut store, config.validator());

    if let Err(e) = planner.initialize() {
        return report(e);
    }

    if nothing_to_select(planner.tasks(), args.id) {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    let selected = match args.id {
        Some(id) => Some(id),
        None => select_task(planner.tasks(), Message::SelectTaskToDelete)?,
    };

    if let Some(id) = selected {
        if !args.yes && !confirm(planner.tasks(), id)? {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    match planner.delete_task(selected) {
        Ok(()) => {
            if let Some(id) = selected {
                msg_success!(Message::TaskDeleted(id));
            }
            View::tasks(planner.tasks())
        }
        Err(e) => report(e),
    }
}

fn confirm(tasks: &[TaskRecord], id: i64) -> Result<bool> {
    let label = tasks
        .iter()
        .find(|task| task.id == id)
        .map(TaskRecord::label)
        .unwrap_or_else(|| format!("#{}", id));

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteTask(label).to_string())
        .default(false)
        .interact()?;

    Ok(confirmed)
}
