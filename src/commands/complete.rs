use super::{nothing_to_select, open_store, report, select_task};
use crate::{
    libs::{config::Config, messages::Message, planner::Planner, view::View},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct CompleteArgs {
    /// Task id; when omitted the task is picked from the list
    id: Option<i64>,
}

pub fn cmd(args: CompleteArgs) -> Result<()> {
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
        None => select_task(planner.tasks(), Message::SelectTaskToComplete)?,
    };

    match planner.complete_task(selected) {
        Ok(()) => {
            if let Some(id) = selected {
                msg_success!(Message::TaskCompleted(id));
            }
            View::tasks(planner.tasks())
        }
        Err(e) => report(e),
    }
}
