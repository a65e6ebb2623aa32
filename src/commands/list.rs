use super::{open_store, report};
use crate::{
    libs::{config::Config, messages::Message, planner::Planner, validator::is_canonical, view::View},
    msg_info, msg_print, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Print the tasks as JSON
    #[arg(long)]
    json: bool,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let config = Config::read()?;
    let mut store = open_store(&config)?;
    let mut planner = Planner::new(&mut store, config.validator());

    let tasks = match planner.initialize() {
        Ok(tasks) => tasks,
        Err(e) => return report(e),
    };

    if args.json {
        return View::tasks_json(tasks);
    }
    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    msg_print!(Message::TasksHeader, true);
    View::tasks(tasks)?;

    // Text order only matches chronological order for zero-padded values.
    let unsortable = tasks.iter().filter(|task| !is_canonical(&task.date, &task.time)).count();
    if unsortable > 0 {
        msg_warning!(Message::UnsortableTasks(unsortable));
    }

    Ok(())
}
