//! Core library modules for the dayplan application.
//!
//! - **Task model**: [`task`] records, [`validator`] rules, [`error`] taxonomy
//! - **Synchronization**: [`task_list`] view model and the [`planner`] facade
//! - **Infrastructure**: [`config`], [`data_storage`], [`logging`], [`messages`]
//! - **Presentation**: [`view`] table rendering
//!
//! ```rust,no_run
//! use dayplan::db::{db::Db, tasks::Tasks};
//! use dayplan::libs::task::TaskInput;
//! use dayplan::libs::validator::validate;
//!
//! let task = validate(&TaskInput::new("Write report", "", "2024-05-01", "10:00", "Medium", "Pending"))?;
//! let mut tasks = Tasks::new(Db::new()?)?;
//! tasks.create(&task)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod error;
pub mod logging;
pub mod messages;
pub mod planner;
pub mod task;
pub mod task_list;
pub mod validator;
pub mod view;
