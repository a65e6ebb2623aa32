//! SQLite persistence layer.
//!
//! - [`db`]: connection handle owned for the process lifetime
//! - [`tasks`]: the task table and its operations

pub mod db;
pub mod tasks;
