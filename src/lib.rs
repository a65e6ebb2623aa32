//! # Dayplan - daily task planner
//!
//! Keeps a list of daily tasks (title, description, date, time, priority,
//! status) in a local SQLite database and shows them ordered by date and
//! time.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dayplan::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
