//! CLI argument definitions

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use super::add::AddArgs;
use super::done::DoneArgs;
use super::list::ListArgs;
use super::remove::RemoveArgs;
use super::schedule::ScheduleArgs;
use super::update::UpdateArgs;

#[derive(Parser)]
#[command(name = "taskdb")]
#[command(version, about = "Track short to-do items and schedule reminders for them")]
pub struct Cli {
    /// Directory holding .taskdb.json (defaults to $HOME)
    #[arg(long, global = true, env = "TASK_DB_PATH", value_name = "DIR")]
    pub db_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task
    Add(AddArgs),

    /// Remove a task
    #[command(alias = "rm")]
    Remove(RemoveArgs),

    /// Replace a task's description
    Update(UpdateArgs),

    /// Mark a task as completed
    #[command(alias = "complete")]
    Done(DoneArgs),

    /// Schedule a desktop reminder for a task with `at`
    Schedule(ScheduleArgs),

    /// List all tasks (default)
    #[command(alias = "ls")]
    List(ListArgs),

    /// List tasks that are not completed yet
    Pending(ListArgs),

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}
