//! `taskdb schedule` command implementation

use anyhow::Result;
use clap::Args;
use std::io::Write;

use crate::scheduler::JobScheduler;
use crate::task::TaskStore;

#[derive(Args)]
pub struct ScheduleArgs {
    /// Task ID
    #[arg(allow_negative_numbers = true)]
    id: i64,

    /// When to fire the reminder, in `at` syntax (e.g. "now + 1 hour", "9:30 tomorrow")
    #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
    when: Vec<String>,
}

pub fn run(
    store: &TaskStore,
    scheduler: &impl JobScheduler,
    args: ScheduleArgs,
    out: &mut impl Write,
) -> Result<()> {
    let when = super::join_words(&args.when);
    store.schedule_task(args.id, &when, scheduler)?;
    writeln!(out, "Scheduled reminder for task {} at {}", args.id, when)?;
    Ok(())
}
