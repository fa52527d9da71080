//! `taskdb list` and `taskdb pending` command implementations

use anyhow::Result;
use clap::Args;
use std::io::Write;

use crate::task::render::draw_table;
use crate::task::{Task, TaskStore};

#[derive(Args, Default)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(store: &TaskStore, args: ListArgs, color: bool, out: &mut impl Write) -> Result<()> {
    print_tasks(store.tasks(), store.pending(), args.json, color, out)
}

pub fn run_pending(
    store: &TaskStore,
    args: ListArgs,
    color: bool,
    out: &mut impl Write,
) -> Result<()> {
    let pending = store.list_pending_tasks();
    print_tasks(&pending, pending.len(), args.json, color, out)
}

fn print_tasks(
    tasks: &[Task],
    pending: usize,
    json: bool,
    color: bool,
    out: &mut impl Write,
) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(tasks)?)?;
        return Ok(());
    }

    if tasks.is_empty() {
        writeln!(out, "No tasks found.")?;
        return Ok(());
    }

    writeln!(out, "{}", draw_table(tasks, color))?;
    writeln!(out, "\n{} pending", pending)?;
    Ok(())
}
