//! `taskdb done` command implementation

use anyhow::Result;
use clap::Args;
use std::io::Write;

use crate::task::TaskStore;

#[derive(Args)]
pub struct DoneArgs {
    /// Task ID
    #[arg(allow_negative_numbers = true)]
    id: i64,
}

pub fn run(store: &mut TaskStore, args: DoneArgs, out: &mut impl Write) -> Result<()> {
    store.set_completed(args.id)?;
    writeln!(out, "Completed task {} ({} pending)", args.id, store.pending())?;
    Ok(())
}
