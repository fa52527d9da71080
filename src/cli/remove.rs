//! `taskdb remove` command implementation

use anyhow::Result;
use clap::Args;
use std::io::Write;

use crate::task::TaskStore;

#[derive(Args)]
pub struct RemoveArgs {
    /// Task ID
    #[arg(allow_negative_numbers = true)]
    id: i64,
}

pub fn run(store: &mut TaskStore, args: RemoveArgs, out: &mut impl Write) -> Result<()> {
    let removed = store.remove(args.id)?;
    writeln!(out, "Removed task {}: {}", removed.id, removed.description)?;
    Ok(())
}
